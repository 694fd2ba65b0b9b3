// ABOUTME: Recommendation settings routes for the calling user
// ABOUTME: Load, save with merge onto defaults, reset, and download as a JSON attachment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};
use nutrifind_intelligence::settings::merge_with_defaults;
use serde_json::Value;

use super::require_caller;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::settings_store::SettingsStore;

/// Settings routes implementation
pub struct SettingsRoutes;

impl SettingsRoutes {
    /// Create the settings routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/v1/me/settings",
                get(Self::handle_get)
                    .put(Self::handle_put)
                    .delete(Self::handle_reset),
            )
            .route("/api/v1/me/settings/export", get(Self::handle_export))
            .with_state(resources)
    }

    /// Handle GET /api/v1/me/settings
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        let settings = resources.settings_for(&user_id).load();
        Ok((StatusCode::OK, Json(settings)).into_response())
    }

    /// Handle PUT /api/v1/me/settings
    ///
    /// The body may be partial; missing sections take their defaults.
    async fn handle_put(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        if !body.is_object() {
            return Err(AppError::invalid_input("Settings must be a JSON object"));
        }
        let settings = merge_with_defaults(body)
            .map_err(|e| AppError::invalid_input(format!("Invalid settings: {e}")))?;

        resources.settings_for(&user_id).save(&settings);
        Ok((StatusCode::OK, Json(settings)).into_response())
    }

    /// Handle DELETE /api/v1/me/settings
    async fn handle_reset(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        let defaults = resources.settings_for(&user_id).reset();
        Ok((StatusCode::OK, Json(defaults)).into_response())
    }

    /// Handle GET /api/v1/me/settings/export
    async fn handle_export(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        let settings = resources.settings_for(&user_id).load();
        let export = SettingsStore::export(&settings)?;

        let disposition = format!("attachment; filename=\"{}\"", export.file_name);
        Ok((
            StatusCode::OK,
            [
                (CONTENT_TYPE, export.content_type.to_owned()),
                (CONTENT_DISPOSITION, disposition),
            ],
            export.body,
        )
            .into_response())
    }
}
