// ABOUTME: Saved recipe routes for the calling user
// ABOUTME: Lists saved recipes and sets the saved state explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

use super::require_caller;
use crate::errors::AppError;
use crate::models::Recipe;
use crate::resources::ServerResources;

/// Body of an explicit save request
#[derive(Debug, Serialize, Deserialize)]
pub struct SetSavedRequest {
    /// Recipe id
    pub id: String,
    /// Desired saved state
    pub saved: bool,
}

/// Saved recipe routes implementation
pub struct SavedRoutes;

impl SavedRoutes {
    /// Create the saved recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/v1/me/saved",
                get(Self::handle_list).post(Self::handle_set),
            )
            .with_state(resources)
    }

    /// Handle GET /api/v1/me/saved
    ///
    /// Catalog recipes come first in catalog order, then the caller's own
    /// saved recipes.
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        let saved = resources.saved.saved_ids(&user_id);

        let own = resources.user_recipes_for(&user_id).list();
        let recipes: Vec<Recipe> = resources
            .catalog
            .list()
            .into_iter()
            .chain(own)
            .filter(|recipe| saved.contains(&recipe.id))
            .map(|mut recipe| {
                recipe.is_saved = Some(true);
                recipe
            })
            .collect();

        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle POST /api/v1/me/saved
    async fn handle_set(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<SetSavedRequest>,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        resources.saved.set_saved(&user_id, &body.id, body.saved);
        Ok((StatusCode::OK, Json(serde_json::json!({ "ok": true }))).into_response())
    }
}
