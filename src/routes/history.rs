// ABOUTME: View history routes for the calling user
// ABOUTME: Records recipe views, lists recent recipes newest first, and clears history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{find_recipe, require_caller};
use crate::constants::storage::{HISTORY_CAP, RECENT_RECIPES_LIMIT};
use crate::errors::AppError;
use crate::history::HistoryEntry;
use crate::models::Recipe;
use crate::resources::ServerResources;

/// Query parameters for the history listing
#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    /// Number of recent recipes to resolve
    pub limit: Option<usize>,
}

/// Raw views plus the recipes they resolve to
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    /// Views, newest first
    pub history: Vec<HistoryEntry>,
    /// Distinct recently viewed recipes still available, newest first
    pub recent_recipes: Vec<Recipe>,
}

/// History routes implementation
pub struct HistoryRoutes;

impl HistoryRoutes {
    /// Create the history routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/v1/recipes/:id/view", post(Self::handle_record))
            .route(
                "/api/v1/me/history",
                get(Self::handle_list).delete(Self::handle_clear),
            )
            .with_state(resources)
    }

    /// Handle POST /api/v1/recipes/:id/view
    async fn handle_record(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        if find_recipe(&resources, Some(&user_id), &id).is_none() {
            return Err(AppError::not_found(format!("Recipe {id}")));
        }
        resources.history_for(&user_id).record_view(&id);
        Ok((StatusCode::OK, Json(json!({ "ok": true }))).into_response())
    }

    /// Handle GET /api/v1/me/history
    ///
    /// Views of recipes that no longer exist stay in `history` but are
    /// skipped in `recentRecipes`.
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<HistoryQuery>,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        let history = resources.history_for(&user_id);
        let limit = query
            .limit
            .unwrap_or(RECENT_RECIPES_LIMIT)
            .clamp(1, HISTORY_CAP);

        let recent_recipes = history
            .recent(HISTORY_CAP)
            .iter()
            .filter_map(|id| find_recipe(&resources, Some(&user_id), id))
            .take(limit)
            .collect();
        let body = HistoryResponse {
            history: history.entries(),
            recent_recipes,
        };
        Ok((StatusCode::OK, Json(body)).into_response())
    }

    /// Handle DELETE /api/v1/me/history
    async fn handle_clear(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        resources.history_for(&user_id).clear();
        Ok((StatusCode::OK, Json(json!({ "ok": true }))).into_response())
    }
}
