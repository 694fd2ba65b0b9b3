// ABOUTME: Recipe search, detail (recorded as a view), and save toggle routes
// ABOUTME: Search accepts q, sort, and a JSON filters parameter; malformed filters are ignored
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
use tracing::warn;

use super::{find_recipe, optional_caller, require_caller};
use crate::catalog::{SearchFilters, SearchQuery, SortOrder};
use crate::errors::AppError;
use crate::resources::ServerResources;

/// Query parameters for recipe search
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    /// Free-text query
    #[serde(default)]
    pub q: String,
    /// `relevance`, `time`, `calories` or `title`
    pub sort: Option<String>,
    /// JSON-encoded [`SearchFilters`]
    pub filters: Option<String>,
}

impl SearchParams {
    /// Convert into a catalog query, ignoring filters that fail to parse
    #[must_use]
    pub fn into_query(self) -> SearchQuery {
        let filters = self
            .filters
            .as_deref()
            .and_then(|raw| match serde_json::from_str::<SearchFilters>(raw) {
                Ok(filters) => Some(filters),
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed search filters");
                    None
                }
            })
            .unwrap_or_default();
        SearchQuery {
            q: self.q,
            sort: self
                .sort
                .as_deref()
                .map(SortOrder::from_str_or_default)
                .unwrap_or_default(),
            filters,
        }
    }
}

/// Response of the save toggle
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveToggleResponse {
    /// Saved state after the toggle
    pub is_saved: bool,
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create the recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/v1/recipes", get(Self::handle_search))
            .route("/api/v1/recipes/:id", get(Self::handle_get))
            .route("/api/v1/recipes/:id/save", post(Self::handle_toggle_save))
            .with_state(resources)
    }

    /// Handle GET /api/v1/recipes
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<SearchParams>,
    ) -> Response {
        let query = params.into_query();
        let mut results = resources.catalog.search(&query);

        if let Some(user_id) = optional_caller(&headers) {
            let saved = resources.saved.saved_ids(&user_id);
            for recipe in &mut results {
                recipe.is_saved = Some(saved.contains(&recipe.id));
            }
        }
        (StatusCode::OK, Json(results)).into_response()
    }

    /// Handle GET /api/v1/recipes/:id
    ///
    /// Viewing a recipe as an identified caller records it in their history.
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let caller = optional_caller(&headers);
        let mut recipe = find_recipe(&resources, caller.as_deref(), &id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;

        if let Some(user_id) = caller.as_deref() {
            recipe.is_saved = Some(resources.saved.is_saved(user_id, &id));
            resources.history_for(user_id).record_view(&id);
        }
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle POST /api/v1/recipes/:id/save
    async fn handle_toggle_save(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        if find_recipe(&resources, Some(&user_id), &id).is_none() {
            return Err(AppError::not_found(format!("Recipe {id}")));
        }

        let is_saved = resources.saved.toggle_save(&user_id, &id);
        Ok((StatusCode::OK, Json(SaveToggleResponse { is_saved })).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_filters_are_ignored() {
        let params = SearchParams {
            q: "pasta".to_owned(),
            sort: Some("calories".to_owned()),
            filters: Some("{not json".to_owned()),
        };
        let query = params.into_query();
        assert_eq!(query.q, "pasta");
        assert_eq!(query.sort, SortOrder::Calories);
        assert_eq!(query.filters, SearchFilters::default());
    }

    #[test]
    fn test_filters_parse_from_camel_case_json() {
        let params = SearchParams {
            filters: Some(r#"{"dietaryRestrictions":["vegan"],"maxTime":30}"#.to_owned()),
            ..SearchParams::default()
        };
        let query = params.into_query();
        assert_eq!(query.filters.dietary_restrictions, vec!["vegan"]);
        assert_eq!(query.filters.max_time, Some(30));
        assert_eq!(query.sort, SortOrder::Relevance);
    }
}
