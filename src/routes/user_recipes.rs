// ABOUTME: Routes for recipes the calling user built
// ABOUTME: Lists and upserts user recipes, generating ids for new ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use http::{HeaderMap, StatusCode};

use super::require_caller;
use crate::errors::AppError;
use crate::models::Recipe;
use crate::resources::ServerResources;
use crate::user_recipes::make_user_recipe_id;

/// User recipe routes implementation
pub struct UserRecipeRoutes;

impl UserRecipeRoutes {
    /// Create the user recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/v1/me/recipes",
                get(Self::handle_list).post(Self::handle_upsert),
            )
            .with_state(resources)
    }

    /// Handle GET /api/v1/me/recipes
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        let recipes = resources.user_recipes_for(&user_id).list();
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle POST /api/v1/me/recipes
    async fn handle_upsert(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(mut recipe): Json<Recipe>,
    ) -> Result<Response, AppError> {
        let user_id = require_caller(&headers)?;
        let has_title = recipe
            .title
            .as_deref()
            .or(recipe.name.as_deref())
            .is_some_and(|title| !title.trim().is_empty());
        if !has_title {
            return Err(AppError::invalid_input("Recipe needs a title"));
        }

        let created = recipe.id.trim().is_empty();
        if created {
            recipe.id = make_user_recipe_id();
        }
        recipe.updated_at = Some(Utc::now().to_rfc3339());

        resources.user_recipes_for(&user_id).upsert(recipe.clone());
        let status = if created {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };
        Ok((status, Json(recipe)).into_response())
    }
}
