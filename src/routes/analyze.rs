// ABOUTME: Recipe analyzer route estimating per-serving nutrition
// ABOUTME: Accepts pasted ingredient text, structured rows, or both
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use http::StatusCode;
use nutrifind_intelligence::analyzer::{estimate_nutrition, parse_recipe_text, IngredientRow};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resources::ServerResources;

const fn default_servings() -> u32 {
    1
}

/// Analyzer request body
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Free text, one ingredient per line
    #[serde(default)]
    pub text: Option<String>,
    /// Structured ingredient rows
    #[serde(default)]
    pub rows: Option<Vec<IngredientRow>>,
    /// Servings to divide the totals by
    #[serde(default = "default_servings")]
    pub servings: u32,
}

/// Analyzer routes implementation
pub struct AnalyzeRoutes;

impl AnalyzeRoutes {
    /// Create the analyzer routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/v1/analyze", post(Self::handle_analyze))
            .with_state(resources)
    }

    /// Handle POST /api/v1/analyze
    ///
    /// Parsed text rows come before structured rows.
    async fn handle_analyze(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<AnalyzeRequest>,
    ) -> Result<Response, AppError> {
        if body.text.is_none() && body.rows.is_none() {
            return Err(AppError::invalid_input(
                "Provide ingredient text or rows to analyze",
            ));
        }

        let mut rows = body.text.as_deref().map(parse_recipe_text).unwrap_or_default();
        rows.extend(body.rows.unwrap_or_default());

        let estimate = estimate_nutrition(&resources.ingredients, &rows, body.servings);
        Ok((StatusCode::OK, Json(estimate)).into_response())
    }
}
