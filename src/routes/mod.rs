// ABOUTME: Route module organization for the NutriFind HTTP API
// ABOUTME: Domain route groups plus caller identity helpers shared by handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for `NutriFind`
//!
//! Each domain module exposes a `*Routes` struct whose `routes` function
//! returns an axum `Router`. Handlers are thin: they resolve the caller,
//! delegate to the stores and the ranking engine, and serialize the result.
//!
//! Callers identify themselves with the `X-User-Id` header; authentication
//! happens upstream of this service.

/// Recipe analyzer routes
pub mod analyze;
/// Barcode lookup routes
pub mod barcodes;
/// Personalized feed routes
pub mod feed;
/// Health check routes
pub mod health;
/// Recipe view history routes
pub mod history;
/// Recipe search, detail, and save toggle routes
pub mod recipes;
/// Saved recipe list routes
pub mod saved;
/// Recommendation settings routes
pub mod settings;
/// User-built recipe routes
pub mod user_recipes;

pub use analyze::AnalyzeRoutes;
pub use barcodes::BarcodeRoutes;
pub use feed::FeedRoutes;
pub use health::HealthRoutes;
pub use history::HistoryRoutes;
pub use recipes::RecipeRoutes;
pub use saved::SavedRoutes;
pub use settings::SettingsRoutes;
pub use user_recipes::UserRecipeRoutes;

use http::HeaderMap;

use crate::constants::headers::USER_ID;
use crate::errors::{AppError, AppResult};
use crate::models::Recipe;
use crate::resources::ServerResources;

/// Caller id from the `X-User-Id` header, if present and non-blank
#[must_use]
pub fn optional_caller(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_ID)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}

/// Caller id from the `X-User-Id` header
///
/// # Errors
///
/// Returns `AUTH_REQUIRED` when the header is missing or blank.
pub fn require_caller(headers: &HeaderMap) -> AppResult<String> {
    optional_caller(headers).ok_or_else(AppError::auth_required)
}

/// Find a recipe in the catalog, then among the caller's own recipes
fn find_recipe(resources: &ServerResources, caller: Option<&str>, id: &str) -> Option<Recipe> {
    resources.catalog.find(id).or_else(|| {
        caller.and_then(|user_id| resources.user_recipes_for(user_id).find(id))
    })
}
