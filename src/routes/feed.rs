// ABOUTME: Personalized recipe feed route
// ABOUTME: Ranks the catalog with the caller's settings, diversifies, and marks saved recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::{HeaderMap, StatusCode};
use nutrifind_intelligence::{diversify, RecommendationSettings};
use serde::Deserialize;
use tracing::debug;

use super::optional_caller;
use crate::constants::feed::MAX_FEED_LIMIT;
use crate::models::ScoredRecipe;
use crate::resources::ServerResources;

/// Query parameters for the feed
#[derive(Debug, Deserialize, Default)]
pub struct FeedQuery {
    /// Number of recipes to return
    pub limit: Option<usize>,
}

/// Feed routes implementation
pub struct FeedRoutes;

impl FeedRoutes {
    /// Create the feed routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/v1/feed", get(Self::handle_feed))
            .with_state(resources)
    }

    /// Ranked, optionally diversified feed for `settings`
    ///
    /// Anonymous callers get the default settings and no saved markers.
    #[must_use]
    pub fn build_feed(
        resources: &ServerResources,
        settings: &RecommendationSettings,
        caller: Option<&str>,
        limit: usize,
    ) -> Vec<ScoredRecipe> {
        let recipes = resources.catalog.list();
        let ranked = resources.engine.rank(&recipes, settings);

        let bias = settings.personalization.diversity_bias;
        let mut feed = if bias > 0.0 {
            diversify(ranked, bias, Some(limit))
        } else {
            let mut ranked = ranked;
            ranked.truncate(limit);
            ranked
        };

        if let Some(user_id) = caller {
            let saved = resources.saved.saved_ids(user_id);
            for item in &mut feed {
                item.recipe.is_saved = Some(saved.contains(&item.recipe.id));
            }
        }
        feed
    }

    /// Handle GET /api/v1/feed
    async fn handle_feed(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<FeedQuery>,
    ) -> Response {
        let caller = optional_caller(&headers);
        let settings = caller.as_deref().map_or_else(RecommendationSettings::default, |user_id| {
            resources.settings_for(user_id).load()
        });
        let limit = query
            .limit
            .unwrap_or(resources.config.feed_limit)
            .clamp(1, MAX_FEED_LIMIT);

        let feed = Self::build_feed(&resources, &settings, caller.as_deref(), limit);
        debug!(
            user_id = caller.as_deref().unwrap_or("anonymous"),
            limit,
            returned = feed.len(),
            "Served feed"
        );
        (StatusCode::OK, Json(feed)).into_response()
    }
}
