// ABOUTME: HTTP server assembly and lifecycle
// ABOUTME: Merges domain routes, applies tracing, CORS and request-id layers, serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::middleware::{request_id_middleware, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{
    AnalyzeRoutes, BarcodeRoutes, FeedRoutes, HealthRoutes, HistoryRoutes, RecipeRoutes,
    SavedRoutes, SettingsRoutes, UserRecipeRoutes,
};

/// Build the full application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(FeedRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(SavedRoutes::routes(Arc::clone(&resources)))
        .merge(HistoryRoutes::routes(Arc::clone(&resources)))
        .merge(SettingsRoutes::routes(Arc::clone(&resources)))
        .merge(UserRecipeRoutes::routes(Arc::clone(&resources)))
        .merge(AnalyzeRoutes::routes(Arc::clone(&resources)))
        .merge(BarcodeRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, shutting down");
        return;
    }
    info!("Shutdown signal received");
}

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(resources: Arc<ServerResources>) -> AppResult<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        AppError::config(format!("Cannot bind {address}: {e}")).with_source(e)
    })?;
    info!(address = %address, "HTTP server listening");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")).with_source(e))?;

    info!("HTTP server stopped");
    Ok(())
}
