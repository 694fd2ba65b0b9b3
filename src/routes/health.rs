// ABOUTME: Health check route for liveness probes
// ABOUTME: Reports service name, version, and current time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::constants::service_names::NUTRIFIND_SERVER;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check routes
    pub fn routes() -> Router {
        Router::new().route("/health", get(Self::handle_health))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": NUTRIFIND_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }
}
