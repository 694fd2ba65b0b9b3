// ABOUTME: Barcode lookup routes
// ABOUTME: Validates codes before lookup and serves the full mock directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;

use crate::barcode::validate_barcode;
use crate::errors::AppError;
use crate::models::Product;
use crate::resources::ServerResources;

/// Barcode routes implementation
pub struct BarcodeRoutes;

impl BarcodeRoutes {
    /// Create the barcode routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/v1/barcodes/:code", get(Self::handle_lookup))
            .route("/mock/barcodes", get(Self::handle_directory))
            .with_state(resources)
    }

    /// Handle GET /api/v1/barcodes/:code
    async fn handle_lookup(
        State(resources): State<Arc<ServerResources>>,
        Path(code): Path<String>,
    ) -> Result<Response, AppError> {
        let code = code.trim();
        validate_barcode(code)?;
        let product = resources
            .products
            .lookup(code)
            .ok_or_else(|| AppError::not_found(format!("Product {code}")))?;
        Ok((StatusCode::OK, Json(product)).into_response())
    }

    /// Handle GET /mock/barcodes
    async fn handle_directory(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<BTreeMap<String, Product>> {
        Json(resources.products.all())
    }
}
