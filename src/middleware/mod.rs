// ABOUTME: HTTP middleware for request correlation and cross-origin access
// ABOUTME: Request ID propagation with tracing spans, plus the CORS layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request ID middleware
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId};
