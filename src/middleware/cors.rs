// ABOUTME: CORS configuration for the HTTP API
// ABOUTME: Wildcard or explicit origin list from CORS_ALLOWED_ORIGINS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::header::{HeaderName, ACCEPT, CONTENT_TYPE, ORIGIN};
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ServerConfig;
use crate::constants::headers::{REQUEST_ID, USER_ID};

/// Build the CORS layer from the configured origins
///
/// An empty list, a `*` entry, or a list where no origin parses all mean any
/// origin.
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let wildcard = config.cors_origins.is_empty() || config.cors_origins.iter().any(|o| o == "*");
    let allow_origin = if wildcard {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            CONTENT_TYPE,
            ACCEPT,
            ORIGIN,
            HeaderName::from_static(USER_ID),
            HeaderName::from_static(REQUEST_ID),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID)])
}
