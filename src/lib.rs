// ABOUTME: Main library entry point for the NutriFind recipe discovery service
// ABOUTME: Persistence, catalog, settings, HTTP routes, and server wiring around the ranking engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriFind`
//!
//! Recipe discovery API with a configurable recommendation ranking.
//!
//! The ranking algorithms, settings model and recipe analyzer live in the
//! `nutrifind-intelligence` crate; shared errors, models and constants live
//! in `nutrifind-core`. This crate adds everything with I/O: key-value
//! persistence, the settings, history and user-recipe stores, the recipe catalog,
//! barcode lookup, configuration, logging and the HTTP surface.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use nutrifind::config::ServerConfig;
//! use nutrifind::resources::ServerResources;
//! use nutrifind::server;
//!
//! # async fn example() -> nutrifind::errors::AppResult<()> {
//! let config = ServerConfig::from_env()?;
//! let resources = Arc::new(ServerResources::from_config(config)?);
//! server::run(resources).await
//! # }
//! ```

/// Barcode validation and product lookup
pub mod barcode;

/// Recipe catalog and search
pub mod catalog;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Recently viewed recipes
pub mod history;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (request ids, CORS)
pub mod middleware;

/// Recipe, nutrition and product models
pub mod models;

/// Shared server resources
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Saved recipes repository
pub mod saved;

/// HTTP server assembly
pub mod server;

/// Recommendation settings persistence
pub mod settings_store;

/// Key-value persistence boundary
pub mod storage;

/// User-built recipe persistence
pub mod user_recipes;

pub use nutrifind_intelligence as intelligence;
