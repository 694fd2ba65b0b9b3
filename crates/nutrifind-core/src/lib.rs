// ABOUTME: Core types and constants for the NutriFind recipe discovery platform
// ABOUTME: Foundation crate with error handling, recipe/product models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriFind` Core
//!
//! Foundation crate providing shared types and constants for the `NutriFind`
//! recipe platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Storage keys, header names, and service names
//! - **models**: Recipe, nutrition, scored recipe, and product models

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, Nutrition, `ScoredRecipe`, Product)
pub mod models;
