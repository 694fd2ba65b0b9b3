// ABOUTME: Core data models shared by the NutriFind crates
// ABOUTME: Recipe, Nutrition, ScoredRecipe, and Product definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Lenient deserialization helpers for backend payloads
pub mod coerce;
/// Packaged food product model
pub mod product;
/// Recipe and nutrition models
pub mod recipe;

pub use product::Product;
pub use recipe::{Difficulty, Nutrition, Recipe, ScoreBreakdown, ScoredRecipe};
