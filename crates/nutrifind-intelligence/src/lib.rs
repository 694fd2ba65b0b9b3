// ABOUTME: Recommendation ranking, settings model, and recipe analysis for NutriFind
// ABOUTME: Pure computation crate with no I/O, extracted from the service crate for modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriFind` Intelligence
//!
//! Algorithms behind recipe recommendations. Everything here is a pure
//! function of its inputs; persistence and transport live in the service
//! crate.
//!
//! ## Modules
//!
//! - **settings**: `RecommendationSettings` with defaults and deep-merge of stored blobs
//! - **`recommendation_engine`**: hard filtering, five sub-scores, weighted composite, stable sort
//! - **scoring**: reusable numeric primitives (normalize, macro distance, time closeness, similarity)
//! - **diversity**: maximal-marginal-relevance re-rank
//! - **analyzer**: ingredient parsing, gram conversion, per-serving nutrition estimates

/// Recipe analyzer (ingredient parsing and nutrition estimates)
pub mod analyzer;
/// Scoring constants
pub mod constants;
/// Diversity re-rank of scored recipes
pub mod diversity;
/// Recipe ranking engine
pub mod recommendation_engine;
/// Reusable scoring primitives
pub mod scoring;
/// Recommendation settings model
pub mod settings;

pub use diversity::diversify;
pub use recommendation_engine::{rank, EffectiveWeights, RankingEngine, TagMatching};
pub use settings::RecommendationSettings;
