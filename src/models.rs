// ABOUTME: Core data models re-exported from nutrifind-core
// ABOUTME: Recipe, Nutrition, ScoredRecipe, and Product shared by every workspace crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrifind_core::models::*;
