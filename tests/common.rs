// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging, recipe builders, and in-memory server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutrifind`

use std::env;
use std::sync::{Arc, Once};

use nutrifind::config::ServerConfig;
use nutrifind::intelligence::RecommendationSettings;
use nutrifind::models::{Difficulty, Nutrition, Recipe};
use nutrifind::resources::ServerResources;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Recipe with tags and prep/cook time
pub fn recipe(id: &str, tags: &[&str], prep: u32, cook: u32) -> Recipe {
    Recipe {
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        prep_time: Some(prep),
        cook_time: Some(cook),
        ..Recipe::new(id, id)
    }
}

/// Recipe with a full macro label
pub fn recipe_with_macros(
    id: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> Recipe {
    Recipe {
        nutrition: Some(Nutrition {
            calories: Some(calories),
            protein: Some(protein),
            carbs: Some(carbs),
            fat: Some(fat),
            ..Nutrition::default()
        }),
        difficulty: Some(Difficulty::Easy),
        ..recipe(id, &[], 10, 10)
    }
}

/// Default settings with diet, allergen and time window overrides
pub fn settings_with(diets: &[&str], allergens: &[&str], window: (u32, u32)) -> RecommendationSettings {
    RecommendationSettings {
        diets: diets.iter().map(|d| (*d).to_owned()).collect(),
        allergens: allergens.iter().map(|a| (*a).to_owned()).collect(),
        time_range_min_max: window,
        ..RecommendationSettings::default()
    }
}

/// In-memory resources over the bundled catalog, barcodes, and ingredients
pub fn test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::in_memory(ServerConfig::default()).unwrap())
}
