// ABOUTME: Recommendation settings model with canonical defaults
// ABOUTME: Weights, hard constraints, nutrition targets, and UX knobs used by ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Settings
//!
//! One canonical schema for everything the ranking engine and the settings UI
//! share. Persisted blobs are merged onto [`RecommendationSettings::default`]
//! by [`merge`], so older or partial blobs still produce a complete value.

/// Deep-merge of persisted settings onto defaults
pub mod merge;

use serde::{Deserialize, Serialize};

pub use merge::{deep_merge, merge_with_defaults, parse_stored};

/// Display unit system (does not affect scoring)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Units {
    /// US customary units
    #[default]
    #[serde(rename = "US")]
    Us,
    /// Metric units
    Metric,
}

/// Target macro split as calorie percentages (conceptually summing to 100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroWeights {
    /// Protein share of calories
    pub protein: f64,
    /// Carbohydrate share of calories
    pub carbs: f64,
    /// Fat share of calories
    pub fat: f64,
}

impl Default for MacroWeights {
    fn default() -> Self {
        Self {
            protein: 30.0,
            carbs: 40.0,
            fat: 30.0,
        }
    }
}

/// Per-recipe nutrient ceilings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientCaps {
    /// Sodium ceiling (mg)
    pub sodium_max: f64,
    /// Added sugar ceiling (g)
    pub added_sugar_max: f64,
}

impl Default for NutrientCaps {
    fn default() -> Self {
        Self {
            sodium_max: 2300.0,
            added_sugar_max: 50.0,
        }
    }
}

/// UX behavior flags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorSettings {
    /// Show the score badge on recipe cards
    pub show_score_badge: bool,
    /// Exploration rate in `[0, 1]`
    pub exploration: f64,
    /// Weight of recent activity in `[0, 1]`
    pub short_term_focus: f64,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            show_score_badge: true,
            exploration: 0.15,
            short_term_focus: 0.5,
        }
    }
}

/// Personalization knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationSettings {
    /// Strength of the diversity re-rank in `[0, 1]`
    pub diversity_bias: f64,
    /// History window; zero disables history-based personal scoring
    pub avoid_recently_viewed_hours: f64,
}

impl PersonalizationSettings {
    /// Whether the personal score uses history mode
    #[must_use]
    pub fn uses_history(&self) -> bool {
        self.avoid_recently_viewed_hours > 0.0
    }
}

impl Default for PersonalizationSettings {
    fn default() -> Self {
        Self {
            diversity_bias: 0.25,
            avoid_recently_viewed_hours: 48.0,
        }
    }
}

/// Notification preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    /// Send cooking reminders
    pub enable_reminders: bool,
}

/// Relative importance of the five sub-scores
///
/// Weights need not sum to one; the engine normalizes by their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Health sub-score weight
    pub health: f64,
    /// Time sub-score weight
    pub time: f64,
    /// Popularity sub-score weight
    pub popularity: f64,
    /// Personal sub-score weight
    pub personal: f64,
    /// Diversity sub-score weight
    pub diversity: f64,
}

impl ScoringWeights {
    /// Uniform weights
    pub const UNIFORM: Self = Self {
        health: 1.0,
        time: 1.0,
        popularity: 1.0,
        personal: 1.0,
        diversity: 1.0,
    };

    /// Weights as an array in `[health, time, popularity, personal, diversity]` order
    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [
            self.health,
            self.time,
            self.popularity,
            self.personal,
            self.diversity,
        ]
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            health: 0.35,
            time: 0.15,
            popularity: 0.15,
            personal: 0.25,
            diversity: 0.10,
        }
    }
}

/// Search filter defaults applied to settings-driven queries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedFilters {
    /// Calorie window (kcal)
    pub calories: (f64, f64),
    /// Minimum protein (g)
    pub protein_min: f64,
    /// Minimum carbohydrates (g)
    pub carbs_min: f64,
    /// Minimum fat (g)
    pub fat_min: f64,
    /// Minimum fiber (g)
    pub fiber_min: f64,
    /// Maximum sugar (g)
    pub sugar_max: f64,
    /// Maximum sodium (mg)
    pub sodium_max: f64,
    /// Maximum total time (minutes)
    pub max_time: u32,
}

impl Default for AdvancedFilters {
    fn default() -> Self {
        Self {
            calories: (0.0, 1000.0),
            protein_min: 0.0,
            carbs_min: 0.0,
            fat_min: 0.0,
            fiber_min: 0.0,
            sugar_max: 60.0,
            sodium_max: 2300.0,
            max_time: 120,
        }
    }
}

/// Advanced ranking configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AdvancedSettings {
    /// Sub-score weights
    pub weights: ScoringWeights,
    /// Search filter defaults
    pub filters: AdvancedFilters,
}

/// App-wide recommendation settings used across settings editing and ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSettings {
    /// Display units
    pub units: Units,
    /// Preferred cuisines, in preference order
    pub cuisines: Vec<String>,
    /// Disliked ingredients or tags
    pub dislikes: Vec<String>,
    /// Acceptable total time window `[min, max]` in minutes
    pub time_range_min_max: (u32, u32),
    /// Required diets (a recipe must match at least one)
    pub diets: Vec<String>,
    /// Excluded allergens (a recipe must match none)
    pub allergens: Vec<String>,
    /// Per-recipe calorie target (kcal); zero disables calorie matching
    pub calorie_target: u32,
    /// Target macro split
    pub macro_weights: MacroWeights,
    /// Nutrient ceilings
    pub caps: NutrientCaps,
    /// UX behavior flags
    pub behavior: BehaviorSettings,
    /// Personalization knobs
    pub personalization: PersonalizationSettings,
    /// Notification preferences
    pub notifications: NotificationSettings,
    /// Weights and filters
    pub advanced: AdvancedSettings,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            units: Units::Us,
            cuisines: vec!["Italian".into(), "American".into(), "Mediterranean".into()],
            dislikes: Vec::new(),
            time_range_min_max: (0, 120),
            diets: Vec::new(),
            allergens: Vec::new(),
            calorie_target: 2000,
            macro_weights: MacroWeights::default(),
            caps: NutrientCaps::default(),
            behavior: BehaviorSettings::default(),
            personalization: PersonalizationSettings::default(),
            notifications: NotificationSettings::default(),
            advanced: AdvancedSettings::default(),
        }
    }
}

impl RecommendationSettings {
    /// Time window with its bounds in ascending order
    #[must_use]
    pub const fn ordered_time_range(&self) -> (u32, u32) {
        let (a, b) = self.time_range_min_max;
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
