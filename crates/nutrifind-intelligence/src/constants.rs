// ABOUTME: Scoring constants for the recommendation engine and nutrition analysis
// ABOUTME: Sub-score bases, credit ceilings, macro energy factors, and neutral fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Health sub-score constants
pub mod health {
    /// Starting value before calorie and macro credit
    pub const BASE_SCORE: f64 = 0.5;
    /// Maximum credit for matching the calorie target
    pub const CALORIE_CREDIT: f64 = 0.3;
    /// Relative deviation from the calorie target at which credit reaches zero
    pub const CALORIE_TOLERANCE: f64 = 0.5;
    /// Maximum credit for matching the macro split
    pub const MACRO_CREDIT: f64 = 0.2;
}

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Popularity sub-score constants
pub mod popularity {
    /// Difficulty credit for easy recipes
    pub const EASY: f64 = 1.0;
    /// Difficulty credit for medium recipes
    pub const MEDIUM: f64 = 0.7;
    /// Difficulty credit for everything else
    pub const OTHER: f64 = 0.4;
    /// Popularity signal assumed when the data source provides none
    pub const NEUTRAL_SIGNAL: f64 = 0.85;
}

/// Personal sub-score constants
pub mod personal {
    /// Score when personalization is disabled, and the starting value otherwise
    pub const NEUTRAL_SCORE: f64 = 0.5;
    /// Maximum boost for preferred cuisines
    pub const CUISINE_BOOST: f64 = 0.3;
    /// Maximum penalty for disliked tags
    pub const DISLIKE_PENALTY: f64 = 0.4;
}

/// Diversity sub-score constants
pub mod diversity {
    /// Per-recipe diversity value; batch-level diversity is applied by the re-rank pass
    pub const PLACEHOLDER_SCORE: f64 = 1.0;
}

/// Auxiliary scoring primitive constants
pub mod primitives {
    /// Assumed longest reasonable total time (minutes) for range closeness decay
    pub const MAX_REASONABLE_TIME: f64 = 120.0;
}
