// ABOUTME: Reusable numeric scoring primitives for ranking and testing in isolation
// ABOUTME: Normalization, macro distance, time-range closeness, and tag similarity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring primitives
//!
//! Small pure functions used by the recommendation engine and the diversity
//! re-rank. Each returns a finite value and never divides by zero.

use std::collections::HashSet;

use nutrifind_core::models::{Nutrition, Recipe};

use crate::constants::{energy, primitives};
use crate::settings::MacroWeights;

/// Linear rescale of `value` from `[min, max]` to `[0, 1]`
///
/// Returns `0` when `min == max`. Values outside the range are not clamped.
#[must_use]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return 0.0;
    }
    (value - min) / (max - min)
}

/// Mean absolute difference between two macro splits, in percentage points / 100
///
/// This compares two percentage splits directly. The health sub-score uses
/// [`macro_ratio_deviation`] instead, which first derives the split from grams.
#[must_use]
pub fn macro_distance(actual: &MacroWeights, target: &MacroWeights) -> f64 {
    let protein = (actual.protein - target.protein).abs() / 100.0;
    let carbs = (actual.carbs - target.carbs).abs() / 100.0;
    let fat = (actual.fat - target.fat).abs() / 100.0;
    (protein + carbs + fat) / 3.0
}

/// Calorie-weighted macro split of a nutrition record, as fractions
///
/// Returns `None` when the record carries no macro energy.
#[must_use]
pub fn macro_calorie_ratios(nutrition: &Nutrition) -> Option<(f64, f64, f64)> {
    let protein = nutrition.protein.unwrap_or(0.0).max(0.0) * energy::KCAL_PER_G_PROTEIN;
    let carbs = nutrition.carbs.unwrap_or(0.0).max(0.0) * energy::KCAL_PER_G_CARBS;
    let fat = nutrition.fat.unwrap_or(0.0).max(0.0) * energy::KCAL_PER_G_FAT;
    let total = protein + carbs + fat;
    (total > 0.0).then(|| (protein / total, carbs / total, fat / total))
}

/// Sum of absolute differences between a recipe's macro calorie split and the target
///
/// The result lies in `[0, 2]`; `None` when the recipe has no macro energy.
#[must_use]
pub fn macro_ratio_deviation(nutrition: &Nutrition, target: &MacroWeights) -> Option<f64> {
    let (protein, carbs, fat) = macro_calorie_ratios(nutrition)?;
    Some(
        (protein - target.protein / 100.0).abs()
            + (carbs - target.carbs / 100.0).abs()
            + (fat - target.fat / 100.0).abs(),
    )
}

/// Closeness of `actual_time` to a `[min, max]` window
///
/// `1` inside the window; outside it decays linearly with the distance to the
/// nearest bound, divided by `max(min, 120 - max)`.
#[must_use]
pub fn time_closeness(actual_time: f64, (min, max): (f64, f64)) -> f64 {
    if actual_time >= min && actual_time <= max {
        return 1.0;
    }
    let distance = if actual_time < min {
        min - actual_time
    } else {
        actual_time - max
    };
    let max_distance = min.max(primitives::MAX_REASONABLE_TIME - max);
    if max_distance <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / max_distance).max(0.0)
}

/// Jaccard similarity of two recipes' tag sets
///
/// Returns `0` when both recipes have no tags.
#[must_use]
pub fn similarity(a: &Recipe, b: &Recipe) -> f64 {
    let tags_a: HashSet<&str> = a.tags.iter().map(String::as_str).collect();
    let tags_b: HashSet<&str> = b.tags.iter().map(String::as_str).collect();
    let union = tags_a.union(&tags_b).count();
    if union == 0 {
        return 0.0;
    }
    tags_a.intersection(&tags_b).count() as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(id: &str, tags: &[&str]) -> Recipe {
        Recipe {
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            ..Recipe::new(id, id)
        }
    }

    #[test]
    fn test_normalize() {
        assert!((normalize(5.0, 0.0, 10.0) - 0.5).abs() < 1e-9);
        assert!((normalize(3.0, 3.0, 3.0)).abs() < 1e-9);
        assert!((normalize(0.0, 0.0, 10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_macro_distance() {
        let target = MacroWeights {
            protein: 30.0,
            carbs: 40.0,
            fat: 30.0,
        };
        assert!(macro_distance(&target, &target).abs() < 1e-9);

        let actual = MacroWeights {
            protein: 20.0,
            carbs: 50.0,
            fat: 30.0,
        };
        // (0.1 + 0.1 + 0.0) / 3
        assert!((macro_distance(&actual, &target) - 0.2 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_ratio_deviation_requires_energy() {
        let empty = Nutrition::default();
        assert!(macro_ratio_deviation(&empty, &MacroWeights::default()).is_none());

        let nutrition = Nutrition {
            protein: Some(25.0),
            carbs: Some(25.0),
            fat: Some(0.0),
            ..Nutrition::default()
        };
        let target = MacroWeights {
            protein: 50.0,
            carbs: 50.0,
            fat: 0.0,
        };
        assert!(macro_ratio_deviation(&nutrition, &target).unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_time_closeness() {
        assert!((time_closeness(30.0, (10.0, 60.0)) - 1.0).abs() < 1e-9);
        // 10 below min, decay over max(20, 60) = 60
        assert!((time_closeness(10.0, (20.0, 60.0)) - (1.0 - 10.0 / 60.0)).abs() < 1e-9);
        // No room beyond a window that already spans the reasonable maximum
        assert!(time_closeness(150.0, (0.0, 120.0)).abs() < 1e-9);
    }

    #[test]
    fn test_similarity() {
        let a = tagged("a", &["vegan", "thai", "spicy"]);
        let b = tagged("b", &["vegan", "thai"]);
        let c = tagged("c", &[]);
        assert!((similarity(&a, &b) - 2.0 / 3.0).abs() < 1e-9);
        assert!((similarity(&a, &a) - 1.0).abs() < 1e-9);
        assert!(similarity(&c, &c).abs() < 1e-9);
    }
}
