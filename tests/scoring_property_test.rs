// ABOUTME: Property-based tests for ranking sub-scores and the composite score
// ABOUTME: Scores stay inside [0, 1] and hard filters keep exactly the recipes that satisfy them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use nutrifind::intelligence::recommendation_engine::{popularity_score, time_score};
use nutrifind::intelligence::scoring::{macro_ratio_deviation, normalize, similarity};
use nutrifind::intelligence::settings::{MacroWeights, ScoringWeights};
use nutrifind::intelligence::{diversify, rank, RecommendationSettings};
use nutrifind::models::{Nutrition, Recipe};
use proptest::prelude::*;
use proptest::{array, collection, option};

fn arb_recipe() -> impl Strategy<Value = Recipe> {
    (
        0u32..200,
        0u32..200,
        option::of(0.0f64..2000.0),
        option::of(0.0f64..150.0),
        option::of(0.0f64..300.0),
        option::of(0.0f64..120.0),
        option::of(-1.0f64..2.0),
        collection::vec("[a-z]{2,6}", 0..4),
    )
        .prop_map(|(prep, cook, calories, protein, carbs, fat, popularity, tags)| {
            Recipe {
                prep_time: Some(prep),
                cook_time: Some(cook),
                nutrition: Some(Nutrition {
                    calories,
                    protein,
                    carbs,
                    fat,
                    ..Nutrition::default()
                }),
                popularity,
                tags,
                ..Recipe::new("r", "Recipe")
            }
        })
}

/// Recipes with short mixed-case tags, so generated labels collide often
fn arb_labelled_recipe() -> impl Strategy<Value = Recipe> {
    (
        0u32..150,
        0u32..150,
        collection::vec("[a-dA-D]{1,3}", 0..5),
    )
        .prop_map(|(prep, cook, tags)| Recipe {
            prep_time: Some(prep),
            cook_time: Some(cook),
            tags,
            ..Recipe::new("r", "Recipe")
        })
}

fn carries(recipe: &Recipe, label: &str) -> bool {
    let label = label.to_lowercase();
    recipe.tags.iter().any(|tag| tag.to_lowercase().contains(&label))
}

fn arb_weights() -> impl Strategy<Value = ScoringWeights> {
    array::uniform5(-1.0f64..5.0).prop_map(|[health, time, popularity, personal, diversity]| {
        ScoringWeights {
            health,
            time,
            popularity,
            personal,
            diversity,
        }
    })
}

proptest! {
    #[test]
    fn composite_and_sub_scores_are_bounded(
        recipes in collection::vec(arb_recipe(), 0..12),
        weights in arb_weights(),
        calorie_target in 0u32..4000,
        window in (0u32..240, 0u32..240),
    ) {
        let mut settings = RecommendationSettings {
            calorie_target,
            time_range_min_max: window,
            ..RecommendationSettings::default()
        };
        settings.advanced.weights = weights;

        let ranked = rank(&recipes, &settings);
        prop_assert!(ranked.len() <= recipes.len());
        for scored in &ranked {
            let b = scored.score_breakdown;
            for value in [scored.score, b.health, b.time, b.popularity, b.personal, b.diversity] {
                prop_assert!(value.is_finite());
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn survivors_are_exactly_the_recipes_passing_hard_filters(
        mut recipes in collection::vec(arb_labelled_recipe(), 0..16),
        diets in collection::vec("[a-d]{1,2}", 0..3),
        allergens in collection::vec("[a-d]{1,2}", 0..3),
        window in (0u32..300, 0u32..300),
    ) {
        for (index, recipe) in recipes.iter_mut().enumerate() {
            recipe.id = format!("r{index}");
        }
        let settings = RecommendationSettings {
            diets: diets.clone(),
            allergens: allergens.clone(),
            time_range_min_max: window,
            ..RecommendationSettings::default()
        };
        let (min, max) = settings.ordered_time_range();
        let passes = |recipe: &Recipe| {
            (diets.is_empty() || diets.iter().any(|diet| carries(recipe, diet)))
                && !allergens.iter().any(|allergen| carries(recipe, allergen))
                && (min..=max).contains(&recipe.total_time())
        };

        let ranked = rank(&recipes, &settings);
        for scored in &ranked {
            prop_assert!(passes(&scored.recipe), "{} should have been filtered", scored.recipe.id);
        }

        let mut survivors: Vec<&str> = ranked.iter().map(|s| s.recipe.id.as_str()).collect();
        let mut expected: Vec<&str> = recipes
            .iter()
            .filter(|recipe| passes(recipe))
            .map(|recipe| recipe.id.as_str())
            .collect();
        survivors.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(survivors, expected);
    }

    #[test]
    fn time_score_is_bounded(total in 0u32..500, min in 0u32..300, max in 0u32..300) {
        let score = time_score(total, (min, max));
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn popularity_is_deterministic(recipe in arb_recipe()) {
        let first = popularity_score(&recipe);
        prop_assert!((0.0..=1.0).contains(&first));
        prop_assert_eq!(first.to_bits(), popularity_score(&recipe).to_bits());
    }

    #[test]
    fn macro_deviation_stays_in_range(
        protein in 0.0f64..200.0,
        carbs in 0.0f64..200.0,
        fat in 0.0f64..200.0,
    ) {
        let nutrition = Nutrition {
            protein: Some(protein),
            carbs: Some(carbs),
            fat: Some(fat),
            ..Nutrition::default()
        };
        if let Some(deviation) = macro_ratio_deviation(&nutrition, &MacroWeights::default()) {
            prop_assert!((0.0..=2.0 + 1e-9).contains(&deviation));
        }
    }

    #[test]
    fn normalize_never_divides_by_zero(value in -1e6f64..1e6, bound in -1e6f64..1e6) {
        prop_assert!(normalize(value, bound, bound).abs() < f64::EPSILON);
    }

    #[test]
    fn similarity_is_symmetric_and_bounded(a in arb_recipe(), b in arb_recipe()) {
        let ab = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert!((ab - similarity(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn diversify_is_a_permutation_prefix(
        recipes in collection::vec(arb_recipe(), 0..10),
        bias in 0.0f64..1.0,
        limit in 0usize..12,
    ) {
        let ranked = rank(&recipes, &RecommendationSettings::default());
        let diverse = diversify(ranked.clone(), bias, Some(limit));
        prop_assert_eq!(diverse.len(), limit.min(ranked.len()));
        for picked in &diverse {
            prop_assert!(ranked.iter().any(|r| r == picked));
        }
    }
}
