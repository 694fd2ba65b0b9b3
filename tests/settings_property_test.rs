// ABOUTME: Property-based tests for settings persistence
// ABOUTME: Any complete settings value survives save then load unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use nutrifind::intelligence::settings::{
    AdvancedFilters, AdvancedSettings, BehaviorSettings, MacroWeights, NotificationSettings,
    NutrientCaps, PersonalizationSettings, ScoringWeights, Units,
};
use nutrifind::intelligence::RecommendationSettings;
use nutrifind::settings_store::SettingsStore;
use nutrifind::storage::InMemoryKeyValueStore;
use proptest::prelude::*;
use proptest::{array, collection};

/// Finite floats on a quarter grid, which JSON carries exactly
fn quarter() -> impl Strategy<Value = f64> {
    (-40_000i32..40_000).prop_map(|n| f64::from(n) / 4.0)
}

fn labels() -> impl Strategy<Value = Vec<String>> {
    collection::vec("\\PC{0,12}", 0..4)
}

fn arb_advanced() -> impl Strategy<Value = AdvancedSettings> {
    (array::uniform5(quarter()), array::uniform8(quarter()), any::<u32>()).prop_map(
        |([health, time, popularity, personal, diversity], f, max_time)| AdvancedSettings {
            weights: ScoringWeights {
                health,
                time,
                popularity,
                personal,
                diversity,
            },
            filters: AdvancedFilters {
                calories: (f[0], f[1]),
                protein_min: f[2],
                carbs_min: f[3],
                fat_min: f[4],
                fiber_min: f[5],
                sugar_max: f[6],
                sodium_max: f[7],
                max_time,
            },
        },
    )
}

fn arb_settings() -> impl Strategy<Value = RecommendationSettings> {
    (
        prop_oneof![Just(Units::Us), Just(Units::Metric)],
        labels(),
        labels(),
        labels(),
        labels(),
        (any::<u32>(), any::<u32>()),
        any::<u32>(),
        array::uniform8(quarter()),
        (any::<bool>(), any::<bool>()),
        arb_advanced(),
    )
        .prop_map(
            |(
                units,
                cuisines,
                dislikes,
                diets,
                allergens,
                time_range_min_max,
                calorie_target,
                f,
                (show_score_badge, enable_reminders),
                advanced,
            )| RecommendationSettings {
                units,
                cuisines,
                dislikes,
                time_range_min_max,
                diets,
                allergens,
                calorie_target,
                macro_weights: MacroWeights {
                    protein: f[0],
                    carbs: f[1],
                    fat: f[2],
                },
                caps: NutrientCaps {
                    sodium_max: f[3],
                    added_sugar_max: f[4],
                },
                behavior: BehaviorSettings {
                    show_score_badge,
                    exploration: f[5],
                    short_term_focus: f[6],
                },
                personalization: PersonalizationSettings {
                    diversity_bias: f[7],
                    avoid_recently_viewed_hours: f[0].abs(),
                },
                notifications: NotificationSettings { enable_reminders },
                advanced,
            },
        )
}

proptest! {
    #[test]
    fn saved_settings_load_back_unchanged(settings in arb_settings()) {
        let store = SettingsStore::for_user(Arc::new(InMemoryKeyValueStore::new()), "prop");
        store.save(&settings);
        prop_assert_eq!(store.load(), settings);
    }

    #[test]
    fn export_parses_back_to_the_same_settings(settings in arb_settings()) {
        let export = SettingsStore::export(&settings).unwrap();
        let parsed: RecommendationSettings = serde_json::from_str(&export.body).unwrap();
        prop_assert_eq!(parsed, settings);
    }
}
