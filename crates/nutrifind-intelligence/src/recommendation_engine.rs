// ABOUTME: Recipe recommendation engine with hard-constraint filtering and weighted scoring
// ABOUTME: Scores recipes on health, time, popularity, personal fit, and diversity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe ranking engine
//!
//! [`RankingEngine::rank`] runs in three steps:
//!
//! 1. **Hard filtering**: diet (at least one match), allergen (no match),
//!    total time inside the configured window, and optionally nutrient caps.
//! 2. **Scoring**: five sub-scores in `[0, 1]`, see [`ScoreBreakdown`].
//! 3. **Weighted composite and stable sort**: weights are normalized by their
//!    sum; ties keep input order.
//!
//! The engine is a pure function of its inputs. It allocates a fresh output
//! vector and never mutates the recipes it is given.

use nutrifind_core::models::{Difficulty, Recipe, ScoreBreakdown, ScoredRecipe};
use tracing::debug;

use crate::constants::{diversity, health, personal, popularity};
use crate::scoring::macro_ratio_deviation;
use crate::settings::{RecommendationSettings, ScoringWeights};

/// How configured diet, allergen, cuisine, and dislike strings are matched against recipe tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagMatching {
    /// Case-insensitive substring: `"peanut"` matches `"contains peanut butter"`
    #[default]
    Substring,
    /// Structured taxonomy codes: case, `-`, `_` and spaces are folded, then compared for equality
    Normalized,
}

impl TagMatching {
    /// Whether `tag` satisfies the configured `wanted` label
    #[must_use]
    pub fn matches(self, tag: &str, wanted: &str) -> bool {
        match self {
            Self::Substring => tag.to_lowercase().contains(&wanted.trim().to_lowercase()),
            Self::Normalized => normalize_code(tag) == normalize_code(wanted),
        }
    }

    fn any_tag(self, recipe: &Recipe, wanted: &str) -> bool {
        recipe.matchable_tags().any(|tag| self.matches(tag, wanted))
    }
}

fn normalize_code(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Configured labels with blank entries removed
fn active_labels(labels: &[String]) -> Vec<&str> {
    labels
        .iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .collect()
}

/// Sub-score weights normalized to sum to one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveWeights {
    shares: [f64; 5],
    /// True when the configured weights summed to zero and uniform weights were used
    pub uniform_fallback: bool,
}

impl EffectiveWeights {
    /// Normalize configured weights
    ///
    /// Negative and non-finite weights count as zero. When nothing positive
    /// remains, every sub-score gets an equal share.
    #[must_use]
    pub fn from_weights(weights: &ScoringWeights) -> Self {
        let raw = weights
            .as_array()
            .map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 });
        let total: f64 = raw.iter().sum();
        if total > 0.0 {
            Self {
                shares: raw.map(|w| w / total),
                uniform_fallback: false,
            }
        } else {
            Self {
                shares: [0.2; 5],
                uniform_fallback: true,
            }
        }
    }

    /// Normalized shares in `[health, time, popularity, personal, diversity]` order
    #[must_use]
    pub const fn shares(&self) -> [f64; 5] {
        self.shares
    }

    /// Weighted composite of a breakdown, clamped to `[0, 1]`
    #[must_use]
    pub fn composite(&self, breakdown: &ScoreBreakdown) -> f64 {
        let subs = [
            breakdown.health,
            breakdown.time,
            breakdown.popularity,
            breakdown.personal,
            breakdown.diversity,
        ];
        self.shares
            .iter()
            .zip(subs)
            .map(|(share, sub)| share * sub)
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }
}

/// Recommendation engine with configurable matching behavior
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    tag_matching: TagMatching,
    enforce_caps: bool,
}

impl RankingEngine {
    /// Engine with default behavior (substring matching, caps not enforced)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tag_matching: TagMatching::Substring,
            enforce_caps: false,
        }
    }

    /// Use a different tag matching strategy
    #[must_use]
    pub const fn with_tag_matching(mut self, tag_matching: TagMatching) -> Self {
        self.tag_matching = tag_matching;
        self
    }

    /// Hard-filter recipes exceeding the sodium / added sugar caps
    #[must_use]
    pub const fn with_caps_enforced(mut self, enforce_caps: bool) -> Self {
        self.enforce_caps = enforce_caps;
        self
    }

    /// Active tag matching strategy
    #[must_use]
    pub const fn tag_matching(&self) -> TagMatching {
        self.tag_matching
    }

    /// Filter, score, and sort recipes (highest score first, stable for ties)
    #[must_use]
    pub fn rank(&self, recipes: &[Recipe], settings: &RecommendationSettings) -> Vec<ScoredRecipe> {
        let weights = EffectiveWeights::from_weights(&settings.advanced.weights);

        let mut scored: Vec<ScoredRecipe> = recipes
            .iter()
            .filter(|recipe| self.passes_filters(recipe, settings))
            .map(|recipe| {
                let breakdown = self.breakdown(recipe, settings);
                ScoredRecipe {
                    recipe: recipe.clone(),
                    score: weights.composite(&breakdown),
                    score_breakdown: breakdown,
                }
            })
            .collect();

        // Vec::sort_by is stable, so equal scores keep their input order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            candidates = recipes.len(),
            kept = scored.len(),
            filtered = recipes.len() - scored.len(),
            uniform_fallback = weights.uniform_fallback,
            "Ranked recipes"
        );

        scored
    }

    /// Whether a recipe survives every hard constraint
    #[must_use]
    pub fn passes_filters(&self, recipe: &Recipe, settings: &RecommendationSettings) -> bool {
        self.satisfies_diets(recipe, settings)
            && !self.contains_allergen(recipe, settings)
            && within_time_window(recipe, settings)
            && (!self.enforce_caps || within_caps(recipe, settings))
    }

    fn satisfies_diets(&self, recipe: &Recipe, settings: &RecommendationSettings) -> bool {
        let diets = active_labels(&settings.diets);
        diets.is_empty()
            || diets
                .iter()
                .any(|diet| self.tag_matching.any_tag(recipe, diet))
    }

    fn contains_allergen(&self, recipe: &Recipe, settings: &RecommendationSettings) -> bool {
        active_labels(&settings.allergens)
            .iter()
            .any(|allergen| self.tag_matching.any_tag(recipe, allergen))
    }

    /// Compute the five sub-scores for a recipe (filters are not applied)
    #[must_use]
    pub fn breakdown(&self, recipe: &Recipe, settings: &RecommendationSettings) -> ScoreBreakdown {
        ScoreBreakdown {
            health: health_score(recipe, settings),
            time: time_score(recipe.total_time(), settings.ordered_time_range()),
            popularity: popularity_score(recipe),
            personal: personal_score(recipe, settings, self.tag_matching),
            diversity: diversity::PLACEHOLDER_SCORE,
        }
    }
}

/// Rank recipes with the default engine
#[must_use]
pub fn rank(recipes: &[Recipe], settings: &RecommendationSettings) -> Vec<ScoredRecipe> {
    RankingEngine::new().rank(recipes, settings)
}

fn within_time_window(recipe: &Recipe, settings: &RecommendationSettings) -> bool {
    let (min, max) = settings.ordered_time_range();
    (min..=max).contains(&recipe.total_time())
}

fn within_caps(recipe: &Recipe, settings: &RecommendationSettings) -> bool {
    let Some(nutrition) = &recipe.nutrition else {
        return true;
    };
    let sodium_ok = nutrition
        .sodium
        .map_or(true, |sodium| sodium <= settings.caps.sodium_max);
    let sugar_ok = nutrition
        .added_sugars
        .map_or(true, |sugar| sugar <= settings.caps.added_sugar_max);
    sodium_ok && sugar_ok
}

/// Health sub-score: calorie target fit and macro split fit on top of a 0.5 base
#[must_use]
pub fn health_score(recipe: &Recipe, settings: &RecommendationSettings) -> f64 {
    let mut score = health::BASE_SCORE;

    if let Some(nutrition) = &recipe.nutrition {
        let target = f64::from(settings.calorie_target);
        let calories = nutrition.calories.filter(|calories| *calories > 0.0);
        if let (true, Some(calories)) = (target > 0.0, calories) {
            let deviation = (calories - target).abs() / (target * health::CALORIE_TOLERANCE);
            score += health::CALORIE_CREDIT * (1.0 - deviation).max(0.0);
        }

        if let Some(deviation) = macro_ratio_deviation(nutrition, &settings.macro_weights) {
            score += health::MACRO_CREDIT * (1.0 - deviation / 2.0).max(0.0);
        }
    }

    score.clamp(0.0, 1.0)
}

/// Time sub-score: 1 at the window midpoint, 0 at either bound
///
/// A zero-width window scores 1 for recipes exactly at that time.
#[must_use]
pub fn time_score(total_time: u32, (min, max): (u32, u32)) -> f64 {
    let (min, max) = (f64::from(min.min(max)), f64::from(min.max(max)));
    let total = f64::from(total_time);
    let midpoint = (min + max) / 2.0;
    let half_width = (max - min) / 2.0;

    if half_width <= 0.0 {
        return if (total - midpoint).abs() < f64::EPSILON {
            1.0
        } else {
            0.0
        };
    }

    (1.0 - (total - midpoint).abs() / half_width).clamp(0.0, 1.0)
}

/// Popularity sub-score: mean of the difficulty credit and the recipe's popularity signal
#[must_use]
pub fn popularity_score(recipe: &Recipe) -> f64 {
    let difficulty = match recipe.difficulty() {
        Difficulty::Easy => popularity::EASY,
        Difficulty::Medium => popularity::MEDIUM,
        Difficulty::Hard | Difficulty::Other => popularity::OTHER,
    };
    let signal = recipe
        .popularity
        .map_or(popularity::NEUTRAL_SIGNAL, |p| p.clamp(0.0, 1.0));
    (difficulty + signal) / 2.0
}

/// Personal sub-score: preferred cuisine boost and dislike penalty around 0.5
///
/// Returns the neutral 0.5 when history-based personalization is disabled.
#[must_use]
pub fn personal_score(
    recipe: &Recipe,
    settings: &RecommendationSettings,
    matching: TagMatching,
) -> f64 {
    if !settings.personalization.uses_history() {
        return personal::NEUTRAL_SCORE;
    }

    let mut score = personal::NEUTRAL_SCORE;

    let cuisines = active_labels(&settings.cuisines);
    if !cuisines.is_empty() {
        let matched = cuisines
            .iter()
            .filter(|cuisine| matching.any_tag(recipe, cuisine))
            .count();
        score += personal::CUISINE_BOOST * matched as f64 / cuisines.len() as f64;
    }

    let dislikes = active_labels(&settings.dislikes);
    if !dislikes.is_empty() {
        let matched = dislikes
            .iter()
            .filter(|dislike| matching.any_tag(recipe, dislike))
            .count();
        score -= personal::DISLIKE_PENALTY * matched as f64 / dislikes.len() as f64;
    }

    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_matching_strategies() {
        assert!(TagMatching::Substring.matches("Contains Peanut Butter", "peanut"));
        assert!(!TagMatching::Substring.matches("keto", "vegan"));

        assert!(TagMatching::Normalized.matches("Gluten-Free", "gluten_free"));
        assert!(TagMatching::Normalized.matches("dairy free", "DAIRY-FREE"));
        assert!(!TagMatching::Normalized.matches("contains peanut butter", "peanut"));
    }

    #[test]
    fn test_effective_weights_normalize() {
        let weights = EffectiveWeights::from_weights(&ScoringWeights {
            health: 2.0,
            time: 1.0,
            popularity: 1.0,
            personal: 0.0,
            diversity: -3.0,
        });
        assert!(!weights.uniform_fallback);
        let shares = weights.shares();
        assert!((shares[0] - 0.5).abs() < 1e-12);
        assert!((shares[1] - 0.25).abs() < 1e-12);
        assert!(shares[4].abs() < 1e-12);
    }

    #[test]
    fn test_effective_weights_zero_sum_falls_back_to_uniform() {
        let weights = EffectiveWeights::from_weights(&ScoringWeights {
            health: 0.0,
            time: 0.0,
            popularity: 0.0,
            personal: 0.0,
            diversity: f64::NAN,
        });
        assert!(weights.uniform_fallback);
        assert_eq!(weights.shares(), [0.2; 5]);
    }

    #[test]
    fn test_time_score_degenerate_window() {
        assert!((time_score(30, (30, 30)) - 1.0).abs() < 1e-12);
        assert!(time_score(31, (30, 30)).abs() < 1e-12);
        assert!((time_score(60, (120, 0)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_popularity_uses_signal_deterministically() {
        let mut recipe = Recipe::new("r1", "Toast");
        recipe.difficulty = Some(Difficulty::Easy);
        recipe.popularity = Some(0.5);
        assert!((popularity_score(&recipe) - 0.75).abs() < 1e-12);

        recipe.popularity = None;
        assert!((popularity_score(&recipe) - 0.925).abs() < 1e-12);
        assert_eq!(popularity_score(&recipe), popularity_score(&recipe));
    }
}
