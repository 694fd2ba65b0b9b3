// ABOUTME: Greedy maximal-marginal-relevance re-rank over scored recipes
// ABOUTME: Trades composite score against tag similarity to already-picked results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrifind_core::models::ScoredRecipe;
use tracing::debug;

use crate::scoring::similarity;

/// Reorder ranked recipes so consecutive results are less alike
///
/// At each step the remaining recipe maximizing
/// `(1 - bias) * score - bias * max_similarity_to_selected` is picked; ties go
/// to the earlier recipe. `bias` is clamped to `[0, 1]`. A bias of zero keeps
/// the input order. `limit` truncates the output.
///
/// Scores and breakdowns are not modified.
#[must_use]
pub fn diversify(scored: Vec<ScoredRecipe>, bias: f64, limit: Option<usize>) -> Vec<ScoredRecipe> {
    let limit = limit.unwrap_or(scored.len()).min(scored.len());
    let bias = if bias.is_finite() {
        bias.clamp(0.0, 1.0)
    } else {
        0.0
    };

    if bias <= 0.0 {
        return scored.into_iter().take(limit).collect();
    }

    let mut remaining = scored;
    let mut selected: Vec<ScoredRecipe> = Vec::with_capacity(limit);

    while selected.len() < limit && !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_value = f64::NEG_INFINITY;

        for (index, candidate) in remaining.iter().enumerate() {
            let redundancy = selected
                .iter()
                .map(|picked| similarity(&candidate.recipe, &picked.recipe))
                .fold(0.0, f64::max);
            let value = (1.0 - bias).mul_add(candidate.score, -bias * redundancy);
            if value > best_value {
                best_value = value;
                best_index = index;
            }
        }

        selected.push(remaining.remove(best_index));
    }

    debug!(bias, selected = selected.len(), "Diversified ranking");
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrifind_core::models::{Recipe, ScoreBreakdown};

    fn scored(id: &str, score: f64, tags: &[&str]) -> ScoredRecipe {
        ScoredRecipe {
            recipe: Recipe {
                tags: tags.iter().map(|t| (*t).to_owned()).collect(),
                ..Recipe::new(id, id)
            },
            score,
            score_breakdown: ScoreBreakdown::default(),
        }
    }

    fn ids(list: &[ScoredRecipe]) -> Vec<&str> {
        list.iter().map(|s| s.recipe.id.as_str()).collect()
    }

    #[test]
    fn test_zero_bias_keeps_order() {
        let input = vec![
            scored("a", 0.9, &["pasta"]),
            scored("b", 0.8, &["pasta"]),
            scored("c", 0.7, &["salad"]),
        ];
        let output = diversify(input, 0.0, Some(2));
        assert_eq!(ids(&output), vec!["a", "b"]);
    }

    #[test]
    fn test_bias_promotes_dissimilar_recipe() {
        let input = vec![
            scored("a", 0.9, &["pasta", "italian"]),
            scored("b", 0.88, &["pasta", "italian"]),
            scored("c", 0.8, &["salad", "greek"]),
        ];
        let output = diversify(input, 0.5, None);
        assert_eq!(ids(&output), vec!["a", "c", "b"]);
        assert!((output[2].score - 0.88).abs() < f64::EPSILON);
    }

    #[test]
    fn test_limit_larger_than_input() {
        let output = diversify(vec![scored("a", 0.5, &[])], 1.0, Some(10));
        assert_eq!(output.len(), 1);
    }
}
