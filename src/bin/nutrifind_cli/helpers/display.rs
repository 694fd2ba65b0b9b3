// ABOUTME: Output formatting helpers for nutrifind-cli
// ABOUTME: Tables for ranked recipes and nutrition estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrifind::intelligence::analyzer::NutritionEstimate;
use nutrifind::models::ScoredRecipe;

/// Print ranked recipes with their sub-scores
pub fn print_ranking(results: &[ScoredRecipe]) {
    if results.is_empty() {
        println!("No recipes passed the filters");
        return;
    }

    println!(
        "{:>3}  {:>5}  {:<36} {:>6} {:>6} {:>6} {:>6}",
        "#", "score", "title", "health", "time", "pop", "pers"
    );
    println!("{}", "-".repeat(80));
    for (index, item) in results.iter().enumerate() {
        let b = &item.score_breakdown;
        println!(
            "{:>3}  {:>5.3}  {:<36} {:>6.2} {:>6.2} {:>6.2} {:>6.2}",
            index + 1,
            item.score,
            truncate(item.recipe.display_title(), 36),
            b.health,
            b.time,
            b.popularity,
            b.personal
        );
    }
}

/// Print a per-serving nutrition estimate
pub fn print_estimate(estimate: &NutritionEstimate) {
    let n = &estimate.per_serving;
    println!("Per serving ({} servings):", estimate.servings);
    println!("  Calories   {:>8.1} kcal", n.calories);
    println!("  Protein    {:>8.1} g", n.protein);
    println!("  Carbs      {:>8.1} g", n.carbs);
    println!("  Fat        {:>8.1} g", n.fat);
    println!("  Fiber      {:>8.1} g", n.fiber);
    println!("  Sugars     {:>8.1} g", n.sugars);
    println!("  Sodium     {:>8.1} mg", n.sodium);
    println!("  Potassium  {:>8.1} mg", n.potassium);
    println!("  Calcium    {:>8.1} mg", n.calcium);
    println!("  Iron       {:>8.1} mg", n.iron);
    println!("  Vitamin D  {:>8.1} mcg", n.vitamin_d);

    if !estimate.unmatched.is_empty() {
        println!("Not in the ingredient database: {}", estimate.unmatched.join(", "));
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_owned()
    } else {
        let mut short: String = text.chars().take(max_chars - 1).collect();
        short.push('~');
        short
    }
}
