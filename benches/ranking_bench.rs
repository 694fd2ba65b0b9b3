// ABOUTME: Criterion benchmarks for recipe ranking, diversification, and search
// ABOUTME: Measures the feed pipeline over synthetic catalogs of increasing size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recommendation pipeline.
//!
//! Measures hard filtering and scoring, the diversity re-rank, catalog search,
//! and the recipe analyzer.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrifind::catalog::{search_recipes, SearchFilters, SearchQuery, SortOrder};
use nutrifind::intelligence::analyzer::{estimate_nutrition, parse_recipe_text, IngredientDatabase};
use nutrifind::intelligence::{diversify, RankingEngine, RecommendationSettings};
use nutrifind::models::{Difficulty, Nutrition, Recipe};

const CATALOG_SIZES: [usize; 3] = [100, 1_000, 10_000];

const TAG_POOL: [&str; 10] = [
    "vegan",
    "vegetarian",
    "gluten-free",
    "Italian",
    "Mexican",
    "Thai",
    "high-protein",
    "contains peanut butter",
    "dairy-free",
    "comfort",
];

const PASTED_RECIPE: &str = "\
2 cups all-purpose flour
1 1/2 cups milk
2 large eggs
3 tbsp butter
1 tsp salt
½ cup sugar
";

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_catalog(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|index| {
            let tags = (0..3)
                .map(|offset| TAG_POOL[(index * 7 + offset * 3) % TAG_POOL.len()].to_owned())
                .collect();
            Recipe {
                prep_time: Some((index % 45) as u32),
                cook_time: Some((index * 13 % 90) as u32),
                difficulty: Some(match index % 3 {
                    0 => Difficulty::Easy,
                    1 => Difficulty::Medium,
                    _ => Difficulty::Hard,
                }),
                tags,
                nutrition: Some(Nutrition {
                    calories: Some(250.0 + (index * 37 % 700) as f64),
                    protein: Some(5.0 + (index % 50) as f64),
                    carbs: Some(10.0 + (index * 3 % 90) as f64),
                    fat: Some(3.0 + (index % 40) as f64),
                    ..Nutrition::default()
                }),
                popularity: Some((index % 100) as f64 / 100.0),
                ..Recipe::new(format!("bench-{index}"), format!("Benchmark Recipe {index}"))
            }
        })
        .collect()
}

fn bench_settings() -> RecommendationSettings {
    RecommendationSettings {
        diets: vec!["vegetarian".to_owned(), "vegan".to_owned()],
        allergens: vec!["peanut".to_owned()],
        calorie_target: 600,
        ..RecommendationSettings::default()
    }
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let engine = RankingEngine::new();
    let settings = bench_settings();

    for count in CATALOG_SIZES {
        let catalog = generate_catalog(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &catalog, |b, catalog| {
            b.iter(|| engine.rank(black_box(catalog), black_box(&settings)));
        });
    }

    group.finish();
}

fn bench_diversify(c: &mut Criterion) {
    let mut group = c.benchmark_group("diversify");
    let settings = RecommendationSettings::default();
    let ranked = RankingEngine::new().rank(&generate_catalog(1_000), &settings);

    for limit in [10_usize, 50, 200] {
        group.bench_with_input(BenchmarkId::new("top", limit), &limit, |b, &limit| {
            b.iter(|| diversify(black_box(ranked.clone()), 0.25, Some(limit)));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let catalog = generate_catalog(10_000);
    let query = SearchQuery {
        q: "recipe 9".to_owned(),
        sort: SortOrder::Calories,
        filters: SearchFilters {
            dietary_restrictions: vec!["gluten-free".to_owned()],
            max_time: Some(60),
            ..SearchFilters::default()
        },
    };

    c.bench_function("search_10k", |b| {
        b.iter(|| search_recipes(black_box(&catalog), black_box(&query)));
    });
}

fn bench_analyzer(c: &mut Criterion) {
    let Ok(database) = IngredientDatabase::bundled() else {
        return;
    };

    c.bench_function("analyze_pasted_recipe", |b| {
        b.iter(|| {
            let rows = parse_recipe_text(black_box(PASTED_RECIPE));
            estimate_nutrition(&database, &rows, 4)
        });
    });
}

criterion_group!(
    benches,
    bench_rank,
    bench_diversify,
    bench_search,
    bench_analyzer
);
criterion_main!(benches);
