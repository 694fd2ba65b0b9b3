// ABOUTME: Integration tests for the recipe nutrition analyzer
// ABOUTME: Pasted text and structured rows against the bundled ingredient table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use nutrifind::intelligence::analyzer::{
    estimate_nutrition, parse_recipe_text, IngredientDatabase, IngredientRow,
};

const PASTED: &str = "\
Chicken rice bowl

- 200 g chicken breast
- 100 g white rice
- 2 eggs
- 3 dragon scales
Cook everything and serve.
";

#[test]
fn test_pasted_recipe_is_estimated_per_serving() {
    let db = IngredientDatabase::bundled().unwrap();
    let rows = parse_recipe_text(PASTED);
    assert_eq!(rows.len(), 4, "rows: {rows:?}");

    let estimate = estimate_nutrition(&db, &rows, 2);
    assert_eq!(estimate.servings, 2);
    // 240 kcal chicken + 365 kcal rice + 143 kcal for two 50 g eggs
    assert!((estimate.per_serving.calories - 374.0).abs() < 1e-9);
    assert_eq!(estimate.unmatched, vec!["dragon scales".to_owned()]);
}

#[test]
fn test_zero_servings_count_as_one() {
    let db = IngredientDatabase::bundled().unwrap();
    let rows = vec![IngredientRow {
        qty: Some(100.0),
        unit: "g".to_owned(),
        item: "white rice".to_owned(),
    }];

    let estimate = estimate_nutrition(&db, &rows, 0);
    assert_eq!(estimate.servings, 1);
    assert!((estimate.per_serving.calories - 365.0).abs() < 1e-9);
}

#[test]
fn test_blank_rows_are_skipped() {
    let db = IngredientDatabase::bundled().unwrap();
    let rows = vec![
        IngredientRow {
            qty: None,
            unit: "g".to_owned(),
            item: "butter".to_owned(),
        },
        IngredientRow {
            qty: Some(5.0),
            unit: String::new(),
            item: "   ".to_owned(),
        },
    ];

    let estimate = estimate_nutrition(&db, &rows, 1);
    assert!(estimate.per_serving.calories.abs() < f64::EPSILON);
    assert!(estimate.unmatched.is_empty());
}

#[test]
fn test_rows_deserialize_leniently() {
    let rows: Vec<IngredientRow> =
        serde_json::from_str(r#"[{"qty": "1.5", "unit": "cup", "item": "milk"}, {"item": "salt"}]"#)
            .unwrap();
    assert_eq!(rows[0].qty, Some(1.5));
    assert_eq!(rows[1].qty, None);
    assert!(rows[1].unit.is_empty());
}
