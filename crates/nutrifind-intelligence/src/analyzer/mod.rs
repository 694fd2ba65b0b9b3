// ABOUTME: Recipe analyzer estimating per-serving nutrition from ingredient rows
// ABOUTME: Parses pasted text, converts quantities to grams, and sums per-100g values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Analyzer
//!
//! Rough nutrition estimates for user-entered recipes:
//!
//! 1. [`parser`] turns free text into [`IngredientRow`]s
//! 2. [`conversion`] converts each row to grams
//! 3. [`database`] supplies per-100 g nutrient values
//! 4. [`estimate_nutrition`] sums the contributions and divides by servings

/// Unit parsing and gram conversion
pub mod conversion;
/// Per-100g ingredient nutrition table
pub mod database;
/// Free-text ingredient line parser
pub mod parser;

use nutrifind_core::models::coerce::lenient_f64;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use conversion::{convert_to_grams, ConversionError, IngredientUnit};
pub use database::{IngredientDatabase, IngredientRecord};
pub use parser::{parse_ingredient_line, parse_recipe_text};

/// One ingredient line as entered in the recipe builder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientRow {
    /// Quantity; absent when the user left it blank
    #[serde(default, deserialize_with = "lenient_f64")]
    pub qty: Option<f64>,
    /// Unit label (`g`, `cup`, `tbsp`, `piece`...); empty means grams
    #[serde(default)]
    pub unit: String,
    /// Ingredient name
    #[serde(default)]
    pub item: String,
}

/// The eleven nutrients tracked by the analyzer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// Sugars (g)
    pub sugars: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Potassium (mg)
    pub potassium: f64,
    /// Iron (mg)
    pub iron: f64,
    /// Calcium (mg)
    pub calcium: f64,
    /// Vitamin D (mcg)
    pub vitamin_d: f64,
}

impl NutrientTotals {
    fn add_scaled(&mut self, record: &IngredientRecord, factor: f64) {
        self.calories += record.calories * factor;
        self.protein += record.protein * factor;
        self.carbs += record.carbs * factor;
        self.fat += record.fat * factor;
        self.sodium += record.sodium * factor;
        self.sugars += record.sugars * factor;
        self.fiber += record.fiber * factor;
        self.potassium += record.potassium * factor;
        self.iron += record.iron * factor;
        self.calcium += record.calcium * factor;
        self.vitamin_d += record.vitamin_d * factor;
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            carbs: f(self.carbs),
            fat: f(self.fat),
            sodium: f(self.sodium),
            sugars: f(self.sugars),
            fiber: f(self.fiber),
            potassium: f(self.potassium),
            iron: f(self.iron),
            calcium: f(self.calcium),
            vitamin_d: f(self.vitamin_d),
        }
    }
}

/// Result of a nutrition estimate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEstimate {
    /// Nutrients per serving, rounded to one decimal
    pub per_serving: NutrientTotals,
    /// Servings the totals were divided by (at least 1)
    pub servings: u32,
    /// Ingredient names that matched nothing in the database
    pub unmatched: Vec<String>,
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Estimate per-serving nutrition for a list of ingredient rows
///
/// Rows without a quantity or item are skipped. Unmatched items and rows
/// that cannot be converted contribute nothing and are listed in
/// `unmatched`. A unit label the converter does not know is treated as a
/// piece count.
#[must_use]
pub fn estimate_nutrition(
    database: &IngredientDatabase,
    rows: &[IngredientRow],
    servings: u32,
) -> NutritionEstimate {
    let mut totals = NutrientTotals::default();
    let mut unmatched = Vec::new();

    for row in rows {
        let item = row.item.trim();
        let Some(qty) = row.qty.filter(|_| !item.is_empty()) else {
            continue;
        };

        let Some(record) = database.find(item) else {
            unmatched.push(item.to_owned());
            continue;
        };

        let unit = IngredientUnit::from_label(&row.unit).unwrap_or(IngredientUnit::Pieces);
        match convert_to_grams(qty, unit, item) {
            Ok(grams) => totals.add_scaled(record, grams / 100.0),
            Err(error) => {
                debug!(item, %error, "Skipping ingredient row");
                unmatched.push(item.to_owned());
            }
        }
    }

    let servings = servings.max(1);
    let divisor = f64::from(servings);

    debug!(
        rows = rows.len(),
        unmatched = unmatched.len(),
        servings,
        "Estimated recipe nutrition"
    );

    NutritionEstimate {
        per_serving: totals.map(|total| round_one_decimal(total / divisor)),
        servings,
        unmatched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> IngredientDatabase {
        IngredientDatabase::new(vec![
            IngredientRecord {
                name: "sugar".into(),
                calories: 400.0,
                carbs: 100.0,
                sugars: 100.0,
                ..IngredientRecord::default()
            },
            IngredientRecord {
                name: "egg".into(),
                aliases: vec!["eggs".into()],
                calories: 140.0,
                protein: 12.0,
                ..IngredientRecord::default()
            },
        ])
    }

    fn row(qty: Option<f64>, unit: &str, item: &str) -> IngredientRow {
        IngredientRow {
            qty,
            unit: unit.into(),
            item: item.into(),
        }
    }

    #[test]
    fn test_sums_and_divides_by_servings() {
        let rows = vec![row(Some(50.0), "g", "sugar"), row(Some(2.0), "piece", "eggs")];
        let estimate = estimate_nutrition(&db(), &rows, 2);

        // sugar: 200 kcal, eggs: 100 g -> 140 kcal; (200 + 140) / 2
        assert!((estimate.per_serving.calories - 170.0).abs() < 1e-9);
        assert!((estimate.per_serving.protein - 6.0).abs() < 1e-9);
        assert_eq!(estimate.servings, 2);
        assert!(estimate.unmatched.is_empty());
    }

    #[test]
    fn test_skips_blank_rows_and_reports_unmatched() {
        let rows = vec![
            row(None, "g", "sugar"),
            row(Some(10.0), "g", ""),
            row(Some(10.0), "g", "saffron"),
        ];
        let estimate = estimate_nutrition(&db(), &rows, 0);
        assert_eq!(estimate.servings, 1);
        assert_eq!(estimate.per_serving, NutrientTotals::default());
        assert_eq!(estimate.unmatched, vec!["saffron".to_owned()]);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        let rows = vec![row(Some(1.0), "g", "sugar")];
        let estimate = estimate_nutrition(&db(), &rows, 3);
        // 4 kcal / 3 = 1.333...
        assert!((estimate.per_serving.calories - 1.3).abs() < 1e-9);
    }
}
