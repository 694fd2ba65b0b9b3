// ABOUTME: Per-100g ingredient nutrition database with alias matching
// ABOUTME: Bundled JSON table used by the recipe analyzer, replaceable from a file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bundled ingredient table
const BUNDLED_INGREDIENTS: &str = include_str!("../../data/ingredients.json");

/// Nutrient values for 100 g of one ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRecord {
    /// Canonical lower-case name
    pub name: String,
    /// Alternate spellings; a query containing an alias matches this record
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat: f64,
    /// Sodium (mg)
    #[serde(default)]
    pub sodium: f64,
    /// Sugars (g)
    #[serde(default)]
    pub sugars: f64,
    /// Fiber (g)
    #[serde(default)]
    pub fiber: f64,
    /// Potassium (mg)
    #[serde(default)]
    pub potassium: f64,
    /// Iron (mg)
    #[serde(default)]
    pub iron: f64,
    /// Calcium (mg)
    #[serde(default)]
    pub calcium: f64,
    /// Vitamin D (mcg)
    #[serde(default)]
    pub vitamin_d: f64,
}

/// In-memory ingredient nutrition table
#[derive(Debug, Clone, Default)]
pub struct IngredientDatabase {
    records: Vec<IngredientRecord>,
}

impl IngredientDatabase {
    /// Build a database from records, lower-casing names and aliases
    #[must_use]
    pub fn new(records: Vec<IngredientRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|mut record| {
                record.name = record.name.trim().to_lowercase();
                record.aliases = record
                    .aliases
                    .iter()
                    .map(|alias| alias.trim().to_lowercase())
                    .filter(|alias| !alias.is_empty())
                    .collect();
                record
            })
            .collect();
        Self { records }
    }

    /// Parse a JSON array of records
    ///
    /// # Errors
    ///
    /// Returns the deserialization error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<IngredientRecord> = serde_json::from_str(json)?;
        debug!(count = records.len(), "Loaded ingredient database");
        Ok(Self::new(records))
    }

    /// The ingredient table shipped with the crate
    ///
    /// # Errors
    ///
    /// Returns the deserialization error if the bundled table is malformed.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_INGREDIENTS)
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Match an ingredient name against the table
    ///
    /// Exact name first; otherwise the first record whose name contains the
    /// query or whose alias is contained in the query.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&IngredientRecord> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        self.records
            .iter()
            .find(|record| record.name == query)
            .or_else(|| {
                self.records.iter().find(|record| {
                    record.name.contains(&query)
                        || record
                            .aliases
                            .iter()
                            .any(|alias| query.contains(alias.as_str()))
                })
            })
    }
}
