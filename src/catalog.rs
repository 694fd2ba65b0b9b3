// ABOUTME: Recipe catalog abstraction with text search, nutrient filters, and sorting
// ABOUTME: In-memory catalog loaded from a JSON file or the bundled mock recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Catalog
//!
//! Search semantics: the text query matches title, name, description or any
//! tag case-insensitively. Nutrient minimums only apply when they are above
//! zero and then require the value to be present; maximums and the calorie
//! window let recipes without the value through.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use nutrifind_intelligence::settings::AdvancedFilters;
use nutrifind_intelligence::TagMatching;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::{Nutrition, Recipe};

/// Mock recipes shipped with the binary
const BUNDLED_RECIPES: &str = include_str!("../data/recipes.json");

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Catalog order
    #[default]
    Relevance,
    /// Shortest total time first
    Time,
    /// Fewest calories first, recipes without calories last
    Calories,
    /// Alphabetical by display title
    Title,
}

impl SortOrder {
    /// Parse a sort name, falling back to relevance
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "time" => Self::Time,
            "calories" => Self::Calories,
            "title" => Self::Title,
            _ => Self::Relevance,
        }
    }
}

/// Structured search filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Diets every result must carry
    pub dietary_restrictions: Vec<String>,
    /// Allergens no result may carry
    pub allergens: Vec<String>,
    /// Cuisines of which a result must match at least one
    pub cuisines: Vec<String>,
    /// Inclusive calorie window
    pub calories: Option<(f64, f64)>,
    /// Minimum protein (g)
    pub protein_min: Option<f64>,
    /// Minimum carbohydrates (g)
    pub carbs_min: Option<f64>,
    /// Minimum fat (g)
    pub fat_min: Option<f64>,
    /// Minimum fiber (g)
    pub fiber_min: Option<f64>,
    /// Maximum sugars (g)
    pub sugar_max: Option<f64>,
    /// Maximum sodium (mg)
    pub sodium_max: Option<f64>,
    /// Maximum total time (minutes)
    pub max_time: Option<u32>,
}

impl From<&AdvancedFilters> for SearchFilters {
    fn from(filters: &AdvancedFilters) -> Self {
        Self {
            calories: Some(filters.calories),
            protein_min: Some(filters.protein_min),
            carbs_min: Some(filters.carbs_min),
            fat_min: Some(filters.fat_min),
            fiber_min: Some(filters.fiber_min),
            sugar_max: Some(filters.sugar_max),
            sodium_max: Some(filters.sodium_max),
            max_time: Some(filters.max_time),
            ..Self::default()
        }
    }
}

fn meets_min(value: Option<f64>, min: Option<f64>) -> bool {
    match min {
        Some(min) if min > 0.0 => value.is_some_and(|v| v >= min),
        _ => true,
    }
}

fn within_max(value: Option<f64>, max: Option<f64>) -> bool {
    match (value, max) {
        (Some(v), Some(max)) => v <= max,
        _ => true,
    }
}

impl SearchFilters {
    /// Whether a recipe satisfies every filter
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let matching = TagMatching::Substring;
        let has_tag =
            |wanted: &str| recipe.matchable_tags().any(|tag| matching.matches(tag, wanted));

        if !self.dietary_restrictions.iter().all(|d| has_tag(d)) {
            return false;
        }
        if self.allergens.iter().any(|a| has_tag(a)) {
            return false;
        }
        if !self.cuisines.is_empty() && !self.cuisines.iter().any(|c| has_tag(c)) {
            return false;
        }
        if let Some(max_time) = self.max_time {
            if recipe.total_time() > max_time {
                return false;
            }
        }

        let empty = Nutrition::default();
        let n = recipe.nutrition.as_ref().unwrap_or(&empty);
        if let (Some((low, high)), Some(calories)) = (self.calories, n.calories) {
            if calories < low.min(high) || calories > low.max(high) {
                return false;
            }
        }

        meets_min(n.protein, self.protein_min)
            && meets_min(n.carbs, self.carbs_min)
            && meets_min(n.fat, self.fat_min)
            && meets_min(n.fiber, self.fiber_min)
            && within_max(n.sugars, self.sugar_max)
            && within_max(n.sodium, self.sodium_max)
    }
}

/// Catalog search request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchQuery {
    /// Free-text query; blank matches everything
    pub q: String,
    /// Result ordering
    pub sort: SortOrder,
    /// Structured filters
    pub filters: SearchFilters,
}

impl SearchQuery {
    /// Query matching `q` in catalog order
    pub fn text(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    fn matches_text(&self, recipe: &Recipe) -> bool {
        let needle = self.q.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let contains = |s: &str| s.to_lowercase().contains(&needle);
        recipe.title.as_deref().is_some_and(contains)
            || recipe.name.as_deref().is_some_and(contains)
            || recipe.description.as_deref().is_some_and(contains)
            || recipe.matchable_tags().any(contains)
    }
}

fn compare_calories(a: &Recipe, b: &Recipe) -> Ordering {
    let calories = |r: &Recipe| r.nutrition.as_ref().and_then(|n| n.calories);
    match (calories(a), calories(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Filter and sort `recipes` for `query`
///
/// Sorting is stable, so ties keep catalog order.
#[must_use]
pub fn search_recipes(recipes: &[Recipe], query: &SearchQuery) -> Vec<Recipe> {
    let mut results: Vec<Recipe> = recipes
        .iter()
        .filter(|r| query.matches_text(r) && query.filters.matches(r))
        .cloned()
        .collect();

    match query.sort {
        SortOrder::Relevance => {}
        SortOrder::Time => results.sort_by_key(Recipe::total_time),
        SortOrder::Calories => results.sort_by(compare_calories),
        SortOrder::Title => {
            results.sort_by_cached_key(|r| r.display_title().to_lowercase());
        }
    }
    results
}

/// Source of recipes for the feed and search
pub trait RecipeCatalog: Send + Sync {
    /// Every recipe in catalog order
    fn list(&self) -> Vec<Recipe>;

    /// Recipe with the given id
    fn find(&self, id: &str) -> Option<Recipe>;

    /// Recipes matching `query`
    fn search(&self, query: &SearchQuery) -> Vec<Recipe> {
        search_recipes(&self.list(), query)
    }
}

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    recipes: Vec<Recipe>,
    by_id: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog; later duplicates of an id are dropped
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut by_id = HashMap::with_capacity(recipes.len());
        let mut unique = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            if !by_id.contains_key(&recipe.id) {
                by_id.insert(recipe.id.clone(), unique.len());
                unique.push(recipe);
            }
        }
        Self {
            recipes: unique,
            by_id,
        }
    }

    /// Parse a JSON array of recipes
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON is not a recipe array.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a JSON array of recipes from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Cannot read catalog {}: {e}", path.display())).with_source(e)
        })?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), recipes = catalog.len(), "Loaded recipe catalog");
        Ok(catalog)
    }

    /// Catalog of the bundled mock recipes
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the bundled data is corrupt.
    pub fn bundled() -> AppResult<Self> {
        Self::from_json(BUNDLED_RECIPES)
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeCatalog for InMemoryCatalog {
    fn list(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    fn find(&self, id: &str) -> Option<Recipe> {
        self.by_id.get(id).map(|&idx| self.recipes[idx].clone())
    }

    fn search(&self, query: &SearchQuery) -> Vec<Recipe> {
        search_recipes(&self.recipes, query)
    }
}
