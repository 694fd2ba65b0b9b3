// ABOUTME: Recipe, nutrition label, and scored recipe models
// ABOUTME: Backend-agnostic recipe shape with lenient numeric coercion and derived helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};

use super::coerce::{lenient_f64, lenient_u32, string_id, string_list};

/// Recipe preparation difficulty
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Quick, few steps
    Easy,
    /// Typical home cooking
    #[default]
    Medium,
    /// Demanding technique or long process
    Hard,
    /// Any label the backend sends that is not one of the above
    Other,
}

impl Difficulty {
    /// Parse difficulty from string, case-insensitively
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&raw))
    }
}

/// Nutrition label values (per serving)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    /// Energy (kcal)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Total fat (g)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// Saturated fat (g)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<f64>,
    /// Trans fat (g)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub trans_fat: Option<f64>,
    /// Cholesterol (mg)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<f64>,
    /// Sodium (mg)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    /// Total carbohydrates (g)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// Dietary fiber (g)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    /// Total sugars (g)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub sugars: Option<f64>,
    /// Added sugars (g)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub added_sugars: Option<f64>,
    /// Protein (g)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Vitamin D (mcg)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub vitamin_d: Option<f64>,
    /// Calcium (mg)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    /// Iron (mg)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
    /// Potassium (mg)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
}

/// Core recipe model (UI-friendly, backend-agnostic)
///
/// The ranking engine only reads recipes; derived values such as the score
/// live on [`ScoredRecipe`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier (numeric backend ids are stringified)
    #[serde(default, deserialize_with = "string_id")]
    pub id: String,
    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Alternate name used by some backends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URLs, first is the hero image
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Canonical total time in minutes, used when prep and cook are both absent
    #[serde(
        default,
        alias = "time_minutes",
        deserialize_with = "lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_minutes: Option<u32>,
    /// Preparation time in minutes
    #[serde(default, deserialize_with = "lenient_u32", skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    /// Cooking time in minutes
    #[serde(default, deserialize_with = "lenient_u32", skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    /// Number of servings
    #[serde(default, deserialize_with = "lenient_u32", skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Difficulty, `medium` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Free-text labels (diet, cuisine and allergen hints)
    #[serde(default, deserialize_with = "string_list")]
    pub tags: Vec<String>,
    /// Structured cuisine labels
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub cuisines: Vec<String>,
    /// Structured diet labels
    #[serde(
        default,
        alias = "diet_tags",
        deserialize_with = "string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub diet_tags: Vec<String>,
    /// Structured allergen labels
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub allergens: Vec<String>,
    /// Nutrition per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    /// Popularity signal in `[0, 1]` computed by the data source (views, saves)
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    /// Whether the current user saved this recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_saved: Option<bool>,
    /// Last update timestamp (ISO 8601)
    #[serde(
        default,
        alias = "updated_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl Recipe {
    /// Create a recipe with only an identifier and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Total time in minutes: `prepTime + cookTime`, or `timeMinutes` when both are absent
    #[must_use]
    pub fn total_time(&self) -> u32 {
        match (self.prep_time, self.cook_time) {
            (None, None) => self.time_minutes.unwrap_or(0),
            (prep, cook) => prep.unwrap_or(0).saturating_add(cook.unwrap_or(0)),
        }
    }

    /// Difficulty with the `medium` default applied
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or_default()
    }

    /// Best available display title
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.id)
    }

    /// Every label that filters and preferences are matched against
    pub fn matchable_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .chain(&self.diet_tags)
            .chain(&self.allergens)
            .chain(&self.cuisines)
            .map(String::as_str)
    }
}

/// Individual sub-scores that make up a recipe's composite score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Calorie and macro fit
    pub health: f64,
    /// Closeness to the preferred time window midpoint
    pub time: f64,
    /// Difficulty and popularity signal
    pub popularity: f64,
    /// Cuisine preference and dislikes
    pub personal: f64,
    /// Diversity contribution
    pub diversity: f64,
}

/// Recipe with its ranking score attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecipe {
    /// The unmodified input recipe
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Weighted composite in `[0, 1]`
    pub score: f64,
    /// Sub-scores in `[0, 1]`
    pub score_breakdown: ScoreBreakdown,
}
