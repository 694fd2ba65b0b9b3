// ABOUTME: Unit conversion for analyzed ingredient rows
// ABOUTME: Converts weight, volume, and count units to grams using ingredient densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Volume conversion constants (to milliliters)
const ML_PER_CUP: f64 = 240.0;
const ML_PER_TBSP: f64 = 15.0;
const ML_PER_TSP: f64 = 5.0;
const ML_PER_L: f64 = 1000.0;
const ML_PER_FL_OZ: f64 = 29.57;

/// Weight conversion constants (to grams)
const GRAMS_PER_OZ: f64 = 28.35;
const GRAMS_PER_LB: f64 = 453.6;
const GRAMS_PER_KG: f64 = 1000.0;

/// Density of water, used for liquids and powders missing from the table
const DEFAULT_GRAMS_PER_ML: f64 = 1.0;
/// Weight assumed for one piece of an ingredient missing from the table
const DEFAULT_GRAMS_PER_PIECE: f64 = 50.0;

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Quantity was negative or not a number
    #[error("Invalid amount {0} (must be a non-negative number)")]
    InvalidAmount(f64),
    /// Unit label is not recognized
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// Measurement unit of an ingredient row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IngredientUnit {
    /// Weight in grams (base unit)
    #[default]
    Grams,
    /// Weight in kilograms
    Kilograms,
    /// Weight in ounces (28.35 g)
    Ounces,
    /// Weight in pounds (453.6 g)
    Pounds,
    /// Volume in milliliters
    Milliliters,
    /// Volume in liters
    Liters,
    /// US fluid ounces
    FluidOunces,
    /// US cups (240 ml)
    Cups,
    /// Tablespoons (15 ml)
    Tablespoons,
    /// Teaspoons (5 ml)
    Teaspoons,
    /// Count of whole items (eggs, bananas, cloves)
    Pieces,
}

impl IngredientUnit {
    /// Parse a unit word or abbreviation, case-insensitively
    ///
    /// Trailing periods are ignored (`"tbsp."`). Returns `None` for words that
    /// are not units, so callers can treat them as part of the item name.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label.trim().trim_end_matches('.').to_lowercase();
        let unit = match normalized.as_str() {
            "g" | "gr" | "gram" | "grams" => Self::Grams,
            "kg" | "kgs" | "kilogram" | "kilograms" => Self::Kilograms,
            "oz" | "ounce" | "ounces" => Self::Ounces,
            "lb" | "lbs" | "pound" | "pounds" => Self::Pounds,
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Self::Milliliters
            }
            "l" | "liter" | "liters" | "litre" | "litres" => Self::Liters,
            "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => Self::FluidOunces,
            "cup" | "cups" | "c" => Self::Cups,
            "tbsp" | "tbs" | "tablespoon" | "tablespoons" | "tbl" => Self::Tablespoons,
            "tsp" | "teaspoon" | "teaspoons" => Self::Teaspoons,
            "piece" | "pieces" | "pc" | "pcs" | "whole" | "clove" | "cloves" | "slice"
            | "slices" => Self::Pieces,
            _ => return None,
        };
        Some(unit)
    }

    /// Parse a unit label, treating an empty label as grams
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::UnknownUnit` for unrecognized labels.
    pub fn from_label(label: &str) -> Result<Self, ConversionError> {
        if label.trim().is_empty() {
            return Ok(Self::Grams);
        }
        Self::parse(label).ok_or_else(|| ConversionError::UnknownUnit(label.to_owned()))
    }

    /// Canonical abbreviation used in analyzed rows
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Kilograms => "kg",
            Self::Ounces => "oz",
            Self::Pounds => "lb",
            Self::Milliliters => "ml",
            Self::Liters => "l",
            Self::FluidOunces => "fl oz",
            Self::Cups => "cup",
            Self::Tablespoons => "tbsp",
            Self::Teaspoons => "tsp",
            Self::Pieces => "piece",
        }
    }

    /// Milliliters per unit for volume measurements
    const fn milliliters(self) -> Option<f64> {
        match self {
            Self::Milliliters => Some(1.0),
            Self::Liters => Some(ML_PER_L),
            Self::FluidOunces => Some(ML_PER_FL_OZ),
            Self::Cups => Some(ML_PER_CUP),
            Self::Tablespoons => Some(ML_PER_TBSP),
            Self::Teaspoons => Some(ML_PER_TSP),
            Self::Grams | Self::Kilograms | Self::Ounces | Self::Pounds | Self::Pieces => None,
        }
    }

    /// Grams per unit for weight measurements
    const fn grams(self) -> Option<f64> {
        match self {
            Self::Grams => Some(1.0),
            Self::Kilograms => Some(GRAMS_PER_KG),
            Self::Ounces => Some(GRAMS_PER_OZ),
            Self::Pounds => Some(GRAMS_PER_LB),
            _ => None,
        }
    }
}

/// Density of an ingredient: grams per milliliter and/or grams per piece
#[derive(Debug, Clone, Copy)]
struct Density {
    grams_per_ml: Option<f64>,
    grams_per_piece: Option<f64>,
}

impl Density {
    const fn volume(grams_per_ml: f64) -> Self {
        Self {
            grams_per_ml: Some(grams_per_ml),
            grams_per_piece: None,
        }
    }

    const fn piece(grams_per_piece: f64) -> Self {
        Self {
            grams_per_ml: None,
            grams_per_piece: Some(grams_per_piece),
        }
    }

    const fn both(grams_per_ml: f64, grams_per_piece: f64) -> Self {
        Self {
            grams_per_ml: Some(grams_per_ml),
            grams_per_piece: Some(grams_per_piece),
        }
    }
}

/// Approximate densities of common home-cooking ingredients
static DENSITIES: LazyLock<HashMap<&'static str, Density>> = LazyLock::new(|| {
    HashMap::from([
        // Grains and baking
        ("flour", Density::volume(0.53)),
        ("sugar", Density::volume(0.85)),
        ("brown sugar", Density::volume(0.93)),
        ("rice", Density::volume(0.77)),
        ("oats", Density::volume(0.36)),
        ("quinoa", Density::volume(0.71)),
        ("pasta", Density::volume(0.45)),
        ("bread", Density::piece(30.0)),
        // Fats, oils, sweeteners
        ("oil", Density::volume(0.92)),
        ("olive oil", Density::volume(0.92)),
        ("butter", Density::volume(0.91)),
        ("honey", Density::volume(1.42)),
        ("maple syrup", Density::volume(1.33)),
        ("peanut butter", Density::volume(1.07)),
        // Dairy
        ("milk", Density::volume(1.03)),
        ("yogurt", Density::volume(1.05)),
        ("cheese", Density::volume(0.45)),
        ("parmesan", Density::volume(0.42)),
        // Produce
        ("egg", Density::piece(50.0)),
        ("banana", Density::piece(120.0)),
        ("apple", Density::piece(180.0)),
        ("avocado", Density::piece(150.0)),
        ("lemon", Density::piece(60.0)),
        ("garlic", Density::piece(3.0)),
        ("onion", Density::both(0.63, 110.0)),
        ("tomato", Density::both(0.60, 150.0)),
        ("carrot", Density::both(0.50, 60.0)),
        ("potato", Density::piece(150.0)),
        ("spinach", Density::volume(0.12)),
        // Proteins and legumes
        ("chicken breast", Density::piece(175.0)),
        ("chickpeas", Density::volume(0.72)),
        ("black beans", Density::volume(0.72)),
        ("lentils", Density::volume(0.77)),
        ("almonds", Density::volume(0.56)),
        // Liquids and seasonings
        ("water", Density::volume(1.0)),
        ("broth", Density::volume(1.0)),
        ("soy sauce", Density::volume(1.15)),
        ("salt", Density::volume(1.2)),
    ])
});

/// Find the density entry for an ingredient
///
/// Exact match first, then the longest table key contained in the name
/// (`"extra virgin olive oil"` resolves to `"olive oil"`, not `"oil"`).
fn lookup_density(ingredient: &str) -> Option<Density> {
    let normalized = ingredient.trim().to_lowercase();
    if let Some(density) = DENSITIES.get(normalized.as_str()) {
        return Some(*density);
    }
    DENSITIES
        .iter()
        .filter(|(key, _)| normalized.contains(*key))
        .max_by_key(|(key, _)| key.len())
        .map(|(_, density)| *density)
}

/// Convert a quantity of an ingredient to grams
///
/// Weight units convert directly. Volume units use the ingredient density,
/// defaulting to water. Pieces use the per-piece weight, defaulting to 50 g.
///
/// # Errors
///
/// Returns `ConversionError::InvalidAmount` for negative or non-finite quantities.
///
/// # Examples
///
/// ```rust
/// use nutrifind_intelligence::analyzer::conversion::{convert_to_grams, IngredientUnit};
///
/// assert_eq!(convert_to_grams(100.0, IngredientUnit::Grams, "anything"), Ok(100.0));
/// assert_eq!(convert_to_grams(1.0, IngredientUnit::Cups, "water"), Ok(240.0));
/// ```
pub fn convert_to_grams(
    qty: f64,
    unit: IngredientUnit,
    ingredient: &str,
) -> Result<f64, ConversionError> {
    if !qty.is_finite() || qty < 0.0 {
        return Err(ConversionError::InvalidAmount(qty));
    }

    if let Some(grams) = unit.grams() {
        return Ok(qty * grams);
    }

    let density = lookup_density(ingredient);

    if let Some(milliliters) = unit.milliliters() {
        let grams_per_ml = density
            .and_then(|d| d.grams_per_ml)
            .unwrap_or(DEFAULT_GRAMS_PER_ML);
        return Ok(qty * milliliters * grams_per_ml);
    }

    let grams_per_piece = density
        .and_then(|d| d.grams_per_piece)
        .unwrap_or(DEFAULT_GRAMS_PER_PIECE);
    Ok(qty * grams_per_piece)
}
