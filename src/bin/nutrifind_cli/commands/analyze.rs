// ABOUTME: analyze command - per-serving nutrition estimate for an ingredient list file
// ABOUTME: Uses the bundled ingredient database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use nutrifind::intelligence::analyzer::{estimate_nutrition, parse_recipe_text, IngredientDatabase};

use crate::helpers::display::print_estimate;

/// Parse `file` and print the estimate
pub fn run(file: &Path, servings: u32) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let rows = parse_recipe_text(&text);
    let database = IngredientDatabase::bundled()?;

    let estimate = estimate_nutrition(&database, &rows, servings);
    println!("Parsed {} ingredient lines", rows.len());
    print_estimate(&estimate);
    Ok(())
}
