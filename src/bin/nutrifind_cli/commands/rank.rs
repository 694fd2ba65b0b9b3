// ABOUTME: rank command - ranks recipes with the stored settings and prints the scores
// ABOUTME: Uses the bundled catalog unless a recipe file is given
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use nutrifind::catalog::{InMemoryCatalog, RecipeCatalog};
use nutrifind::intelligence::{diversify, rank};
use tracing::info;

use super::settings_store;
use crate::helpers::display::print_ranking;
use crate::CliContext;

/// Rank recipes and print the top `limit`
pub fn run(context: &CliContext, recipes: Option<&Path>, limit: usize) -> Result<()> {
    let catalog = match recipes {
        Some(path) => InMemoryCatalog::from_path(path)?,
        None => InMemoryCatalog::bundled()?,
    };
    let settings = settings_store(context).load();

    let ranked = rank(&catalog.list(), &settings);
    let kept = ranked.len();
    let results = diversify(ranked, settings.personalization.diversity_bias, Some(limit));
    info!(candidates = catalog.len(), kept, shown = results.len(), "Ranked recipes");

    print_ranking(&results);
    Ok(())
}
