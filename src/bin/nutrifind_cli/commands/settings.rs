// ABOUTME: settings commands - show, reset, export, and change scoring weights
// ABOUTME: Edits go through a settings session so they persist only when applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use nutrifind::intelligence::settings::ScoringWeights;
use nutrifind::settings_store::{SettingsSession, SettingsStore};

use super::settings_store;
use crate::CliContext;

/// Scoring weight selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeightFactor {
    /// Nutritional fit
    Health,
    /// Cooking time fit
    Time,
    /// Ease and popularity
    Popularity,
    /// Cuisine and dislike preferences
    Personal,
    /// Variety placeholder
    Diversity,
}

impl WeightFactor {
    fn slot(self, weights: &mut ScoringWeights) -> &mut f64 {
        match self {
            Self::Health => &mut weights.health,
            Self::Time => &mut weights.time,
            Self::Popularity => &mut weights.popularity,
            Self::Personal => &mut weights.personal,
            Self::Diversity => &mut weights.diversity,
        }
    }
}

/// Print the effective settings
pub fn show(context: &CliContext) -> Result<()> {
    let settings = settings_store(context).load();
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

/// Delete stored settings and print the defaults
pub fn reset(context: &CliContext) -> Result<()> {
    let defaults = settings_store(context).reset();
    println!("Settings reset to defaults");
    println!("{}", serde_json::to_string_pretty(&defaults)?);
    Ok(())
}

/// Export settings to a file or stdout
pub fn export(context: &CliContext, output: Option<&Path>) -> Result<()> {
    let settings = settings_store(context).load();
    let export = SettingsStore::export(&settings)?;
    match output {
        Some(path) => {
            fs::write(path, &export.body)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Settings exported to {}", path.display());
        }
        None => println!("{}", export.body),
    }
    Ok(())
}

/// Change one scoring weight and persist it
pub fn set_weight(context: &CliContext, factor: WeightFactor, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        bail!("Weight must be a finite, non-negative number, got {value}");
    }

    let mut session = SettingsSession::open(settings_store(context));
    session.update(|settings| *factor.slot(&mut settings.advanced.weights) = value);
    session.apply();

    let weights = session.settings().advanced.weights;
    println!(
        "Weights: health {} | time {} | popularity {} | personal {} | diversity {}",
        weights.health, weights.time, weights.popularity, weights.personal, weights.diversity
    );
    Ok(())
}
