// ABOUTME: NutriFind CLI - rank recipes, manage settings, analyze ingredients, look up barcodes
// ABOUTME: Works directly on the file-backed store used by the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Rank the bundled catalog with the stored settings
//! nutrifind-cli rank --limit 5
//!
//! # Rank recipes from a file for one user
//! nutrifind-cli --user alice rank --recipes recipes.json
//!
//! # Inspect, tweak, export, or reset settings
//! nutrifind-cli settings show
//! nutrifind-cli settings set-weight health 0.6
//! nutrifind-cli settings export --output nutrifind-settings.json
//! nutrifind-cli settings reset
//!
//! # Estimate nutrition for a pasted ingredient list
//! nutrifind-cli analyze ingredients.txt --servings 4
//!
//! # Look up a packaged product
//! nutrifind-cli barcode 012345678905
//! ```

mod commands;
mod helpers;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrifind::config::environment::DEFAULT_DATA_DIR;
use nutrifind::logging::LoggingConfig;
use nutrifind::storage::{FileKeyValueStore, KeyValueStore};
use tracing::debug;

use commands::settings::WeightFactor;

#[derive(Parser)]
#[command(
    name = "nutrifind-cli",
    about = "NutriFind command-line tool",
    long_about = "Rank recipes with recommendation settings, manage stored settings, estimate nutrition, and look up barcodes."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Key-value store directory (defaults to NUTRIFIND_DATA_DIR or ./data/store)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Scope settings to this user id
    #[arg(long, global = true)]
    user: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rank recipes with the stored settings
    Rank {
        /// JSON array of recipes (defaults to the bundled catalog)
        #[arg(long)]
        recipes: Option<PathBuf>,

        /// Number of results to print
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Settings management commands
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Estimate per-serving nutrition for an ingredient list
    Analyze {
        /// Text file with one ingredient per line
        file: PathBuf,

        /// Servings to divide the totals by
        #[arg(long, default_value = "1")]
        servings: u32,
    },

    /// Look up a product by barcode
    Barcode {
        /// EAN-8, UPC-A or EAN-13 digits
        code: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the effective settings
    Show,

    /// Delete stored settings and print the defaults
    Reset,

    /// Export settings as pretty JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Change one scoring weight
    SetWeight {
        /// Weight to change
        #[arg(value_enum)]
        factor: WeightFactor,

        /// New value (finite, not negative)
        value: f64,
    },
}

/// Shared state for command handlers
pub struct CliContext {
    /// Store the settings live in
    pub kv: Arc<dyn KeyValueStore>,
    /// User scope, when given
    pub user: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::for_cli(cli.verbose).init()?;

    let data_dir = cli
        .data_dir
        .or_else(|| env::var("NUTRIFIND_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    debug!(data_dir = %data_dir.display(), user = ?cli.user, "CLI context");

    let context = CliContext {
        kv: Arc::new(FileKeyValueStore::new(data_dir)),
        user: cli.user,
    };

    match cli.command {
        Command::Rank { recipes, limit } => {
            commands::rank::run(&context, recipes.as_deref(), limit)?;
        }
        Command::Settings { action } => match action {
            SettingsCommand::Show => commands::settings::show(&context)?,
            SettingsCommand::Reset => commands::settings::reset(&context)?,
            SettingsCommand::Export { output } => {
                commands::settings::export(&context, output.as_deref())?;
            }
            SettingsCommand::SetWeight { factor, value } => {
                commands::settings::set_weight(&context, factor, value)?;
            }
        },
        Command::Analyze { file, servings } => commands::analyze::run(&file, servings)?,
        Command::Barcode { code } => commands::barcode::run(&code)?,
    }

    Ok(())
}
