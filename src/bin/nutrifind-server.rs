// ABOUTME: HTTP server binary for the NutriFind recipe API
// ABOUTME: Loads environment configuration, initializes logging, builds resources, and serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `NutriFind` Server Binary
//!
//! Serves the feed, search, settings, analyzer and barcode endpoints until
//! Ctrl-C.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use nutrifind::config::ServerConfig;
use nutrifind::logging;
use nutrifind::resources::ServerResources;
use nutrifind::server;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nutrifind-server")]
#[command(about = "NutriFind - recipe discovery API with configurable ranking")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config)?);
    display_available_endpoints();

    if let Err(e) = server::run(resources).await {
        error!(error = %e, "Server error");
        return Err(e.into());
    }
    Ok(())
}

/// Log the available API endpoints
fn display_available_endpoints() {
    info!("=== Available API Endpoints ===");
    info!("  GET    /health");
    info!("  GET    /api/v1/feed?limit=");
    info!("  GET    /api/v1/recipes?q=&sort=&filters=");
    info!("  GET    /api/v1/recipes/:id");
    info!("  POST   /api/v1/recipes/:id/save");
    info!("  GET    /api/v1/me/saved");
    info!("  POST   /api/v1/me/saved");
    info!("  GET    /api/v1/me/settings");
    info!("  PUT    /api/v1/me/settings");
    info!("  DELETE /api/v1/me/settings");
    info!("  GET    /api/v1/me/settings/export");
    info!("  GET    /api/v1/me/recipes");
    info!("  POST   /api/v1/me/recipes");
    info!("  POST   /api/v1/analyze");
    info!("  GET    /api/v1/barcodes/:code");
    info!("  GET    /mock/barcodes");
    info!("=== End of Endpoint List ===");
}
