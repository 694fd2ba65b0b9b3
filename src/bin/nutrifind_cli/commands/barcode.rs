// ABOUTME: barcode command - validates a code and prints the matching product
// ABOUTME: Looks in NUTRIFIND_BARCODES_PATH when set, else the bundled directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use nutrifind::barcode::{validate_barcode, InMemoryProductDirectory, ProductDirectory};

/// Look up `code` and print the product
pub fn run(code: &str) -> Result<()> {
    validate_barcode(code)?;

    let directory = match env::var("NUTRIFIND_BARCODES_PATH") {
        Ok(path) if !path.trim().is_empty() => {
            InMemoryProductDirectory::from_path(&PathBuf::from(path))?
        }
        _ => InMemoryProductDirectory::bundled()?,
    };

    let Some(product) = directory.lookup(code) else {
        bail!("No product found for barcode {code}");
    };
    println!("{}", serde_json::to_string_pretty(&product)?);
    Ok(())
}
