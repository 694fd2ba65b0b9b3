// ABOUTME: Barcode validation and product lookup for the scanner flow
// ABOUTME: Accepts EAN-8, UPC-A and EAN-13 digit strings; products come from a code-to-product map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::Product;

/// Mock barcode directory shipped with the binary
const BUNDLED_BARCODES: &str = include_str!("../data/barcodes.json");

/// Digit counts of EAN-8, UPC-A and EAN-13
const VALID_LENGTHS: [usize; 3] = [8, 12, 13];

/// Why a barcode was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    /// Contains something other than ASCII digits
    #[error("Barcode must contain only digits")]
    NonDigit,
    /// Wrong number of digits
    #[error("Barcode must have 8, 12 or 13 digits, got {0}")]
    InvalidLength(usize),
}

impl From<BarcodeError> for AppError {
    fn from(error: BarcodeError) -> Self {
        Self::invalid_input(error.to_string()).with_source(error)
    }
}

/// Validate a scanned or typed barcode
///
/// # Errors
///
/// Returns [`BarcodeError`] unless `code` is exactly 8, 12 or 13 ASCII digits.
pub fn validate_barcode(code: &str) -> Result<(), BarcodeError> {
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BarcodeError::NonDigit);
    }
    if VALID_LENGTHS.contains(&code.len()) {
        Ok(())
    } else {
        Err(BarcodeError::InvalidLength(code.len()))
    }
}

/// Lookup of packaged products by barcode
pub trait ProductDirectory: Send + Sync {
    /// Product registered under `code`
    fn lookup(&self, code: &str) -> Option<Product>;

    /// Every registered product keyed by code
    fn all(&self) -> BTreeMap<String, Product>;
}

/// Product directory held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductDirectory {
    products: BTreeMap<String, Product>,
}

impl InMemoryProductDirectory {
    /// Build from a code-to-product map
    #[must_use]
    pub const fn new(products: BTreeMap<String, Product>) -> Self {
        Self { products }
    }

    /// Parse a JSON object mapping codes to products
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON has the wrong shape.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a code-to-product JSON object from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Cannot read barcodes {}: {e}", path.display()))
                .with_source(e)
        })?;
        let directory = Self::from_json(&json)?;
        info!(path = %path.display(), products = directory.len(), "Loaded barcode directory");
        Ok(directory)
    }

    /// Directory of the bundled mock products
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the bundled data is corrupt.
    pub fn bundled() -> AppResult<Self> {
        Self::from_json(BUNDLED_BARCODES)
    }

    /// Number of products
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the directory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductDirectory for InMemoryProductDirectory {
    fn lookup(&self, code: &str) -> Option<Product> {
        self.products.get(code).cloned()
    }

    fn all(&self) -> BTreeMap<String, Product> {
        self.products.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_barcode_lengths() {
        assert!(validate_barcode("12345678").is_ok());
        assert!(validate_barcode("012345678905").is_ok());
        assert!(validate_barcode("4006381333931").is_ok());

        assert_eq!(
            validate_barcode("1234567"),
            Err(BarcodeError::InvalidLength(7))
        );
        assert_eq!(validate_barcode(""), Err(BarcodeError::InvalidLength(0)));
        assert_eq!(validate_barcode("12345678a"), Err(BarcodeError::NonDigit));
        assert_eq!(validate_barcode("１２３４５６７８"), Err(BarcodeError::NonDigit));
    }

    #[test]
    fn test_bundled_directory_codes_are_valid() {
        let directory = InMemoryProductDirectory::bundled().unwrap();
        assert!(!directory.is_empty());
        for (code, product) in directory.all() {
            assert!(validate_barcode(&code).is_ok(), "bad code {code}");
            assert!(!product.title.is_empty());
        }
    }
}
