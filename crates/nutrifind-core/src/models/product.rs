// ABOUTME: Packaged food product model returned by barcode lookups
// ABOUTME: Minimal shape consumed by the scanner flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::coerce::string_list;
use super::recipe::Nutrition;

/// Packaged food product identified by a barcode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Product title
    pub title: String,
    /// Brand name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Product image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free-text labels
    #[serde(default, deserialize_with = "string_list")]
    pub tags: Vec<String>,
    /// Declared allergens
    #[serde(default, deserialize_with = "string_list")]
    pub allergens: Vec<String>,
    /// Nutrition label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}
