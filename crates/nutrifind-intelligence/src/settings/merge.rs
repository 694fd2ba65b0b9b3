// ABOUTME: Deep merge of persisted settings blobs onto canonical defaults
// ABOUTME: Tolerates partial, legacy, and null-containing settings without failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{Map, Value};
use tracing::debug;

use super::RecommendationSettings;

/// Recursively merge `overlay` into `base`
///
/// Objects merge key by key; arrays and scalars in `overlay` replace the
/// value in `base`; `null` in `overlay` leaves `base` untouched. Keys absent
/// from `base` are copied as-is (they are dropped later by typed
/// deserialization if the schema does not know them).
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            merge_maps(base_map, overlay_map);
        }
        (base_slot, overlay_value) => *base_slot = overlay_value,
    }
}

fn merge_maps(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(existing) => deep_merge(existing, value),
            None if !value.is_null() => {
                base.insert(key, value);
            }
            None => {}
        }
    }
}

/// Merge a stored JSON value onto the defaults and type-check the result
///
/// # Errors
///
/// Returns the deserialization error when the merged document still does not
/// match the schema (for example a string where a number is required).
pub fn merge_with_defaults(stored: Value) -> Result<RecommendationSettings, serde_json::Error> {
    let mut merged = serde_json::to_value(RecommendationSettings::default())?;
    deep_merge(&mut merged, stored);
    serde_json::from_value(merged)
}

/// Parse a persisted settings blob, merging it onto the defaults
///
/// An empty or `null` blob yields the defaults.
///
/// # Errors
///
/// Returns the error when the blob is not JSON or does not fit the schema.
pub fn parse_stored(raw: &str) -> Result<RecommendationSettings, serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        debug!("Stored settings are not an object, using defaults");
        return Ok(RecommendationSettings::default());
    }
    merge_with_defaults(value)
}
