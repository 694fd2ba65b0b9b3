// ABOUTME: Lenient serde helpers for backend payloads with loosely typed fields
// ABOUTME: Accepts numbers encoded as strings, null lists, and numeric identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe data arrives from an external REST backend where numeric fields are
//! sometimes strings (`"12"`) and lists are sometimes `null`. These helpers
//! are used with `#[serde(deserialize_with = ...)]` and never fail on such
//! values: anything that cannot be interpreted becomes `None` / empty.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Deserialize an optional float from a number or numeric string
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce any JSON value.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

/// Deserialize an optional non-negative integer from a number or numeric string
///
/// Fractional values are rounded; negative values are treated as absent.
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce any JSON value.
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_as_f64)
        .filter(|v| *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v.round() as u32))
}

/// Deserialize a list of strings, treating `null` as empty and skipping non-string items
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce any JSON value.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

/// Deserialize an identifier that may be a string or a number
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce any JSON value.
pub fn string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "lenient_u32")]
        minutes: Option<u32>,
        #[serde(default, deserialize_with = "string_list")]
        labels: Vec<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        let p = probe(r#"{"amount": "12.5", "minutes": "15"}"#);
        assert_eq!(p.amount, Some(12.5));
        assert_eq!(p.minutes, Some(15));

        let p = probe(r#"{"amount": 3, "minutes": 7.6}"#);
        assert_eq!(p.amount, Some(3.0));
        assert_eq!(p.minutes, Some(8));
    }

    #[test]
    fn test_garbage_becomes_absent() {
        let p = probe(r#"{"amount": "lots", "minutes": -4, "labels": null}"#);
        assert_eq!(p.amount, None);
        assert_eq!(p.minutes, None);
        assert!(p.labels.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let p = probe("{}");
        assert_eq!(p.amount, None);
        assert_eq!(p.minutes, None);
        assert!(p.labels.is_empty());
    }
}
