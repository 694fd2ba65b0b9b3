// ABOUTME: Recently viewed recipes persisted over the key-value boundary
// ABOUTME: Newest-first entries with view timestamps, one entry per recipe, capped in length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::storage::{HISTORY_CAP, HISTORY_KEY};
use crate::storage::{scoped_key, KeyValueStore};

/// One recipe view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Viewed recipe
    pub recipe_id: String,
    /// RFC 3339 view time
    pub viewed_at: String,
}

/// View history persisted as one JSON array, newest first
#[derive(Clone)]
pub struct HistoryStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl HistoryStore {
    /// Store using the unscoped key
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            key: HISTORY_KEY.to_owned(),
        }
    }

    /// Store scoped to one user
    #[must_use]
    pub fn for_user(kv: Arc<dyn KeyValueStore>, user_id: &str) -> Self {
        Self {
            kv,
            key: scoped_key(user_id, HISTORY_KEY),
        }
    }

    /// Key the history is stored under
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// All entries, newest first; unreadable data yields an empty history
    #[must_use]
    pub fn entries(&self) -> Vec<HistoryEntry> {
        match self.kv.get(&self.key) {
            Ok(Some(raw)) => parse_entries(&self.key, &raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read history");
                Vec::new()
            }
        }
    }

    /// Record a view of `recipe_id`, moving it to the front
    ///
    /// Any earlier entry for the same recipe is dropped and the list is
    /// capped at the most recent views. Failures are logged and ignored.
    pub fn record_view(&self, recipe_id: &str) {
        let entry = HistoryEntry {
            recipe_id: recipe_id.to_owned(),
            viewed_at: Utc::now().to_rfc3339(),
        };
        let result = self.kv.update(&self.key, &mut |current| {
            let mut history = current
                .map(|raw| parse_entries(&self.key, &raw))
                .unwrap_or_default();
            history.retain(|item| item.recipe_id != entry.recipe_id);
            history.insert(0, entry.clone());
            history.truncate(HISTORY_CAP);
            Ok(serde_json::to_string(&history)?)
        });
        match result {
            Ok(()) => debug!(key = %self.key, recipe_id, "Recorded view"),
            Err(e) => warn!(key = %self.key, error = %e, "Failed to record view"),
        }
    }

    /// Up to `limit` distinct recipe ids, most recently viewed first
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        self.entries()
            .into_iter()
            .filter(|item| seen.insert(item.recipe_id.clone()))
            .map(|item| item.recipe_id)
            .take(limit)
            .collect()
    }

    /// Forget every view
    pub fn clear(&self) {
        match self.kv.remove(&self.key) {
            Ok(()) => debug!(key = %self.key, "Cleared history"),
            Err(e) => warn!(key = %self.key, error = %e, "Failed to clear history"),
        }
    }
}

fn parse_entries(key: &str, raw: &str) -> Vec<HistoryEntry> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(key, error = %e, "Malformed history, ignoring");
        Vec::new()
    })
}
