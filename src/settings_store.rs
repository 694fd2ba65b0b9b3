// ABOUTME: Best-effort persistence of recommendation settings over the key-value boundary
// ABOUTME: Load merges onto defaults, save and reset never fail, export renders pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Settings Store
//!
//! The store is a convenience cache, not a system of record: every read
//! failure degrades to [`RecommendationSettings::default`] and every write
//! failure is logged and swallowed.

use std::sync::Arc;

use nutrifind_intelligence::settings::{parse_stored, RecommendationSettings};
use tracing::{debug, warn};

use crate::constants::{export, storage};
use crate::errors::AppResult;
use crate::storage::{scoped_key, KeyValueStore};

/// Downloadable settings document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsExport {
    /// Suggested file name
    pub file_name: &'static str,
    /// MIME type
    pub content_type: &'static str,
    /// Pretty-printed JSON
    pub body: String,
}

/// Settings persisted under one key of a [`KeyValueStore`]
#[derive(Clone)]
pub struct SettingsStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl SettingsStore {
    /// Store using the unscoped `nutri_settings_v1` key
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            key: storage::SETTINGS_KEY.to_owned(),
        }
    }

    /// Store scoped to one user (`"{user_id}:nutri_settings_v1"`)
    #[must_use]
    pub fn for_user(kv: Arc<dyn KeyValueStore>, user_id: &str) -> Self {
        Self {
            kv,
            key: scoped_key(user_id, storage::SETTINGS_KEY),
        }
    }

    /// Key the settings are stored under
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load settings, merging the stored blob onto the defaults
    ///
    /// Missing, unreadable, or malformed blobs yield the defaults.
    #[must_use]
    pub fn load(&self) -> RecommendationSettings {
        let raw = match self.kv.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored settings, using defaults");
                return RecommendationSettings::default();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read settings, using defaults");
                return RecommendationSettings::default();
            }
        };

        match parse_stored(&raw) {
            Ok(settings) => {
                debug!(key = %self.key, "Loaded settings");
                settings
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Malformed stored settings, using defaults");
                RecommendationSettings::default()
            }
        }
    }

    /// Persist the full settings object; failures are logged and ignored
    pub fn save(&self, settings: &RecommendationSettings) {
        let result = serde_json::to_string(settings)
            .map_err(Into::into)
            .and_then(|json| self.kv.set(&self.key, &json));
        match result {
            Ok(()) => debug!(key = %self.key, "Saved settings"),
            Err(e) => warn!(key = %self.key, error = %e, "Failed to save settings"),
        }
    }

    /// Delete the stored blob and return the defaults
    #[must_use]
    pub fn reset(&self) -> RecommendationSettings {
        match self.kv.remove(&self.key) {
            Ok(()) => debug!(key = %self.key, "Reset settings"),
            Err(e) => warn!(key = %self.key, error = %e, "Failed to remove stored settings"),
        }
        RecommendationSettings::default()
    }

    /// Render settings as a downloadable pretty JSON document
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the settings cannot be encoded.
    pub fn export(settings: &RecommendationSettings) -> AppResult<SettingsExport> {
        Ok(SettingsExport {
            file_name: export::SETTINGS_FILE_NAME,
            content_type: export::SETTINGS_CONTENT_TYPE,
            body: serde_json::to_string_pretty(settings)?,
        })
    }
}

/// In-memory editing session over a [`SettingsStore`]
///
/// Edits stay local until [`SettingsSession::apply`] persists them.
pub struct SettingsSession {
    store: SettingsStore,
    current: RecommendationSettings,
    dirty: bool,
}

impl SettingsSession {
    /// Open a session with the currently stored settings
    #[must_use]
    pub fn open(store: SettingsStore) -> Self {
        let current = store.load();
        Self {
            store,
            current,
            dirty: false,
        }
    }

    /// Settings being edited
    #[must_use]
    pub const fn settings(&self) -> &RecommendationSettings {
        &self.current
    }

    /// Replace the edited settings
    pub fn set(&mut self, settings: RecommendationSettings) {
        self.current = settings;
        self.dirty = true;
    }

    /// Modify the edited settings in place
    pub fn update(&mut self, edit: impl FnOnce(&mut RecommendationSettings)) {
        edit(&mut self.current);
        self.dirty = true;
    }

    /// Whether edits have not been applied yet
    #[must_use]
    pub const fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Persist the edited settings
    pub fn apply(&mut self) {
        self.store.save(&self.current);
        self.dirty = false;
    }

    /// Clear stored settings and continue from the defaults
    pub fn reset_to_defaults(&mut self) {
        self.current = self.store.reset();
        self.dirty = false;
    }

    /// Export the edited settings
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the settings cannot be encoded.
    pub fn export(&self) -> AppResult<SettingsExport> {
        SettingsStore::export(&self.current)
    }
}
