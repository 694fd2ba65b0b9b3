// ABOUTME: Key-value persistence boundary for settings and user recipes
// ABOUTME: Pluggable backends (in-memory, file directory) behind a string get/set/remove/update trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// File-backed key-value store
pub mod file;
/// In-memory key-value store
pub mod memory;

use std::io;

use thiserror::Error;

use crate::constants::storage::SCOPE_SEPARATOR;
use crate::errors::{AppError, AppResult};

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

/// Persisted string key-value store
///
/// Callers treat the store as best-effort: a failed write is logged and the
/// in-memory value stays authoritative for the session.
///
/// # Examples
///
/// ```rust
/// use nutrifind::storage::{InMemoryKeyValueStore, KeyValueStore};
/// # fn example() -> Result<(), nutrifind::errors::AppError> {
/// let store = InMemoryKeyValueStore::new();
/// store.set("nutri_settings_v1", "{}")?;
/// assert_eq!(store.get("nutri_settings_v1")?.as_deref(), Some("{}"));
/// store.remove("nutri_settings_v1")?;
/// assert!(store.get("nutri_settings_v1")?.is_none());
/// # Ok(())
/// # }
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backend cannot be read.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backend cannot be written.
    fn remove(&self, key: &str) -> AppResult<()>;

    /// Read-modify-write `key` with no other `update` of the same key in between
    ///
    /// `apply` receives the current value and returns the value to store.
    ///
    /// # Errors
    ///
    /// Returns the error from `apply`, or a storage error when the backend
    /// cannot be read or written.
    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<String>) -> AppResult<String>,
    ) -> AppResult<()>;
}

/// Storage backend failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// Key cannot be mapped to a file name
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
    /// Underlying I/O failure
    #[error("Storage I/O failed for key {key:?}: {source}")]
    Io {
        /// Key being accessed
        key: String,
        /// I/O error
        #[source]
        source: io::Error,
    },
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Scope a storage key to a user (`"{user}:{key}"`)
#[must_use]
pub fn scoped_key(user_id: &str, key: &str) -> String {
    format!("{user_id}{SCOPE_SEPARATOR}{key}")
}
