// ABOUTME: File-backed key-value store with one JSON file per key
// ABOUTME: Sanitizes keys into file names and writes atomically via temp file and rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;
use tracing::debug;

use super::{KeyValueStore, StorageError};
use crate::errors::AppResult;

/// Key-value store persisting each key as a file in a directory
///
/// `update` serializes on a per-key lock shared by clones of the store; two
/// independently constructed stores over the same directory do not share it.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl FileKeyValueStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locks: Arc::new(DashMap::new()),
        }
    }

    fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        Arc::clone(self.locks.entry(key.to_owned()).or_default().value())
    }

    /// Directory holding the key files
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key to its file
    ///
    /// Letters, digits, `-` and `_` are kept; every other byte is hex-escaped
    /// as `%XX` so distinct keys never share a file.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        let mut name = String::with_capacity(key.len() + 5);
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                name.push(char::from(byte));
            } else {
                name.push_str(&format!("%{byte:02X}"));
            }
        }
        name.push_str(".json");
        Ok(self.root.join(name))
    }
}

fn io_error(key: &str, source: io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_owned(),
        source,
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e).into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|e| io_error(key, e))?;

        let temp = path.with_extension("json.tmp");
        fs::write(&temp, value).map_err(|e| io_error(key, e))?;
        fs::rename(&temp, &path).map_err(|e| io_error(key, e))?;

        debug!(key, path = %path.display(), bytes = value.len(), "Stored key");
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e).into()),
        }
    }

    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<String>) -> AppResult<String>,
    ) -> AppResult<()> {
        let lock = self.key_lock(key);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let next = apply(self.get(key)?)?;
        self.set(key, &next)
    }
}
