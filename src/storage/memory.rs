// ABOUTME: In-memory key-value store backed by a concurrent map
// ABOUTME: Used by tests and as the fallback when no data directory is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::KeyValueStore;
use crate::errors::AppResult;

/// In-memory key-value store
///
/// `DashMap` shards the map so concurrent request handlers do not contend on
/// a single lock.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: DashMap<String, String>,
}

impl InMemoryKeyValueStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<String>) -> AppResult<String>,
    ) -> AppResult<()> {
        // The entry holds its shard lock until it is dropped
        match self.entries.entry(key.to_owned()) {
            Entry::Occupied(mut entry) => {
                let next = apply(Some(entry.get().clone()))?;
                entry.insert(next);
            }
            Entry::Vacant(entry) => {
                let next = apply(None)?;
                entry.insert(next);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_update_is_atomic_across_threads() {
        let store = InMemoryKeyValueStore::new();
        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        store
                            .update("counter", &mut |current| {
                                let n: u32 = current.as_deref().unwrap_or("0").parse().unwrap();
                                Ok((n + 1).to_string())
                            })
                            .unwrap();
                    }
                });
            }
        });
        assert_eq!(store.get("counter").unwrap().as_deref(), Some("400"));
    }

    #[test]
    fn test_failed_update_leaves_value_untouched() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "v1").unwrap();
        let result = store.update("k", &mut |_| Err(AppError::internal("nope")));
        assert!(result.is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));
    }
}
