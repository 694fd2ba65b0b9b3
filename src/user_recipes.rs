// ABOUTME: Persistence for recipes users build themselves
// ABOUTME: Newest-first list under user_recipes_v1, replaced in place by id and capped in length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::constants::storage::{USER_RECIPES_CAP, USER_RECIPES_KEY};
use crate::models::Recipe;
use crate::storage::{scoped_key, KeyValueStore};

/// Generate an id for a new user recipe (`user_<unix millis>_<uuid>`)
///
/// The random suffix keeps ids distinct when two recipes are created in the
/// same millisecond.
#[must_use]
pub fn make_user_recipe_id() -> String {
    format!(
        "user_{}_{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

/// User-built recipes persisted as one JSON array
#[derive(Clone)]
pub struct UserRecipeStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl UserRecipeStore {
    /// Store using the unscoped key
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            key: USER_RECIPES_KEY.to_owned(),
        }
    }

    /// Store scoped to one user
    #[must_use]
    pub fn for_user(kv: Arc<dyn KeyValueStore>, user_id: &str) -> Self {
        Self {
            kv,
            key: scoped_key(user_id, USER_RECIPES_KEY),
        }
    }

    /// All stored recipes, newest first; unreadable data yields an empty list
    #[must_use]
    pub fn list(&self) -> Vec<Recipe> {
        match self.kv.get(&self.key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(key = %self.key, error = %e, "Malformed user recipes, ignoring");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read user recipes");
                Vec::new()
            }
        }
    }

    /// Look up a stored recipe by id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Recipe> {
        self.list().into_iter().find(|recipe| recipe.id == id)
    }

    /// Replace the recipe with the same id, or insert it at the front
    ///
    /// The read, change and write happen as one key-value update, so
    /// concurrent upserts for the same user never drop each other. The list is
    /// truncated to the most recent entries before writing; failures are
    /// logged and ignored.
    pub fn upsert(&self, recipe: Recipe) {
        let mut count = 0;
        let result = self.kv.update(&self.key, &mut |current| {
            let mut all: Vec<Recipe> = match current {
                Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                    warn!(key = %self.key, error = %e, "Malformed user recipes, replacing");
                    Vec::new()
                }),
                None => Vec::new(),
            };
            if let Some(existing) = all.iter_mut().find(|r| r.id == recipe.id) {
                *existing = recipe.clone();
            } else {
                all.insert(0, recipe.clone());
            }
            all.truncate(USER_RECIPES_CAP);
            count = all.len();
            Ok(serde_json::to_string(&all)?)
        });
        match result {
            Ok(()) => debug!(key = %self.key, count, "Stored user recipes"),
            Err(e) => warn!(key = %self.key, error = %e, "Failed to store user recipes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::storage::InMemoryKeyValueStore;

    fn store() -> UserRecipeStore {
        UserRecipeStore::for_user(Arc::new(InMemoryKeyValueStore::new()), "u1")
    }

    #[test]
    fn test_upsert_inserts_newest_first_and_replaces_in_place() {
        let store = store();
        store.upsert(Recipe::new("a", "First"));
        store.upsert(Recipe::new("b", "Second"));
        store.upsert(Recipe::new("a", "First, edited"));

        let ids: Vec<_> = store.list().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(
            store.find("a").unwrap().title.as_deref(),
            Some("First, edited")
        );
    }

    #[test]
    fn test_list_is_capped() {
        let store = store();
        for i in 0..=USER_RECIPES_CAP {
            store.upsert(Recipe::new(format!("r{i}"), "x"));
        }
        let all = store.list();
        assert_eq!(all.len(), USER_RECIPES_CAP);
        assert_eq!(all[0].id, format!("r{USER_RECIPES_CAP}"));
        assert!(store.find("r0").is_none());
    }

    #[test]
    fn test_malformed_blob_reads_as_empty() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        kv.set(USER_RECIPES_KEY, "{not json").unwrap();
        assert!(UserRecipeStore::new(kv).list().is_empty());
    }

    #[test]
    fn test_generated_ids_are_prefixed() {
        let id = make_user_recipe_id();
        let mut parts = id.splitn(3, '_');
        assert_eq!(parts.next(), Some("user"));
        assert!(parts.next().unwrap().parse::<i64>().is_ok());
        assert_eq!(parts.next().map(str::len), Some(32));
    }

    #[test]
    fn test_back_to_back_creates_keep_both_recipes() {
        let store = store();
        store.upsert(Recipe::new(make_user_recipe_id(), "Pancakes"));
        store.upsert(Recipe::new(make_user_recipe_id(), "Waffles"));

        let titles: Vec<_> = store.list().into_iter().filter_map(|r| r.title).collect();
        assert_eq!(titles, vec!["Waffles", "Pancakes"]);
    }

    #[test]
    fn test_concurrent_upserts_are_not_lost() {
        let store = store();
        thread::scope(|scope| {
            for worker in 0..16 {
                let store = store.clone();
                scope.spawn(move || {
                    for i in 0..20 {
                        store.upsert(Recipe::new(format!("w{worker}-{i}"), "x"));
                    }
                });
            }
        });
        assert_eq!(store.list().len(), 320);
    }
}
