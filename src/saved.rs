// ABOUTME: Per-user saved recipe ids behind an injectable repository trait
// ABOUTME: Concurrent in-memory implementation keyed by user id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use dashmap::DashMap;
use tracing::debug;

/// Which recipes each user has saved
pub trait SavedRecipesRepository: Send + Sync {
    /// Ids of every recipe `user_id` has saved
    fn saved_ids(&self, user_id: &str) -> HashSet<String>;

    /// Flip the saved state of a recipe, returning the new state
    fn toggle_save(&self, user_id: &str, recipe_id: &str) -> bool;

    /// Set the saved state of a recipe explicitly
    fn set_saved(&self, user_id: &str, recipe_id: &str, saved: bool);

    /// Whether `user_id` has saved `recipe_id`
    fn is_saved(&self, user_id: &str, recipe_id: &str) -> bool {
        self.saved_ids(user_id).contains(recipe_id)
    }
}

/// In-memory saved recipes
#[derive(Debug, Default)]
pub struct InMemorySavedRecipes {
    by_user: DashMap<String, HashSet<String>>,
}

impl InMemorySavedRecipes {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SavedRecipesRepository for InMemorySavedRecipes {
    fn saved_ids(&self, user_id: &str) -> HashSet<String> {
        self.by_user
            .get(user_id)
            .map(|ids| ids.value().clone())
            .unwrap_or_default()
    }

    fn toggle_save(&self, user_id: &str, recipe_id: &str) -> bool {
        let mut ids = self.by_user.entry(user_id.to_owned()).or_default();
        let now_saved = if ids.remove(recipe_id) {
            false
        } else {
            ids.insert(recipe_id.to_owned());
            true
        };
        debug!(user_id, recipe_id, saved = now_saved, "Toggled saved recipe");
        now_saved
    }

    fn set_saved(&self, user_id: &str, recipe_id: &str, saved: bool) {
        let mut ids = self.by_user.entry(user_id.to_owned()).or_default();
        if saved {
            ids.insert(recipe_id.to_owned());
        } else {
            ids.remove(recipe_id);
        }
    }

    fn is_saved(&self, user_id: &str, recipe_id: &str) -> bool {
        self.by_user
            .get(user_id)
            .is_some_and(|ids| ids.contains(recipe_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state_per_user() {
        let repo = InMemorySavedRecipes::new();
        assert!(repo.toggle_save("u1", "r1"));
        assert!(repo.is_saved("u1", "r1"));
        assert!(!repo.is_saved("u2", "r1"));

        assert!(!repo.toggle_save("u1", "r1"));
        assert!(repo.saved_ids("u1").is_empty());
    }

    #[test]
    fn test_set_saved_is_idempotent() {
        let repo = InMemorySavedRecipes::new();
        repo.set_saved("u1", "r1", true);
        repo.set_saved("u1", "r1", true);
        repo.set_saved("u1", "r2", true);
        assert_eq!(repo.saved_ids("u1").len(), 2);

        repo.set_saved("u1", "r1", false);
        repo.set_saved("u1", "r1", false);
        assert_eq!(
            repo.saved_ids("u1"),
            HashSet::from(["r2".to_owned()])
        );
    }
}
