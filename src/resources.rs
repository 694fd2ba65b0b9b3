// ABOUTME: Centralized container of shared service resources for dependency injection
// ABOUTME: Builds the key-value store, catalog, barcode directory, ingredient db, and ranking engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Everything a request handler needs, built once at startup and shared
//! behind `Arc`s. Tests assemble the same struct from in-memory parts.

use std::fs;
use std::sync::Arc;

use nutrifind_intelligence::analyzer::IngredientDatabase;
use nutrifind_intelligence::RankingEngine;
use tracing::info;

use crate::barcode::{InMemoryProductDirectory, ProductDirectory};
use crate::catalog::{InMemoryCatalog, RecipeCatalog};
use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::history::HistoryStore;
use crate::saved::{InMemorySavedRecipes, SavedRecipesRepository};
use crate::settings_store::SettingsStore;
use crate::storage::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
use crate::user_recipes::UserRecipeStore;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Persistence for settings and user recipes
    pub kv: Arc<dyn KeyValueStore>,
    /// Recipe source for the feed and search
    pub catalog: Arc<dyn RecipeCatalog>,
    /// Saved recipe ids per user
    pub saved: Arc<dyn SavedRecipesRepository>,
    /// Barcode to product lookup
    pub products: Arc<dyn ProductDirectory>,
    /// Per-100 g ingredient nutrition
    pub ingredients: Arc<IngredientDatabase>,
    /// Ranking options used by the feed
    pub engine: RankingEngine,
}

impl ServerResources {
    /// Build resources from configuration, loading data files or bundled data
    ///
    /// # Errors
    ///
    /// Returns an error when a configured data file cannot be read or parsed.
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let catalog = match &config.data.catalog_path {
            Some(path) => InMemoryCatalog::from_path(path)?,
            None => InMemoryCatalog::bundled()?,
        };
        let products = match &config.data.barcodes_path {
            Some(path) => InMemoryProductDirectory::from_path(path)?,
            None => InMemoryProductDirectory::bundled()?,
        };
        let ingredients = match &config.data.ingredients_path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| {
                    AppError::config(format!("Cannot read ingredients {}: {e}", path.display()))
                        .with_source(e)
                })?;
                IngredientDatabase::from_json(&json)?
            }
            None => IngredientDatabase::bundled()?,
        };

        info!(
            recipes = catalog.len(),
            products = products.len(),
            ingredients = ingredients.len(),
            data_dir = %config.data.data_dir.display(),
            "Server resources ready"
        );

        Ok(Self {
            kv: Arc::new(FileKeyValueStore::new(config.data.data_dir.clone())),
            catalog: Arc::new(catalog),
            saved: Arc::new(InMemorySavedRecipes::new()),
            products: Arc::new(products),
            ingredients: Arc::new(ingredients),
            engine: RankingEngine::new(),
            config: Arc::new(config),
        })
    }

    /// Resources backed entirely by memory and the bundled data
    ///
    /// # Errors
    ///
    /// Returns a serialization error if bundled data is corrupt.
    pub fn in_memory(config: ServerConfig) -> AppResult<Self> {
        Ok(Self {
            kv: Arc::new(InMemoryKeyValueStore::new()),
            catalog: Arc::new(InMemoryCatalog::bundled()?),
            saved: Arc::new(InMemorySavedRecipes::new()),
            products: Arc::new(InMemoryProductDirectory::bundled()?),
            ingredients: Arc::new(IngredientDatabase::bundled()?),
            engine: RankingEngine::new(),
            config: Arc::new(config),
        })
    }

    /// Replace the recipe catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<dyn RecipeCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the ranking engine options
    #[must_use]
    pub fn with_engine(mut self, engine: RankingEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Settings store for one user
    #[must_use]
    pub fn settings_for(&self, user_id: &str) -> SettingsStore {
        SettingsStore::for_user(Arc::clone(&self.kv), user_id)
    }

    /// View history for one user
    #[must_use]
    pub fn history_for(&self, user_id: &str) -> HistoryStore {
        HistoryStore::for_user(Arc::clone(&self.kv), user_id)
    }

    /// User recipe store for one user
    #[must_use]
    pub fn user_recipes_for(&self, user_id: &str) -> UserRecipeStore {
        UserRecipeStore::for_user(Arc::clone(&self.kv), user_id)
    }
}
