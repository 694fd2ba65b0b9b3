// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads ports, data paths, feed limits, and CORS origins from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt::{self, Display};
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{feed, ports};
use crate::errors::{AppError, AppResult, ErrorCode};

/// Default directory of the file-backed key-value store
pub const DEFAULT_DATA_DIR: &str = "./data/store";
/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Locations of the data files the service loads at startup
///
/// `None` selects the dataset bundled with the binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataSources {
    /// Directory of the file-backed key-value store
    pub data_dir: PathBuf,
    /// JSON array of recipes
    pub catalog_path: Option<PathBuf>,
    /// JSON object of barcode to product
    pub barcodes_path: Option<PathBuf>,
    /// JSON array of per-100g ingredient records
    pub ingredients_path: Option<PathBuf>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Data file locations
    pub data: DataSources,
    /// Number of feed results when the request does not set `limit`
    pub feed_limit: usize,
    /// Allowed CORS origins (`*` allows any)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: DEFAULT_HOST.to_owned(),
            environment: Environment::Development,
            data: DataSources {
                data_dir: PathBuf::from(DEFAULT_DATA_DIR),
                ..DataSources::default()
            },
            feed_limit: feed::DEFAULT_FEED_LIMIT,
            cors_origins: vec!["*".to_owned()],
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` when a numeric variable does not parse
    /// or a value is out of range.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: parse_env_or("HTTP_PORT", ports::DEFAULT_HTTP_PORT)?,
            host: env_var_or("HOST", DEFAULT_HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            data: DataSources {
                data_dir: PathBuf::from(env_var_or("NUTRIFIND_DATA_DIR", DEFAULT_DATA_DIR)),
                catalog_path: optional_path("NUTRIFIND_CATALOG_PATH"),
                barcodes_path: optional_path("NUTRIFIND_BARCODES_PATH"),
                ingredients_path: optional_path("NUTRIFIND_INGREDIENTS_PATH"),
            },
            feed_limit: parse_env_or("NUTRIFIND_FEED_LIMIT", feed::DEFAULT_FEED_LIMIT)?,
            cors_origins: parse_origins(&env_var_or("CORS_ALLOWED_ORIGINS", "*")),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` for a zero feed limit or one above the maximum.
    pub fn validate(&self) -> AppResult<()> {
        if self.feed_limit == 0 || self.feed_limit > feed::MAX_FEED_LIMIT {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!(
                    "NUTRIFIND_FEED_LIMIT must be between 1 and {}, got {}",
                    feed::MAX_FEED_LIMIT,
                    self.feed_limit
                ),
            ));
        }
        Ok(())
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line summary of the configuration for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        let source = |path: &Option<PathBuf>| {
            path.as_ref()
                .map_or_else(|| "bundled".to_owned(), |p| p.display().to_string())
        };
        format!(
            "NutriFind: {} on {} | data dir {} | catalog {} | barcodes {} | ingredients {} | feed limit {} | CORS {}",
            self.environment,
            self.bind_address(),
            self.data.data_dir.display(),
            source(&self.data.catalog_path),
            source(&self.data.barcodes_path),
            source(&self.data.ingredients_path),
            self.feed_limit,
            self.cors_origins.join(",")
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Non-empty environment variable as a path
fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Invalid {key} value '{raw}': {e}"),
            )
        }),
        Err(_) => Ok(default),
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins: &str) -> Vec<String> {
    if origins.trim() == "*" {
        return vec!["*".to_owned()];
    }
    origins
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}
