// ABOUTME: Application-wide constants for the NutriFind platform
// ABOUTME: Storage keys, export naming, HTTP header names, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Key-value storage keys and limits
pub mod storage {
    /// Key under which recommendation settings are persisted
    pub const SETTINGS_KEY: &str = "nutri_settings_v1";
    /// Key under which user-built recipes are persisted
    pub const USER_RECIPES_KEY: &str = "user_recipes_v1";
    /// Maximum number of user recipes retained per user
    pub const USER_RECIPES_CAP: usize = 500;
    /// Key under which recently viewed recipes are persisted
    pub const HISTORY_KEY: &str = "nutrition-app-history";
    /// Maximum number of history entries retained per user
    pub const HISTORY_CAP: usize = 50;
    /// Default number of recent recipes returned from history
    pub const RECENT_RECIPES_LIMIT: usize = 20;
    /// Separator between a user scope and a storage key
    pub const SCOPE_SEPARATOR: char = ':';
}

/// Settings export conventions
pub mod export {
    /// File name suggested for downloaded settings
    pub const SETTINGS_FILE_NAME: &str = "nutrifind-settings.json";
    /// Content type of exported settings
    pub const SETTINGS_CONTENT_TYPE: &str = "application/json";
}

/// HTTP header names
pub mod headers {
    /// Caller identity header (authentication happens upstream)
    pub const USER_ID: &str = "x-user-id";
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Service names for structured logging
pub mod service_names {
    /// HTTP server
    pub const NUTRIFIND_SERVER: &str = "nutrifind-server";
    /// Command line tool
    pub const NUTRIFIND_CLI: &str = "nutrifind-cli";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Feed defaults
pub mod feed {
    /// Default number of recipes returned by the feed
    pub const DEFAULT_FEED_LIMIT: usize = 50;
    /// Hard upper bound on requested feed size
    pub const MAX_FEED_LIMIT: usize = 500;
}
