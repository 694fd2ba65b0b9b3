// ABOUTME: Command handlers for nutrifind-cli
// ABOUTME: One module per top-level subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod barcode;
pub mod rank;
pub mod settings;

use nutrifind::settings_store::SettingsStore;

use crate::CliContext;

/// Settings store for the context's user scope
pub fn settings_store(context: &CliContext) -> SettingsStore {
    context.user.as_deref().map_or_else(
        || SettingsStore::new(context.kv.clone()),
        |user_id| SettingsStore::for_user(context.kv.clone(), user_id),
    )
}
