// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Environment variable parsing, bundled data defaults, and feed limit validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use nutrifind::config::environment::DEFAULT_DATA_DIR;
use nutrifind::config::{Environment, ServerConfig};
use nutrifind::errors::ErrorCode;
use serial_test::serial;

const VARS: [&str; 9] = [
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "NUTRIFIND_DATA_DIR",
    "NUTRIFIND_CATALOG_PATH",
    "NUTRIFIND_BARCODES_PATH",
    "NUTRIFIND_INGREDIENTS_PATH",
    "NUTRIFIND_FEED_LIMIT",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.data.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    assert!(config.data.catalog_path.is_none());
    assert_eq!(config.cors_origins, vec!["*"]);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("NUTRIFIND_DATA_DIR", "/var/lib/nutrifind");
    env::set_var("NUTRIFIND_CATALOG_PATH", "/etc/nutrifind/recipes.json");
    env::set_var("NUTRIFIND_BARCODES_PATH", "  ");
    env::set_var("NUTRIFIND_FEED_LIMIT", "25");
    env::set_var("CORS_ALLOWED_ORIGINS", "http://localhost:5173, https://app.test");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.data.data_dir, PathBuf::from("/var/lib/nutrifind"));
    assert_eq!(
        config.data.catalog_path,
        Some(PathBuf::from("/etc/nutrifind/recipes.json"))
    );
    assert!(config.data.barcodes_path.is_none());
    assert_eq!(config.feed_limit, 25);
    assert_eq!(
        config.cors_origins,
        vec!["http://localhost:5173", "https://app.test"]
    );
}

#[test]
#[serial]
fn test_unparseable_port_is_config_error() {
    clear_env();
    env::set_var("HTTP_PORT", "eighty");
    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_feed_limit_out_of_range_is_rejected() {
    clear_env();
    env::set_var("NUTRIFIND_FEED_LIMIT", "100000");
    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_bind_address_and_summary() {
    let config = ServerConfig {
        host: "0.0.0.0".to_owned(),
        http_port: 3000,
        ..ServerConfig::default()
    };
    assert_eq!(config.bind_address(), "0.0.0.0:3000");
    assert!(config.summary().contains("development on 0.0.0.0:3000"));
}
