// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven server configuration for the NutriFind service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All configuration comes from environment variables; see
//! [`environment::ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{DataSources, Environment, ServerConfig};
