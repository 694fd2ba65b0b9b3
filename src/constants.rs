// ABOUTME: Re-exports application constants from nutrifind-core
// ABOUTME: Storage keys, header names, service names, ports, and feed limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrifind_core::constants::*;
