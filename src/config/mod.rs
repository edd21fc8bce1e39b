// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration for the cookout server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables; there are no config files.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, LogLevel, PlannerDefaults, ServerConfig};
