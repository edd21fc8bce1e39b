// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses server, logging, CORS, data source, and planner defaults from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use anyhow::{Context, Result};
use cookout_core::constants::{
    defaults, env_config,
    limits::{DEFAULT_MAX_ITEMS_PER_PERSON, MAX_ITEMS_PER_PERSON_CEILING},
    ports,
};
use cookout_core::models::clamp_max_items;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*` for any
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Server-wide planner defaults applied when a request omits constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerDefaults {
    /// Default `max_items_per_person`, already clamped to `[0, 20]`
    pub max_items_per_person: u32,
    /// Default `include_pending_participants`
    pub include_pending_participants: bool,
}

impl Default for PlannerDefaults {
    fn default() -> Self {
        Self {
            max_items_per_person: DEFAULT_MAX_ITEMS_PER_PERSON,
            include_pending_participants: true,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub http_host: String,
    /// Bind port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// CORS settings
    pub cors: CorsConfig,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// JSON snapshot backing the in-memory store; empty store when unset
    pub data_path: Option<PathBuf>,
    /// Planner defaults
    pub planner: PlannerDefaults,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: defaults::HTTP_HOST.to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            cors: CorsConfig::default(),
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            data_path: None,
            planner: PlannerDefaults::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let max_items: i64 = env_var_or(
            env_config::COOKOUT_DEFAULT_MAX_ITEMS,
            &DEFAULT_MAX_ITEMS_PER_PERSON.to_string(),
        )
        .parse()
        .context("Invalid COOKOUT_DEFAULT_MAX_ITEMS value")?;

        let config = Self {
            http_host: env_var_or(env_config::HTTP_HOST, defaults::HTTP_HOST),
            http_port: env_var_or(
                env_config::HTTP_PORT,
                &ports::DEFAULT_HTTP_PORT.to_string(),
            )
            .parse()
            .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_config::RUST_LOG, "info")),
            cors: CorsConfig {
                allowed_origins: env_var_or(env_config::CORS_ALLOWED_ORIGINS, "*"),
            },
            request_timeout_secs: env_var_or(
                env_config::REQUEST_TIMEOUT_SECS,
                &defaults::REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            data_path: env::var(env_config::COOKOUT_DATA_PATH)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            planner: PlannerDefaults {
                max_items_per_person: clamp_max_items(max_items, MAX_ITEMS_PER_PERSON_CEILING),
                include_pending_participants: env_var_or(
                    env_config::COOKOUT_INCLUDE_PENDING,
                    "true",
                )
                .parse()
                .context("Invalid COOKOUT_INCLUDE_PENDING value")?,
            },
        };

        Ok(config)
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// One-line configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Cookout Server Configuration: bind={} environment={} log_level={} cors={} \
             timeout={}s data={} default_max_items={} include_pending={}",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.cors.allowed_origins,
            self.request_timeout_secs,
            self.data_path
                .as_ref()
                .map_or_else(|| "none".to_owned(), |path| path.display().to_string()),
            self.planner.max_items_per_person,
            self.planner.include_pending_participants,
        )
    }
}

/// Read an environment variable with a default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
