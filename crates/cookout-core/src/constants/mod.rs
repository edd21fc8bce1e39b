// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Capacity limits, recipe layout, environment names, and routes for the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list.

/// Planner capacity limits and defaults
pub mod limits {
    /// Default number of items a participant is asked to bring
    pub const DEFAULT_MAX_ITEMS_PER_PERSON: u32 = 3;
    /// Upper bound for the request-level `max_items_per_person`
    pub const MAX_ITEMS_PER_PERSON_CEILING: u32 = 20;
    /// Upper bound for a single participant's `max_items` override
    pub const PARTICIPANT_MAX_ITEMS_CEILING: u32 = 50;
    /// Maximum number of explanation lines attached to an assignment
    pub const MAX_EXPLANATION_LINES: usize = 4;
}

/// Recipe layout
pub mod recipe {
    /// Number of fixed ingredient slots on a recipe (`i1`..`i9`, `i0`)
    pub const INGREDIENT_SLOT_COUNT: usize = 10;
}

/// Participant status values as stored
pub mod status {
    /// Invitee has accepted the cookout
    pub const ACCEPTED: &str = "accepted";
    /// Invitee has not answered yet
    pub const PENDING: &str = "pending";
}

/// Service names used in structured logging
pub mod service_names {
    /// Name of the HTTP service
    pub const COOKOUT_SERVER: &str = "cookout-server";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// API routes
pub mod routes {
    /// Health route
    pub const HEALTH: &str = "/health";
    /// Readiness route
    pub const READY: &str = "/ready";
    /// Plan recommendation route
    pub const PLAN_RECOMMENDATION: &str = "/api/cookout/plan-recommendation";
}

/// Environment variable names read by the server configuration
pub mod env_config {
    /// Bind address
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level / filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Comma-separated CORS origins or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Path to a JSON snapshot backing the in-memory store
    pub const COOKOUT_DATA_PATH: &str = "COOKOUT_DATA_PATH";
    /// Server-wide default for `max_items_per_person`
    pub const COOKOUT_DEFAULT_MAX_ITEMS: &str = "COOKOUT_DEFAULT_MAX_ITEMS";
    /// Server-wide default for `include_pending_participants`
    pub const COOKOUT_INCLUDE_PENDING: &str = "COOKOUT_INCLUDE_PENDING";
}

/// Configuration defaults
pub mod defaults {
    /// Default bind address
    pub const HTTP_HOST: &str = "0.0.0.0";
    /// Default request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}
