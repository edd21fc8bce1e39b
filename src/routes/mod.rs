// ABOUTME: Route module organization for cookout server HTTP endpoints
// ABOUTME: Assembles domain routers and applies tracing, CORS, and timeout layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the cookout server
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the service layer.

/// Cookout plan recommendation routes
pub mod cookout;
/// Health check and readiness routes
pub mod health;

pub use cookout::CookoutRoutes;
pub use health::{DataStatus, HealthRoutes};

use axum::Router;
use std::sync::Arc;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::cookout::PlanRecommendationService;
use crate::middleware::setup_cors;

/// Build the full application router
pub fn build_router(
    service: Arc<PlanRecommendationService>,
    data: Arc<DataStatus>,
    config: &ServerConfig,
) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(data))
        .merge(CookoutRoutes::routes(service))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(setup_cors(config))
        .layer(TraceLayer::new_for_http())
}
