// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness always answers; readiness reports whether cookout data is loaded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use cookout_core::constants::{routes, service_names};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cookout::CookoutSnapshot;

/// What the server loaded at startup, reported by `/ready`
#[derive(Debug, Clone, Default, Serialize)]
pub struct DataStatus {
    /// Snapshot file the store was loaded from; `None` when serving an empty store
    pub source: Option<PathBuf>,
    /// Invitations in the snapshot
    pub invitations: usize,
    /// Invitee rows in the snapshot
    pub participants: usize,
    /// Pantry rows in the snapshot
    pub pantry_rows: usize,
}

impl DataStatus {
    /// Describe a snapshot loaded from `source`
    #[must_use]
    pub fn loaded(source: impl Into<PathBuf>, snapshot: &CookoutSnapshot) -> Self {
        Self {
            source: Some(source.into()),
            invitations: snapshot.invitations.len(),
            participants: snapshot.participants.len(),
            pantry_rows: snapshot.pantry.len(),
        }
    }

    /// Whether a snapshot was loaded
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.source.is_some()
    }
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(data: Arc<DataStatus>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::handle_health))
            .route(routes::READY, get(Self::handle_ready))
            .with_state(data)
    }

    /// Handle GET /health
    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": service_names::COOKOUT_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Handle GET /ready; 503 until a snapshot is loaded
    async fn handle_ready(
        State(data): State<Arc<DataStatus>>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let (status, label) = if data.is_loaded() {
            (StatusCode::OK, "ready")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "no_data")
        };

        (
            status,
            Json(serde_json::json!({
                "status": label,
                "data": data.as_ref(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        )
    }
}
