// ABOUTME: Cookout plan recommendation HTTP route
// ABOUTME: Thin handler that parses the request body and delegates to the recommendation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use cookout_core::constants::routes;
use cookout_core::errors::AppError;
use std::sync::Arc;
use tracing::debug;

use crate::cookout::{PlanRecommendation, PlanRecommendationRequest, PlanRecommendationService};

/// Cookout routes handler
pub struct CookoutRoutes;

impl CookoutRoutes {
    /// Create all cookout routes
    pub fn routes(service: Arc<PlanRecommendationService>) -> Router {
        Router::new()
            .route(
                routes::PLAN_RECOMMENDATION,
                post(Self::handle_plan_recommendation),
            )
            .with_state(service)
    }

    /// Handle POST /api/cookout/plan-recommendation
    async fn handle_plan_recommendation(
        State(service): State<Arc<PlanRecommendationService>>,
        body: Result<Json<PlanRecommendationRequest>, JsonRejection>,
    ) -> Result<Json<PlanRecommendation>, AppError> {
        let Json(request) = body.map_err(|rejection| {
            debug!(error = %rejection.body_text(), "Rejected plan recommendation body");
            AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
        })?;

        let recommendation = service.recommend(request).await?;
        Ok(Json(recommendation))
    }
}
