// ABOUTME: Plan recommendation service resolving stored cookout data into a plan
// ABOUTME: Validates the request, gathers coverage and pantries, and runs the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cookout_core::errors::{AppError, AppResult};
use cookout_core::models::{AssignedItem, CookoutPlan, Pantry, Participant};
use cookout_intelligence::build_cookout_plan;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::constraints::PlanConstraints;
use super::store::CookoutStore;
use crate::config::PlannerDefaults;

/// Body of a plan recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecommendationRequest {
    /// Invitation to plan for; must be positive
    pub invitation_id: i64,
    /// Username whose assignments are echoed back in `viewer`
    #[serde(default)]
    pub viewer_username: Option<String>,
    /// Planning constraints
    #[serde(default)]
    pub constraints: PlanConstraints,
}

/// Plan plus the viewer's own assignments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecommendation {
    /// Full plan
    pub plan: CookoutPlan,
    /// Assignments for the requesting viewer; empty when absent
    pub viewer: Vec<AssignedItem>,
}

/// Orchestrates data loading and planning for one invitation
#[derive(Clone)]
pub struct PlanRecommendationService {
    store: Arc<dyn CookoutStore>,
    defaults: PlannerDefaults,
}

impl PlanRecommendationService {
    /// Create a service over a store with server defaults
    #[must_use]
    pub fn new(store: Arc<dyn CookoutStore>, defaults: PlannerDefaults) -> Self {
        Self { store, defaults }
    }

    /// Build a plan recommendation for an invitation
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive invitation id, `ResourceNotFound`
    /// when the invitation or its recipe is missing, and the store's error when
    /// any lookup fails
    #[instrument(skip(self, request), fields(invitation_id = request.invitation_id))]
    pub async fn recommend(
        &self,
        request: PlanRecommendationRequest,
    ) -> AppResult<PlanRecommendation> {
        let invitation_id = request.invitation_id;
        if invitation_id <= 0 {
            return Err(AppError::invalid_input("Invalid invitation_id")
                .with_details(serde_json::json!({ "invitation_id": invitation_id })));
        }

        let constraints = request.constraints.resolve(&self.defaults);

        let invitation = self
            .store
            .get_invitation(invitation_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Invitation").with_resource_id(invitation_id.to_string())
            })?;
        let recipe = invitation.recipe.as_ref().ok_or_else(|| {
            AppError::not_found("Recipe").with_resource_id(invitation.recipe_id.to_string())
        })?;
        let required = recipe.required_ingredients();

        let mut covered: BTreeSet<usize> = self
            .store
            .creator_ingredient_indices(invitation_id)
            .await?
            .into_iter()
            .collect();
        covered.extend(self.store.confirmed_participant_indices(invitation_id).await?);

        let records = self
            .store
            .list_participants(invitation_id, !constraints.include_pending_participants)
            .await?;

        let mut seen = HashSet::new();
        let records: Vec<_> = records
            .into_iter()
            .filter(|record| !record.username.is_empty())
            .filter(|record| seen.insert(record.username.clone()))
            .collect();
        let usernames: Vec<String> = records.iter().map(|r| r.username.clone()).collect();

        let mut pantries = if usernames.is_empty() {
            HashMap::new()
        } else {
            self.store.pantry_items(&usernames).await?
        };

        let participants: Vec<Participant> = records
            .iter()
            .map(|record| {
                let pantry: Pantry = pantries
                    .remove(&record.username)
                    .unwrap_or_default()
                    .into_iter()
                    .collect();
                constraints.participant(record, pantry)
            })
            .collect();

        debug!(
            required = required.len(),
            covered = covered.len(),
            participants = participants.len(),
            "Resolved planner inputs"
        );

        let plan = build_cookout_plan(&required, &covered, &participants);

        let viewer = request
            .viewer_username
            .as_deref()
            .map(|username| plan.assignments_for(username).to_vec())
            .unwrap_or_default();

        info!(
            invitation_id,
            creator = %invitation.creator_username,
            total = plan.metrics.total,
            already_covered = plan.metrics.already_covered,
            from_pantry = plan.metrics.assigned_from_pantry,
            to_shopping = plan.metrics.assigned_to_shopping,
            coverage_pct = plan.metrics.coverage_pct,
            "Built cookout plan recommendation"
        );

        Ok(PlanRecommendation { plan, viewer })
    }
}
