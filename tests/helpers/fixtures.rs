// ABOUTME: Cookout fixtures shared by service and HTTP tests
// ABOUTME: Builds snapshots, services, and a store that always fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use cookout_planner::config::PlannerDefaults;
use cookout_planner::cookout::{
    CookoutSnapshot, CookoutStore, InMemoryCookoutStore, Invitation, ParticipantRecord,
    PlanRecommendationService,
};
use cookout_planner::errors::{AppError, AppResult};
use cookout_planner::routes::DataStatus;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// Invitation 42: a five-ingredient burger night
///
/// Recipe order is Ground Beef, Buns, Cheddar Cheese, Lettuce, Salt.
/// The host covers Salt (index 4) and alice confirmed Lettuce (index 3).
pub fn burger_night_snapshot() -> CookoutSnapshot {
    serde_json::from_value(json!({
        "invitations": [
            {
                "invitation_id": 42,
                "creator_username": "host",
                "recipe_id": 9,
                "recipe": {
                    "i1": "Ground Beef",
                    "i2": "Buns",
                    "i3": "Cheddar Cheese",
                    "i4": "Lettuce",
                    "i5": "Salt"
                }
            },
            { "invitation_id": 43, "creator_username": "host", "recipe_id": 10 }
        ],
        "participants": [
            { "invitation_id": 42, "username": "alice", "status": "accepted" },
            { "invitation_id": 42, "username": "bob", "status": "pending" },
            { "invitation_id": 42, "username": "", "status": "accepted" },
            { "invitation_id": 43, "username": "alice", "status": "accepted" }
        ],
        "creator_ingredients": [
            { "invitation_id": 42, "ingredient_index": 4 }
        ],
        "participant_ingredients": [
            { "invitation_id": 42, "username": "alice", "ingredient_index": 3, "confirmed": true },
            { "invitation_id": 42, "username": "bob", "ingredient_index": 0, "confirmed": false }
        ],
        "pantry": [
            { "username": "alice", "food_name": "cheddar" },
            { "username": "bob", "food_name": "Beef" },
            { "username": "bob", "food_name": "Hamburger Buns" }
        ]
    }))
    .expect("fixture snapshot should deserialize")
}

/// Service over the burger night snapshot with default planner settings
pub fn burger_night_service() -> Arc<PlanRecommendationService> {
    service_for(burger_night_snapshot())
}

/// Readiness data for the burger night snapshot as if loaded from disk
pub fn burger_night_data_status() -> Arc<DataStatus> {
    Arc::new(DataStatus::loaded(
        "burger-night.json",
        &burger_night_snapshot(),
    ))
}

/// Service over an arbitrary snapshot with default planner settings
pub fn service_for(snapshot: CookoutSnapshot) -> Arc<PlanRecommendationService> {
    let store: Arc<dyn CookoutStore> = Arc::new(InMemoryCookoutStore::new(snapshot));
    Arc::new(PlanRecommendationService::new(
        store,
        PlannerDefaults::default(),
    ))
}

/// Store whose participant lookup fails, standing in for a database outage
pub struct FailingParticipantStore {
    pub inner: InMemoryCookoutStore,
}

#[async_trait]
impl CookoutStore for FailingParticipantStore {
    async fn get_invitation(&self, invitation_id: i64) -> AppResult<Option<Invitation>> {
        self.inner.get_invitation(invitation_id).await
    }

    async fn creator_ingredient_indices(&self, invitation_id: i64) -> AppResult<Vec<usize>> {
        self.inner.creator_ingredient_indices(invitation_id).await
    }

    async fn confirmed_participant_indices(&self, invitation_id: i64) -> AppResult<Vec<usize>> {
        self.inner.confirmed_participant_indices(invitation_id).await
    }

    async fn list_participants(
        &self,
        _invitation_id: i64,
        _accepted_only: bool,
    ) -> AppResult<Vec<ParticipantRecord>> {
        Err(AppError::database("Database error fetching participants"))
    }

    async fn pantry_items(&self, usernames: &[String]) -> AppResult<HashMap<String, Vec<String>>> {
        self.inner.pantry_items(usernames).await
    }
}

/// Service whose store fails on participant lookup
pub fn failing_service() -> Arc<PlanRecommendationService> {
    let store: Arc<dyn CookoutStore> = Arc::new(FailingParticipantStore {
        inner: InMemoryCookoutStore::new(burger_night_snapshot()),
    });
    Arc::new(PlanRecommendationService::new(
        store,
        PlannerDefaults::default(),
    ))
}
