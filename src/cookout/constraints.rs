// ABOUTME: Plan request constraints and per-participant overrides
// ABOUTME: Resolves defaults and clamping once so participants reach the planner fully specified
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cookout_core::constants::limits::MAX_ITEMS_PER_PERSON_CEILING;
use cookout_core::models::{clamp_max_items, Pantry, Participant};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::store::ParticipantRecord;
use crate::config::PlannerDefaults;

/// Optional constraints sent with a plan request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConstraints {
    /// Whether pending invitees may receive assignments at all
    #[serde(default)]
    pub include_pending_participants: Option<bool>,
    /// Default capacity per participant, clamped to `[0, 20]`
    #[serde(default)]
    pub max_items_per_person: Option<i64>,
    /// Overrides keyed by username
    #[serde(default)]
    pub participant_overrides: HashMap<String, ParticipantOverride>,
}

/// Per-participant override
///
/// Only `can_bring` and `max_items` influence planning today. The other
/// fields are accepted so clients can already send them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantOverride {
    /// Whether this participant can bring anything
    #[serde(default)]
    pub can_bring: Option<bool>,
    /// Capacity for this participant, clamped to `[0, 50]`
    #[serde(default)]
    pub max_items: Option<i64>,
    /// Allergens to avoid (not used by the planner)
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Spending limit in cents (not used by the planner)
    #[serde(default)]
    pub budget_cents: Option<i64>,
    /// Extra cost of a store trip (not used by the planner)
    #[serde(default)]
    pub travel_penalty: Option<f64>,
}

/// Constraints with every default applied
#[derive(Debug, Clone)]
pub struct ResolvedConstraints {
    /// Whether pending invitees are loaded at all
    pub include_pending_participants: bool,
    /// Default capacity for participants without a `max_items` override
    pub max_items_per_person: u32,
    overrides: HashMap<String, ParticipantOverride>,
}

impl PlanConstraints {
    /// Apply server defaults and clamp the request-level capacity
    #[must_use]
    pub fn resolve(self, defaults: &PlannerDefaults) -> ResolvedConstraints {
        ResolvedConstraints {
            include_pending_participants: self
                .include_pending_participants
                .unwrap_or(defaults.include_pending_participants),
            max_items_per_person: self.max_items_per_person.map_or(
                defaults.max_items_per_person,
                |value| clamp_max_items(value, MAX_ITEMS_PER_PERSON_CEILING),
            ),
            overrides: self.participant_overrides,
        }
    }
}

impl ResolvedConstraints {
    /// Override registered for a username, if any
    #[must_use]
    pub fn override_for(&self, username: &str) -> Option<&ParticipantOverride> {
        self.overrides.get(username)
    }

    /// Build a planner participant from a stored record and its pantry
    #[must_use]
    pub fn participant(&self, record: &ParticipantRecord, pantry: Pantry) -> Participant {
        let overrides = self.override_for(&record.username);
        let can_bring = overrides.and_then(|o| o.can_bring).unwrap_or(true);
        let max_items = overrides
            .and_then(|o| o.max_items)
            .unwrap_or_else(|| i64::from(self.max_items_per_person));

        Participant::new(record.username.clone(), record.status(), pantry)
            .with_can_bring(can_bring)
            .with_max_items(max_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookout_core::models::ParticipantStatus;

    fn record(username: &str, status: Option<&str>) -> ParticipantRecord {
        ParticipantRecord {
            username: username.to_owned(),
            status: status.map(str::to_owned),
        }
    }

    #[test]
    fn test_defaults_when_constraints_absent() {
        let resolved = PlanConstraints::default().resolve(&PlannerDefaults::default());
        assert!(resolved.include_pending_participants);
        assert_eq!(resolved.max_items_per_person, 3);

        let participant = resolved.participant(&record("alice", None), Pantry::new());
        assert!(participant.can_bring);
        assert_eq!(participant.max_items, 3);
        assert_eq!(participant.status, ParticipantStatus::Pending);
    }

    #[test]
    fn test_request_capacity_clamped_to_twenty() {
        let constraints: PlanConstraints =
            serde_json::from_value(serde_json::json!({ "max_items_per_person": 99 })).unwrap();
        let resolved = constraints.resolve(&PlannerDefaults::default());
        assert_eq!(resolved.max_items_per_person, 20);

        let constraints: PlanConstraints =
            serde_json::from_value(serde_json::json!({ "max_items_per_person": -1 })).unwrap();
        assert_eq!(
            constraints
                .resolve(&PlannerDefaults::default())
                .max_items_per_person,
            0
        );
    }

    #[test]
    fn test_override_capacity_clamped_to_fifty() {
        let constraints: PlanConstraints = serde_json::from_value(serde_json::json!({
            "max_items_per_person": 2,
            "participant_overrides": {
                "bob": { "max_items": 80, "allergens": ["peanuts"], "budget_cents": 1500 },
                "carol": { "can_bring": false }
            }
        }))
        .unwrap();
        let resolved = constraints.resolve(&PlannerDefaults::default());

        let bob = resolved.participant(&record("bob", Some("accepted")), Pantry::new());
        assert_eq!(bob.max_items, 50);
        assert!(bob.can_bring);

        let carol = resolved.participant(&record("carol", Some("accepted")), Pantry::new());
        assert!(!carol.can_bring);
        assert_eq!(carol.max_items, 2);
        assert!(!carol.is_eligible());

        assert_eq!(
            resolved.override_for("bob").map(|o| o.allergens.clone()),
            Some(vec!["peanuts".to_owned()])
        );
    }
}
