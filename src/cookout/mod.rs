// ABOUTME: Cookout plan recommendation: request constraints, data access, and orchestration
// ABOUTME: Resolves stored invitation data into planner inputs and calls the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cookout Module
//!
//! The planner in `cookout-intelligence` is pure. This module does everything
//! around it: it loads the invitation, recipe, coverage and pantries through a
//! [`CookoutStore`], applies request constraints, and hands plain values to
//! [`build_cookout_plan`](cookout_intelligence::build_cookout_plan).

/// Request constraints and per-participant overrides
pub mod constraints;
/// Plan recommendation orchestration
pub mod service;
/// Storage abstraction and in-memory implementation
pub mod store;

pub use constraints::{ParticipantOverride, PlanConstraints, ResolvedConstraints};
pub use service::{PlanRecommendation, PlanRecommendationRequest, PlanRecommendationService};
pub use store::{
    CookoutSnapshot, CookoutStore, CreatorIngredient, InMemoryCookoutStore, Invitation,
    InvitationParticipant, PantryEntry, ParticipantIngredient, ParticipantRecord,
};
