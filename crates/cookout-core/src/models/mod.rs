// ABOUTME: Planner value types shared by the intelligence crate and the service shell
// ABOUTME: Re-exports ingredient, participant, and plan models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain value types exchanged with the cookout planner. Callers resolve all
//! persisted data into these types before planning; the planner never reaches
//! back into storage.
//!
//! ## Core Models
//!
//! - `RequiredIngredient`: one non-blank recipe ingredient slot
//! - `Participant`: an invitee's ability to contribute, with defaults resolved
//! - `CookoutPlan`: the planner output, serializable straight to JSON

mod ingredient;
mod participant;
mod plan;

pub use ingredient::{RecipeSlots, RequiredIngredient};
pub use participant::{clamp_max_items, Pantry, Participant, ParticipantStatus};
pub use plan::{
    coverage_pct, AssignedItem, CookoutPlan, IngredientSource, PlanMetrics, ShoppingItem,
    UnassignedItem,
};
