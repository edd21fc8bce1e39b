// ABOUTME: Cookout planning intelligence: ingredient matching and assignment planning
// ABOUTME: Pure functions over already-resolved value types, no storage access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cookout Intelligence
//!
//! Decides who brings what to a cookout. Callers resolve the recipe, the
//! already-covered ingredients and every participant's pantry first, then
//! call [`build_cookout_plan`] once. The result is deterministic for
//! identical inputs, including pantry insertion order.

/// Ingredient name normalization and permissive pantry matching
pub mod matching;

/// Greedy hardest-first assignment of ingredients to participants
pub mod planner;

pub use matching::{find_first_pantry_match, ingredients_match, normalize_ingredient};
pub use planner::{
    build_cookout_plan, candidate_score, LOAD_PENALTY_PER_ITEM, PANTRY_MISS_PENALTY,
    PENDING_PENALTY,
};
