// ABOUTME: Greedy cookout ingredient allocation with pantry preference and load balancing
// ABOUTME: Produces per-participant assignments, a shopping list, and coverage metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cookout Plan Builder
//!
//! Single pass, no backtracking:
//!
//! 1. Drop ingredients that are already covered.
//! 2. Keep only eligible participants (`can_bring` and `max_items > 0`).
//! 3. Count, per uncovered ingredient, the eligible participants whose pantry
//!    matches it.
//! 4. Resolve the scarcest ingredients first (fewest pantry matches, then name).
//! 5. Give each ingredient to the lowest-scoring participant with spare
//!    capacity, see [`candidate_score`]. Ties go to the smaller username.
//! 6. Ingredients nobody can take land on the shopping list and in
//!    `unassigned_due_to_capacity`.
//!
//! Deferring the ingredients many people stock keeps them available for load
//! balancing once the hard ones are placed.

use cookout_core::constants::limits::MAX_EXPLANATION_LINES;
use cookout_core::models::{
    coverage_pct, AssignedItem, CookoutPlan, IngredientSource, Participant, ParticipantStatus,
    PlanMetrics, RequiredIngredient, ShoppingItem, UnassignedItem,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::matching::find_first_pantry_match;

// ============================================================================
// Scoring
// ============================================================================

/// Added when the candidate has no pantry match for the ingredient
pub const PANTRY_MISS_PENALTY: u32 = 1000;

/// Added per item the candidate already carries
pub const LOAD_PENALTY_PER_ITEM: u32 = 10;

/// Added when the candidate has not accepted the invitation yet
pub const PENDING_PENALTY: u32 = 3;

/// Score of a candidate for one ingredient; lower is better
///
/// A pantry miss outweighs any load difference reachable within the
/// participant capacity ceiling, and load always outweighs pending status.
#[must_use]
pub fn candidate_score(has_pantry_match: bool, assigned: u32, status: &ParticipantStatus) -> u32 {
    let pantry = if has_pantry_match {
        0
    } else {
        PANTRY_MISS_PENALTY
    };
    let pending = if status.is_pending() {
        PENDING_PENALTY
    } else {
        0
    };
    pantry + LOAD_PENALTY_PER_ITEM.saturating_mul(assigned) + pending
}

// ============================================================================
// Explanations
// ============================================================================

const NO_MATCH_ANYWHERE: &str = "No pantry match found for any participant.";
const LIKELY_SHOPPING: &str = "This item likely requires shopping.";
const PENDING_NOTE: &str = "Assigned to a pending participant (adjust if they decline).";
const UNCOVERED_BY_PANTRY: &str = "Uncovered by pantry; include on shopping list.";
const NO_CAPACITY: &str = "No participant capacity remaining for assignment.";
const ADD_TO_SHOPPING: &str = "Add this item to the shopping list.";

// ============================================================================
// Planning
// ============================================================================

/// Pantry demand for one uncovered ingredient
struct Demand<'a> {
    ingredient: &'a RequiredIngredient,
    /// Eligible usernames with a pantry match, ascending
    stocked_by: Vec<&'a str>,
}

/// Best participant found for an ingredient
struct Candidate<'a> {
    slot: usize,
    participant: &'a Participant,
    score: u32,
    matched_pantry_item: Option<&'a str>,
}

/// Sort key giving ingredient names a total, case-insensitive order
fn name_key(name: &str, index: usize) -> (String, String, usize) {
    (name.to_lowercase(), name.to_owned(), index)
}

/// Decide who brings what
///
/// `covered` holds the indices already supplied by the creator or by
/// confirmed contributions; indices that name no required ingredient are
/// ignored. Never fails: with nobody eligible every uncovered ingredient is
/// reported as unassigned.
#[must_use]
pub fn build_cookout_plan(
    required: &[RequiredIngredient],
    covered: &BTreeSet<usize>,
    participants: &[Participant],
) -> CookoutPlan {
    let total = required.len();
    let (already, uncovered): (Vec<&RequiredIngredient>, Vec<&RequiredIngredient>) = required
        .iter()
        .partition(|ingredient| covered.contains(&ingredient.index));
    let already_covered = already.len();

    let mut eligible: Vec<&Participant> = participants
        .iter()
        .filter(|participant| participant.is_eligible())
        .collect();
    eligible.sort_by(|a, b| a.username.cmp(&b.username));

    let mut loads = vec![0_u32; eligible.len()];
    let mut assignments_by_user: BTreeMap<String, Vec<AssignedItem>> = eligible
        .iter()
        .map(|participant| (participant.username.clone(), Vec::new()))
        .collect();

    let mut demands: Vec<Demand<'_>> = uncovered
        .into_iter()
        .map(|ingredient| Demand {
            ingredient,
            stocked_by: eligible
                .iter()
                .filter(|p| find_first_pantry_match(&ingredient.name, p.pantry.iter()).is_some())
                .map(|p| p.username.as_str())
                .collect(),
        })
        .collect();
    demands.sort_by_cached_key(|demand| {
        (
            demand.stocked_by.len(),
            name_key(&demand.ingredient.name, demand.ingredient.index),
        )
    });

    let mut shopping_list = Vec::new();
    let mut unassigned_due_to_capacity = Vec::new();

    for demand in &demands {
        let ingredient = demand.ingredient;

        let best = eligible
            .iter()
            .enumerate()
            .filter(|(slot, participant)| loads[*slot] < participant.max_items)
            .map(|(slot, participant)| {
                let matched_pantry_item =
                    find_first_pantry_match(&ingredient.name, participant.pantry.iter());
                Candidate {
                    slot,
                    participant: *participant,
                    score: candidate_score(
                        matched_pantry_item.is_some(),
                        loads[slot],
                        &participant.status,
                    ),
                    matched_pantry_item,
                }
            })
            .min_by(|a, b| {
                a.score
                    .cmp(&b.score)
                    .then_with(|| a.participant.username.cmp(&b.participant.username))
            });

        let Some(best) = best else {
            shopping_list.push(ShoppingItem {
                ingredient_index: ingredient.index,
                ingredient_name: ingredient.name.clone(),
                explanation: vec![NO_CAPACITY.to_owned(), ADD_TO_SHOPPING.to_owned()],
            });
            unassigned_due_to_capacity.push(UnassignedItem {
                ingredient_index: ingredient.index,
                ingredient_name: ingredient.name.clone(),
            });
            continue;
        };

        loads[best.slot] += 1;
        let username = best.participant.username.as_str();
        let mut explanation = Vec::with_capacity(MAX_EXPLANATION_LINES);

        let source = if let Some(pantry_item) = best.matched_pantry_item {
            explanation.push(format!("Matched in pantry: {pantry_item}"));
            IngredientSource::Pantry
        } else {
            if demand.stocked_by.is_empty() {
                explanation.push(NO_MATCH_ANYWHERE.to_owned());
            } else {
                explanation.push(format!(
                    "No pantry match for {username}; others match: {}",
                    demand.stocked_by.join(", ")
                ));
            }
            explanation.push(LIKELY_SHOPPING.to_owned());
            // The assignee stays responsible for the item but has to buy it,
            // so it is both assigned and on the shopping list.
            shopping_list.push(ShoppingItem {
                ingredient_index: ingredient.index,
                ingredient_name: ingredient.name.clone(),
                explanation: vec![UNCOVERED_BY_PANTRY.to_owned()],
            });
            IngredientSource::Shopping
        };

        if best.participant.status.is_pending() {
            explanation.push(PENDING_NOTE.to_owned());
        }
        explanation.push(format!(
            "Load balancing: {username} now has {} assigned item(s).",
            loads[best.slot]
        ));
        explanation.truncate(MAX_EXPLANATION_LINES);

        if let Some(items) = assignments_by_user.get_mut(username) {
            items.push(AssignedItem {
                ingredient_index: ingredient.index,
                ingredient_name: ingredient.name.clone(),
                source,
                explanation,
            });
        }
    }

    for items in assignments_by_user.values_mut() {
        items.sort_by_cached_key(|item| name_key(&item.ingredient_name, item.ingredient_index));
    }
    shopping_list.sort_by_cached_key(|item| name_key(&item.ingredient_name, item.ingredient_index));

    let assigned_from_pantry = assignments_by_user
        .values()
        .flatten()
        .filter(|item| item.source == IngredientSource::Pantry)
        .count();

    let metrics = PlanMetrics {
        total,
        already_covered,
        assigned_from_pantry,
        assigned_to_shopping: shopping_list.len(),
        coverage_pct: coverage_pct(already_covered + assigned_from_pantry, total),
    };

    debug!(
        total = metrics.total,
        already_covered = metrics.already_covered,
        assigned_from_pantry = metrics.assigned_from_pantry,
        shopping = metrics.assigned_to_shopping,
        unassigned = unassigned_due_to_capacity.len(),
        eligible = eligible.len(),
        coverage_pct = metrics.coverage_pct,
        "Built cookout plan"
    );

    CookoutPlan {
        assignments_by_user,
        shopping_list,
        metrics,
        unassigned_due_to_capacity,
    }
}
