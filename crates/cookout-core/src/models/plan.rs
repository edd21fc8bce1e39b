// ABOUTME: Cookout plan output models returned by the planner
// ABOUTME: Assignments, shopping list, coverage metrics, and capacity shortfalls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where an assigned participant is expected to get an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientSource {
    /// Participant already stocks a matching item
    Pantry,
    /// Participant has to buy it
    Shopping,
}

/// An ingredient a participant is responsible for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedItem {
    /// Index of the required ingredient
    pub ingredient_index: usize,
    /// Name of the required ingredient
    pub ingredient_name: String,
    /// Pantry or shopping
    pub source: IngredientSource,
    /// Human-readable reasons, most informative first
    pub explanation: Vec<String>,
}

/// An ingredient that has to be purchased
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Index of the required ingredient
    pub ingredient_index: usize,
    /// Name of the required ingredient
    pub ingredient_name: String,
    /// Human-readable reasons
    pub explanation: Vec<String>,
}

/// An ingredient nobody had capacity left to take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedItem {
    /// Index of the required ingredient
    pub ingredient_index: usize,
    /// Name of the required ingredient
    pub ingredient_name: String,
}

/// Coverage counters for a plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMetrics {
    /// Number of required ingredients
    pub total: usize,
    /// Ingredients already supplied before planning
    pub already_covered: usize,
    /// Assignments backed by the assignee's pantry
    pub assigned_from_pantry: usize,
    /// Length of the shopping list
    pub assigned_to_shopping: usize,
    /// Rounded percentage of covered plus pantry-backed ingredients
    pub coverage_pct: u32,
}

/// Planner output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookoutPlan {
    /// Assignments per eligible participant, each sorted by ingredient name
    pub assignments_by_user: BTreeMap<String, Vec<AssignedItem>>,
    /// Ingredients to purchase, sorted by ingredient name
    pub shopping_list: Vec<ShoppingItem>,
    /// Coverage counters
    pub metrics: PlanMetrics,
    /// Ingredients left without an assignee, in resolution order
    pub unassigned_due_to_capacity: Vec<UnassignedItem>,
}

impl CookoutPlan {
    /// Assignments for one participant, empty when absent
    #[must_use]
    pub fn assignments_for(&self, username: &str) -> &[AssignedItem] {
        self.assignments_by_user
            .get(username)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether an ingredient index appears on the shopping list
    #[must_use]
    pub fn is_on_shopping_list(&self, ingredient_index: usize) -> bool {
        self.shopping_list
            .iter()
            .any(|item| item.ingredient_index == ingredient_index)
    }
}

/// Rounded coverage percentage, `100` when there is nothing to cover
///
/// Rounds half up, e.g. 1 of 8 is 12.5% which reports as 13.
#[must_use]
pub fn coverage_pct(covered: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let pct = (covered * 200 + total) / (total * 2);
    u32::try_from(pct).unwrap_or(100)
}
