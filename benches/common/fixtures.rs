// ABOUTME: Deterministic cookout data generators for planner benchmarks
// ABOUTME: Builds ingredient lists and participants with overlapping pantries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cookout_planner::models::{Pantry, Participant, ParticipantStatus, RequiredIngredient};

const FOODS: &[&str] = &[
    "Ground Beef",
    "Hamburger Buns",
    "Cheddar Cheese",
    "Lettuce",
    "Tomato",
    "Red Onion",
    "Ketchup",
    "Mustard",
    "Pickles",
    "Sea Salt",
    "Black Pepper",
    "Corn",
    "Butter",
    "Charcoal",
    "Lemonade",
    "Ice",
];

/// Required ingredients cycling through a fixed food list
pub fn generate_ingredients(count: usize) -> Vec<RequiredIngredient> {
    (0..count)
        .map(|index| {
            let food = FOODS[index % FOODS.len()];
            let name = if index < FOODS.len() {
                food.to_owned()
            } else {
                format!("{food} {}", index / FOODS.len())
            };
            RequiredIngredient::new(index, name)
        })
        .collect()
}

/// Participants whose pantries each hold a rotating slice of the food list
pub fn generate_participants(count: usize) -> Vec<Participant> {
    (0..count)
        .map(|index| {
            let pantry: Pantry = (0..4)
                .map(|offset| FOODS[(index * 3 + offset) % FOODS.len()].to_lowercase())
                .collect();
            let status = if index % 3 == 0 {
                ParticipantStatus::Pending
            } else {
                ParticipantStatus::Accepted
            };
            Participant::new(format!("guest_{index:03}"), status, pantry).with_max_items(3)
        })
        .collect()
}
