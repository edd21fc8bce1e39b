// ABOUTME: Recipe ingredient models for cookout planning
// ABOUTME: RecipeSlots flattening into RequiredIngredient values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::recipe::INGREDIENT_SLOT_COUNT;

/// A recipe ingredient that must be supplied for the cookout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequiredIngredient {
    /// Stable position among the recipe's non-blank ingredient slots
    pub index: usize,
    /// Ingredient name as written on the recipe
    pub name: String,
}

impl RequiredIngredient {
    /// Create a required ingredient
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// The fixed ingredient columns of a stored recipe
///
/// Recipes store up to ten ingredients in columns `i1`..`i9` followed by `i0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct RecipeSlots {
    #[serde(default)]
    pub i1: Option<String>,
    #[serde(default)]
    pub i2: Option<String>,
    #[serde(default)]
    pub i3: Option<String>,
    #[serde(default)]
    pub i4: Option<String>,
    #[serde(default)]
    pub i5: Option<String>,
    #[serde(default)]
    pub i6: Option<String>,
    #[serde(default)]
    pub i7: Option<String>,
    #[serde(default)]
    pub i8: Option<String>,
    #[serde(default)]
    pub i9: Option<String>,
    #[serde(default)]
    pub i0: Option<String>,
}

impl RecipeSlots {
    /// Build slots from an ordered list of names; extra names are ignored
    #[must_use]
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut slots: [Option<String>; INGREDIENT_SLOT_COUNT] = Default::default();
        for (slot, name) in slots.iter_mut().zip(names) {
            *slot = Some(name.as_ref().to_owned());
        }
        let [i1, i2, i3, i4, i5, i6, i7, i8, i9, i0] = slots;
        Self {
            i1,
            i2,
            i3,
            i4,
            i5,
            i6,
            i7,
            i8,
            i9,
            i0,
        }
    }

    /// Slots in recipe order (`i1`..`i9`, `i0`)
    #[must_use]
    pub fn ordered(&self) -> [Option<&str>; INGREDIENT_SLOT_COUNT] {
        [
            self.i1.as_deref(),
            self.i2.as_deref(),
            self.i3.as_deref(),
            self.i4.as_deref(),
            self.i5.as_deref(),
            self.i6.as_deref(),
            self.i7.as_deref(),
            self.i8.as_deref(),
            self.i9.as_deref(),
            self.i0.as_deref(),
        ]
    }

    /// Flatten the slots into required ingredients
    ///
    /// Empty and whitespace-only slots are dropped. Surviving ingredients are
    /// numbered `0..` in recipe order, so indices are dense.
    #[must_use]
    pub fn required_ingredients(&self) -> Vec<RequiredIngredient> {
        self.ordered()
            .into_iter()
            .flatten()
            .filter(|name| !name.trim().is_empty())
            .enumerate()
            .map(|(index, name)| RequiredIngredient::new(index, name))
            .collect()
    }
}
