// ABOUTME: Ingredient name normalization and fuzzy pantry matching
// ABOUTME: Case/whitespace folding with bidirectional substring containment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient matching
//!
//! Matching is deliberately permissive: after lower-casing and trimming, two
//! names match when they are equal or when either contains the other. Short
//! pantry entries such as "salt" therefore match "sea salt" and also
//! "unsalted butter". A false pantry match costs a quick check at home, an
//! under-match forces an unnecessary store trip.

/// Lower-case and trim an ingredient name
#[must_use]
pub fn normalize_ingredient(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether a recipe ingredient and a pantry item denote the same thing
///
/// Returns `false` when either side is blank.
#[must_use]
pub fn ingredients_match(recipe_ingredient: &str, pantry_ingredient: &str) -> bool {
    let recipe = normalize_ingredient(recipe_ingredient);
    let pantry = normalize_ingredient(pantry_ingredient);

    if recipe.is_empty() || pantry.is_empty() {
        return false;
    }

    recipe == pantry || recipe.contains(&pantry) || pantry.contains(&recipe)
}

/// First pantry item, in iteration order, that matches the recipe ingredient
///
/// The returned name is only used in explanations, but it is user-visible, so
/// callers should iterate the pantry in a stable order.
pub fn find_first_pantry_match<'a, I>(recipe_ingredient: &str, pantry: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    pantry
        .into_iter()
        .find(|item| ingredients_match(recipe_ingredient, item))
}
