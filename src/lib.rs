// ABOUTME: Main library entry point for the cookout planner service
// ABOUTME: Wires configuration, logging, data access, and HTTP routes around the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cookout Planner
//!
//! Decides who brings which recipe ingredient to a cookout. Ingredients the
//! host or a confirmed guest already provides are skipped; the rest go to the
//! participant whose pantry stocks them, spreading load evenly and falling
//! back to a shopping list when nobody has the item or capacity runs out.
//!
//! ## Architecture
//!
//! - **`cookout-core`**: shared models, constants, and error types
//! - **`cookout-intelligence`**: ingredient matching and the pure planner
//! - **`cookout`**: request constraints, the data store seam, and orchestration
//! - **`routes`**: axum handlers over the recommendation service
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cookout_planner::intelligence::build_cookout_plan;
//! use cookout_planner::models::{Pantry, Participant, ParticipantStatus, RecipeSlots};
//! use std::collections::BTreeSet;
//!
//! let required = RecipeSlots::from_names(&["Salt", "Cheddar Cheese"]).required_ingredients();
//! let pantry: Pantry = ["Sea Salt"].into_iter().collect();
//! let alice = Participant::new("alice", ParticipantStatus::Accepted, pantry);
//!
//! let plan = build_cookout_plan(&required, &BTreeSet::new(), &[alice]);
//! println!("coverage: {}%", plan.metrics.coverage_pct);
//! ```

/// Environment-based configuration
pub mod config;

/// Plan constraints, data store, and recommendation service
pub mod cookout;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP routes
pub mod routes;

pub use cookout_core::{constants, errors, models};
pub use cookout_intelligence as intelligence;
