// ABOUTME: HTTP middleware shared by the cookout routes
// ABOUTME: CORS configuration derived from the server config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer construction
pub mod cors;

pub use cors::setup_cors;
