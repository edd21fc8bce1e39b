// ABOUTME: Core types and constants for the cookout ingredient planner
// ABOUTME: Foundation crate with error handling, limits, and planner value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cookout Core
//!
//! Foundation crate providing shared types and constants for the cookout
//! planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Capacity limits, environment variable names, service names
//! - **models**: Value types consumed and produced by the planner

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Planner input and output value types
pub mod models;
