// ABOUTME: Core types and constants for the FitPlan profile wizard
// ABOUTME: Foundation crate with error handling, profile/plan models, and validation constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitPlan` Core
//!
//! Foundation crate providing shared types and constants for the `FitPlan`
//! wizard. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Validation limits, user-facing messages and catalog tags
//! - **models**: Profile, plan response and plan result data structures

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, `DayPlan`, `PlanResult`, etc.)
pub mod models;
