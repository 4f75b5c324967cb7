// ABOUTME: Main library entry point for the FitPlan core
// ABOUTME: Profile wizard with step validation, plan classification and cached image resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitPlan Core
//!
//! The headless core of a fitness and diet planning wizard. A user's profile is
//! collected across three dependent forms, validated step by step, sent to an
//! external plan optimizer, and the returned week is classified for display.
//! Recipe and exercise names from the plan are resolved to pictures through a
//! session cache that coalesces duplicate lookups.
//!
//! ## Architecture
//!
//! - **Validation**: pure per-step rule engine producing field errors and a typed patch
//! - **Profile store**: the single profile accumulated across steps
//! - **Wizard**: state machine that validates, merges and requests the plan
//! - **Plan**: classification of plan service responses
//! - **Cache / Images**: query cache and cancellable batch image resolution
//! - **External**: HTTP clients for the plan service and image search
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan::config::FitPlanConfig;
//! use fitplan::errors::AppResult;
//! use fitplan::models::WizardStep;
//! use fitplan::wizard::{StepOutcome, WizardController};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     fitplan::logging::init_from_env()?;
//!     let config = FitPlanConfig::from_env()?;
//!     let wizard = WizardController::from_config(&config);
//!
//!     let values = json!({"name": "Ada", "age": 36, "gender": "female", "height": 170,
//!         "weight": 62, "activityLevel": "lightly_active", "freeTime": 1.5, "daysWeek": 3});
//!     if let Some(values) = values.as_object() {
//!         let outcome = wizard.submit_step(WizardStep::ProfileSetup, values).await?;
//!         if let StepOutcome::Invalid(result) = outcome {
//!             println!("Fix: {:?}", result.invalid_fields());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub use fitplan_core::{constants, errors, models};

/// Query cache with in-flight coalescing
pub mod cache;
/// Environment configuration
pub mod config;
/// External service clients
pub mod external;
/// Batch image resolution
pub mod images;
/// Metrics derived from the profile
pub mod intelligence;
/// Structured logging setup
pub mod logging;
/// Plan response classification
pub mod plan;
/// Session profile store
pub mod profile_store;
/// Shared helpers
pub mod utils;
/// Per-step validation rules
pub mod validation;
/// Wizard state machine
pub mod wizard;
