// ABOUTME: Configuration management module for the FitPlan core
// ABOUTME: Environment-only configuration for external services, the wizard, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: aggregate configuration loaded from environment variables
//! - **API providers**: plan service and image search endpoints, keys and timeouts
//! - **Wizard**: goal step variant selection

/// External service configuration (plan service, image search)
pub mod api_providers;
/// Aggregate configuration loaded from the environment
pub mod environment;
/// Wizard behaviour configuration
pub mod wizard;

pub use api_providers::{ImageSearchConfig, PlanServiceConfig};
pub use environment::FitPlanConfig;
pub use wizard::{GoalVariant, WizardConfig};
