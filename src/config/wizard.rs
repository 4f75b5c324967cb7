// ABOUTME: Wizard behaviour configuration
// ABOUTME: Selects which goal-setting variant the step validator enforces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Which goal-setting form is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalVariant {
    /// Goal expressed as a duration in months
    #[default]
    Duration,
    /// Goal expressed as a target weight and a target date
    TargetDate,
}

impl FromStr for GoalVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "duration" => Ok(Self::Duration),
            "target_date" | "target-date" | "date" => Ok(Self::TargetDate),
            other => Err(AppError::config_invalid("GOAL_VARIANT", other)),
        }
    }
}

/// Wizard configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardConfig {
    /// Goal step variant
    pub goal_variant: GoalVariant,
}

impl WizardConfig {
    /// Load wizard configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if `GOAL_VARIANT` is set to an unknown value
    pub fn from_env() -> AppResult<Self> {
        let goal_variant = match env::var("GOAL_VARIANT") {
            Ok(raw) => raw.parse()?,
            Err(_) => GoalVariant::default(),
        };
        Ok(Self { goal_variant })
    }
}
