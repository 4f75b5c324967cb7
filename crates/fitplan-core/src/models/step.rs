// ABOUTME: Wizard step identifiers and the fields each step owns
// ABOUTME: Steps run in a fixed order: profile setup, goal setting, meal preparation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::fields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One screen's worth of related fields, validated and merged atomically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Identity and biometrics
    ProfileSetup,
    /// Goal, fitness level and workout preferences
    GoalSetting,
    /// Diet restrictions and meal preferences
    MealPreparation,
}

impl WizardStep {
    /// All steps in submission order
    pub const ALL: [Self; 3] = [Self::ProfileSetup, Self::GoalSetting, Self::MealPreparation];

    /// Step that follows this one, `None` for the final step
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::ProfileSetup => Some(Self::GoalSetting),
            Self::GoalSetting => Some(Self::MealPreparation),
            Self::MealPreparation => None,
        }
    }

    /// Whether submitting this step triggers plan generation
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::MealPreparation)
    }

    /// Wire names of the fields owned by this step
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::ProfileSetup => &[
                fields::NAME,
                fields::AGE,
                fields::GENDER,
                fields::HEIGHT,
                fields::WEIGHT,
                fields::ACTIVITY_LEVEL,
                fields::FREE_TIME,
                fields::DAYS_WEEK,
            ],
            Self::GoalSetting => &[
                fields::GOAL_TYPE,
                fields::GOAL_DURATION,
                fields::GOAL_WEIGHT,
                fields::GOAL_TARGET_DATE,
                fields::FITNESS_LEVEL,
                fields::PREFERRED_LOCATION,
                fields::PREFERRED_WORKOUT_TYPE,
            ],
            Self::MealPreparation => &[
                fields::DIET_RESTRICTIONS,
                fields::ALLERGIES,
                fields::MEAL_PREP_TIME,
                fields::MEALS_PER_DAY,
                fields::VARIETY_PREFERENCES,
            ],
        }
    }

    /// Stable identifier used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProfileSetup => "profile_setup",
            Self::GoalSetting => "goal_setting",
            Self::MealPreparation => "meal_preparation",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
