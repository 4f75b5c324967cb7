// ABOUTME: Core data models for the FitPlan wizard
// ABOUTME: Re-exports profile, step and plan types used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Profile record, option enums and partial updates
pub mod profile;
/// Plan service response and classified plan outcome
pub mod plan;
/// Wizard step identifiers
pub mod step;

pub use plan::{DayPlan, Exercise, Meal, PlanResponse, PlanResult, WeeklyInfo};
pub use profile::{
    ActivityLevel, DietRestriction, FitnessLevel, Gender, GoalType, Profile, ProfilePatch,
    WorkoutLocation, WorkoutType,
};
pub use step::WizardStep;
