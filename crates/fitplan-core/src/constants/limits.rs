// ABOUTME: Numeric bounds for profile fields enforced by the step validator
// ABOUTME: Each bound documents whether it is exclusive or inclusive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Age must be strictly below this value
pub const AGE_EXCLUSIVE_MAX: i64 = 150;

/// Height in centimetres must be strictly below this value
pub const HEIGHT_CM_EXCLUSIVE_MAX: f64 = 250.0;

/// Body weight in kilograms must be strictly below this value
pub const WEIGHT_KG_EXCLUSIVE_MAX: f64 = 200.0;

/// Free time per day may be at most this many hours (inclusive)
pub const FREE_TIME_HOURS_INCLUSIVE_MAX: f64 = 24.0;

/// Training days per week, inclusive lower bound
pub const DAYS_PER_WEEK_MIN: i64 = 1;

/// Training days per week, inclusive upper bound
pub const DAYS_PER_WEEK_MAX: i64 = 7;

/// Goal duration in months must be strictly below this value
pub const GOAL_DURATION_MONTHS_EXCLUSIVE_MAX: f64 = 6.0;

/// Goal weight in kilograms must be strictly below this value
pub const GOAL_WEIGHT_KG_EXCLUSIVE_MAX: f64 = 200.0;

/// Meal prep time in minutes, inclusive upper bound (slider maximum)
pub const MEAL_PREP_MINUTES_INCLUSIVE_MAX: i64 = 120;

/// Meals per day must be strictly below this value
pub const MEALS_PER_DAY_EXCLUSIVE_MAX: i64 = 10;
