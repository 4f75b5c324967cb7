// ABOUTME: User-facing validation messages shown next to invalid form fields
// ABOUTME: Messages with a tag placeholder are built by the helper functions at the bottom
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs)]

// Profile setup
pub const NAME_REQUIRED: &str = "Name is required";
pub const AGE_REQUIRED: &str = "Age is required";
pub const AGE_NOT_A_NUMBER: &str = "Age must be a number";
pub const AGE_NOT_WHOLE: &str = "Age must be a whole number";
pub const AGE_TOO_LOW: &str = "Age must be greater than 0";
pub const AGE_TOO_HIGH: &str = "Age must be less than 150";
pub const GENDER_REQUIRED: &str = "Please select a gender";
pub const GENDER_UNKNOWN: &str = "Gender must be male, female or other";
pub const HEIGHT_REQUIRED: &str = "Height is required";
pub const HEIGHT_NOT_A_NUMBER: &str = "Height must be a number";
pub const HEIGHT_TOO_LOW: &str = "Height must be greater than 0";
pub const HEIGHT_TOO_HIGH: &str = "Height must be less than 250 cm";
pub const WEIGHT_REQUIRED: &str = "Weight is required";
pub const WEIGHT_NOT_A_NUMBER: &str = "Weight must be a number";
pub const WEIGHT_TOO_LOW: &str = "Weight must be greater than 0";
pub const WEIGHT_TOO_HIGH: &str = "Weight must be less than 200 kg";
pub const ACTIVITY_LEVEL_REQUIRED: &str = "Please select an activity level";
pub const ACTIVITY_LEVEL_UNKNOWN: &str = "Unknown activity level";
pub const FREE_TIME_REQUIRED: &str = "Free time is required";
pub const FREE_TIME_NOT_A_NUMBER: &str = "Free time must be a number";
pub const FREE_TIME_TOO_LOW: &str = "Free time must be greater than 0";
pub const FREE_TIME_TOO_HIGH: &str = "Free time cannot exceed 24 hours per day";
pub const DAYS_WEEK_REQUIRED: &str = "Days per week is required";
pub const DAYS_WEEK_NOT_A_NUMBER: &str = "Days per week must be a number";
pub const DAYS_WEEK_NOT_WHOLE: &str = "Days per week must be a whole number";
pub const DAYS_WEEK_TOO_LOW: &str = "Days per week must be at least 1";
pub const DAYS_WEEK_TOO_HIGH: &str = "Days per week must be at most 7";

// Goal setting
pub const GOAL_TYPE_REQUIRED: &str = "Please select a goal type";
pub const GOAL_TYPE_UNKNOWN: &str = "Unknown goal type";
pub const GOAL_DURATION_REQUIRED: &str = "Goal duration is required";
pub const GOAL_DURATION_NOT_A_NUMBER: &str = "Goal duration must be a number";
pub const GOAL_DURATION_TOO_LOW: &str = "Goal duration must be greater than 0";
pub const GOAL_DURATION_TOO_HIGH: &str = "Goal duration should be less than 6 months";
pub const GOAL_WEIGHT_REQUIRED: &str = "Goal weight is required";
pub const GOAL_WEIGHT_NOT_A_NUMBER: &str = "Goal weight must be a number";
pub const GOAL_WEIGHT_TOO_LOW: &str = "Goal weight must be greater than 0";
pub const GOAL_WEIGHT_TOO_HIGH: &str = "Goal weight must be less than 200 kg";
pub const GOAL_TARGET_DATE_REQUIRED: &str = "Goal target date is required";
pub const GOAL_TARGET_DATE_INVALID: &str = "Goal target date must be a valid date";
pub const GOAL_TARGET_DATE_PAST: &str = "Goal target date cannot be in the past";
pub const FITNESS_LEVEL_REQUIRED: &str = "Please select a fitness level";
pub const FITNESS_LEVEL_UNKNOWN: &str = "Unknown fitness level";
pub const LOCATION_REQUIRED: &str = "Please select a preferred location";
pub const LOCATION_UNKNOWN: &str = "Unknown location";
pub const WORKOUT_TYPE_REQUIRED: &str = "Please select a preferred workout type";
pub const WORKOUT_TYPE_UNKNOWN: &str = "Unknown workout type";

// Meal preparation
pub const DIET_REQUIRED: &str = "Please select at least one dietary restriction";
pub const MEAL_PREP_NOT_A_NUMBER: &str = "Meal prep time must be a number";
pub const MEAL_PREP_NOT_WHOLE: &str = "Meal prep time must be a whole number";
pub const MEAL_PREP_TOO_LOW: &str = "Meal prep time must be greater than 0";
pub const MEAL_PREP_TOO_HIGH: &str = "Meal prep time must be at most 120 minutes";
pub const MEALS_NOT_A_NUMBER: &str = "Meals per day must be a number";
pub const MEALS_NOT_WHOLE: &str = "Meals per day must be a whole number";
pub const MEALS_TOO_LOW: &str = "Meals per day must be greater than 0";
pub const MEALS_TOO_HIGH: &str = "Meals per day must be less than 10";
pub const TAGS_NOT_A_LIST: &str = "Expected a list of options";
pub const ALLERGIES_INVALID: &str = "Allergies must be a list or comma-separated text";

/// Message for a dietary restriction tag outside the catalog
#[must_use]
pub fn unknown_diet(tag: &str) -> String {
    format!("Unknown dietary restriction: {tag}")
}

/// Message for a cuisine tag outside the catalog
#[must_use]
pub fn unknown_cuisine(tag: &str) -> String {
    format!("Unknown cuisine: {tag}")
}
