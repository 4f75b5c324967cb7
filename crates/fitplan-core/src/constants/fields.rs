// ABOUTME: Wire names of profile fields as submitted by the forms and sent to the plan service
// ABOUTME: Shared by validation error maps, candidate value lookup and profile serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Profile setup
/// Display name
pub const NAME: &str = "name";
/// Age in years
pub const AGE: &str = "age";
/// Gender
pub const GENDER: &str = "gender";
/// Height in centimetres
pub const HEIGHT: &str = "height";
/// Weight in kilograms
pub const WEIGHT: &str = "weight";
/// Activity level
pub const ACTIVITY_LEVEL: &str = "activityLevel";
/// Free time per day in hours
pub const FREE_TIME: &str = "freeTime";
/// Training days per week
pub const DAYS_WEEK: &str = "daysWeek";

// Goal setting
/// Goal type
pub const GOAL_TYPE: &str = "goalType";
/// Goal duration in months
pub const GOAL_DURATION: &str = "goalDuration";
/// Goal weight in kilograms
pub const GOAL_WEIGHT: &str = "goalWeight";
/// Goal target date
pub const GOAL_TARGET_DATE: &str = "goalTargetDate";
/// Fitness level
pub const FITNESS_LEVEL: &str = "fitnessLevel";
/// Preferred workout location
pub const PREFERRED_LOCATION: &str = "preferredLocation";
/// Preferred workout type
pub const PREFERRED_WORKOUT_TYPE: &str = "preferredWorkoutType";

// Meal preparation
/// Dietary restrictions
pub const DIET_RESTRICTIONS: &str = "dietRestrictions";
/// Allergies
pub const ALLERGIES: &str = "allergies";
/// Meal prep time in minutes
pub const MEAL_PREP_TIME: &str = "mealPrepTime";
/// Meals per day
pub const MEALS_PER_DAY: &str = "mealsPerDay";
/// Cuisine variety preferences
pub const VARIETY_PREFERENCES: &str = "varietyPreferences";
