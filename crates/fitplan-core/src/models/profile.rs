// ABOUTME: Profile record accumulated across wizard steps and its partial update type
// ABOUTME: Option enums for select fields with lenient tag parsing of UI labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::catalog::normalize_tag;
use crate::constants::fields;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Declares a select-field enum with its wire tags.
///
/// Tags are matched after [`normalize_tag`], so UI labels such as
/// `"Lightly Active"` resolve to the same variant as `"lightly_active"`.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $tag)] $variant ),+
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire tag of this variant
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag),+
                }
            }

            /// Parse a tag or UI label, `None` when it is not part of the catalog
            #[must_use]
            pub fn from_tag(raw: &str) -> Option<Self> {
                let tag = normalize_tag(raw);
                Self::ALL.iter().copied().find(|v| v.as_str() == tag)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_enum! {
    /// Gender used for BMR estimation
    pub enum Gender {
        /// Male
        Male => "male",
        /// Female
        Female => "female",
        /// Other or undisclosed
        Other => "other",
    }
}

option_enum! {
    /// Day-to-day activity level outside planned workouts
    pub enum ActivityLevel {
        /// Little or no exercise
        Sedentary => "sedentary",
        /// Light exercise a few days a week
        LightlyActive => "lightly_active",
        /// Hard exercise most days
        VeryActive => "very_active",
    }
}

option_enum! {
    /// What the plan should optimize for
    pub enum GoalType {
        /// Caloric deficit
        WeightLoss => "weight_loss",
        /// Caloric surplus
        WeightGain => "weight_gain",
        /// Endurance performance
        Endurance => "endurance",
    }
}

option_enum! {
    /// Self-reported fitness level
    pub enum FitnessLevel {
        /// New to training
        Beginner => "beginner",
        /// Trains regularly
        Intermediate => "intermediate",
        /// Experienced athlete
        Advanced => "advanced",
    }
}

option_enum! {
    /// Preferred workout location
    pub enum WorkoutLocation {
        /// At home
        Home => "home",
        /// Gym
        Gym => "gym",
        /// Outdoor fitness corner
        FitnessCorner => "fitness_corner",
        /// Sports centre
        SportsCentre => "sports_centre",
        /// Other sports facilities
        SportsFacilities => "sports_facilities",
        /// No preference
        NoPreference => "none",
    }
}

option_enum! {
    /// Preferred workout type
    pub enum WorkoutType {
        /// Push-ups and general bodyweight work
        Pushups => "pushups",
        /// Cardio
        Cardio => "cardio",
        /// Outdoor and water sports
        OutdoorWater => "outdoor_water",
        /// Gym workouts
        GymWorkouts => "gym_workouts",
        /// No preference
        NoPreference => "none",
    }
}

option_enum! {
    /// Dietary restriction tag
    pub enum DietRestriction {
        /// No restriction
        NoRestriction => "none",
        /// Ketogenic
        Keto => "keto",
        /// Mediterranean
        Mediterranean => "mediterranean",
        /// DASH diet
        Dash => "dash",
        /// Vegan
        Vegan => "vegan",
        /// Paleo
        Paleo => "paleo",
    }
}

/// Single mutable record accumulated across the wizard steps.
///
/// Serializes with the wire names the planning service expects
/// (`height`, `daysWeek`, `mealPrepTime`, ...). `Default` is the all-zero
/// state a new session starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    // Profile setup
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimetres
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Activity level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Free time per day in hours
    #[serde(rename = "freeTime")]
    pub free_time_hours_per_day: f64,
    /// Training days per week
    #[serde(rename = "daysWeek")]
    pub days_per_week: u32,

    // Goal setting
    /// Goal type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalType>,
    /// Goal duration in months (duration variant)
    #[serde(rename = "goalDuration", skip_serializing_if = "Option::is_none")]
    pub goal_duration_months: Option<f64>,
    /// Goal weight in kilograms (target-date variant)
    #[serde(rename = "goalWeight", skip_serializing_if = "Option::is_none")]
    pub goal_weight_kg: Option<f64>,
    /// Goal target date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_target_date: Option<NaiveDate>,
    /// Fitness level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_level: Option<FitnessLevel>,
    /// Preferred workout location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_location: Option<WorkoutLocation>,
    /// Preferred workout type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_workout_type: Option<WorkoutType>,

    // Meal preparation
    /// Dietary restrictions
    pub diet_restrictions: BTreeSet<DietRestriction>,
    /// Free-text allergies, deduplicated, in entry order
    pub allergies: Vec<String>,
    /// Meal prep time in minutes
    #[serde(rename = "mealPrepTime")]
    pub meal_prep_time_minutes: u32,
    /// Meals per day
    pub meals_per_day: u32,
    /// Cuisine tags
    pub variety_preferences: BTreeSet<String>,
}

/// Partial profile update produced by one validated step.
///
/// `None` means "key not present": the stored value is left untouched.
/// Collections are replaced wholesale when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    /// Display name
    pub name: Option<String>,
    /// Age in years
    pub age: Option<u32>,
    /// Gender
    pub gender: Option<Gender>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Activity level
    pub activity_level: Option<ActivityLevel>,
    /// Free time per day in hours
    pub free_time_hours_per_day: Option<f64>,
    /// Training days per week
    pub days_per_week: Option<u32>,
    /// Goal type
    pub goal_type: Option<GoalType>,
    /// Goal duration in months
    pub goal_duration_months: Option<f64>,
    /// Goal weight in kilograms
    pub goal_weight_kg: Option<f64>,
    /// Goal target date
    pub goal_target_date: Option<NaiveDate>,
    /// Fitness level
    pub fitness_level: Option<FitnessLevel>,
    /// Preferred workout location
    pub preferred_location: Option<WorkoutLocation>,
    /// Preferred workout type
    pub preferred_workout_type: Option<WorkoutType>,
    /// Dietary restrictions
    pub diet_restrictions: Option<BTreeSet<DietRestriction>>,
    /// Allergies
    pub allergies: Option<Vec<String>>,
    /// Meal prep time in minutes
    pub meal_prep_time_minutes: Option<u32>,
    /// Meals per day
    pub meals_per_day: Option<u32>,
    /// Cuisine tags
    pub variety_preferences: Option<BTreeSet<String>>,
}

impl ProfilePatch {
    /// Wire names of the keys present in this patch
    #[must_use]
    pub fn present_fields(&self) -> Vec<&'static str> {
        let flags = [
            (fields::NAME, self.name.is_some()),
            (fields::AGE, self.age.is_some()),
            (fields::GENDER, self.gender.is_some()),
            (fields::HEIGHT, self.height_cm.is_some()),
            (fields::WEIGHT, self.weight_kg.is_some()),
            (fields::ACTIVITY_LEVEL, self.activity_level.is_some()),
            (fields::FREE_TIME, self.free_time_hours_per_day.is_some()),
            (fields::DAYS_WEEK, self.days_per_week.is_some()),
            (fields::GOAL_TYPE, self.goal_type.is_some()),
            (fields::GOAL_DURATION, self.goal_duration_months.is_some()),
            (fields::GOAL_WEIGHT, self.goal_weight_kg.is_some()),
            (fields::GOAL_TARGET_DATE, self.goal_target_date.is_some()),
            (fields::FITNESS_LEVEL, self.fitness_level.is_some()),
            (fields::PREFERRED_LOCATION, self.preferred_location.is_some()),
            (
                fields::PREFERRED_WORKOUT_TYPE,
                self.preferred_workout_type.is_some(),
            ),
            (fields::DIET_RESTRICTIONS, self.diet_restrictions.is_some()),
            (fields::ALLERGIES, self.allergies.is_some()),
            (fields::MEAL_PREP_TIME, self.meal_prep_time_minutes.is_some()),
            (fields::MEALS_PER_DAY, self.meals_per_day.is_some()),
            (
                fields::VARIETY_PREFERENCES,
                self.variety_preferences.is_some(),
            ),
        ];
        flags
            .into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect()
    }

    /// Whether the patch carries no keys at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }
}

impl Profile {
    /// Shallow field-level overwrite: only keys present in `patch` replace stored values
    pub fn apply(&mut self, patch: ProfilePatch) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }
        fn set_opt<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        set(&mut self.name, patch.name);
        set(&mut self.age, patch.age);
        set_opt(&mut self.gender, patch.gender);
        set(&mut self.height_cm, patch.height_cm);
        set(&mut self.weight_kg, patch.weight_kg);
        set_opt(&mut self.activity_level, patch.activity_level);
        set(
            &mut self.free_time_hours_per_day,
            patch.free_time_hours_per_day,
        );
        set(&mut self.days_per_week, patch.days_per_week);

        set_opt(&mut self.goal_type, patch.goal_type);
        set_opt(&mut self.goal_duration_months, patch.goal_duration_months);
        set_opt(&mut self.goal_weight_kg, patch.goal_weight_kg);
        set_opt(&mut self.goal_target_date, patch.goal_target_date);
        set_opt(&mut self.fitness_level, patch.fitness_level);
        set_opt(&mut self.preferred_location, patch.preferred_location);
        set_opt(
            &mut self.preferred_workout_type,
            patch.preferred_workout_type,
        );

        set(&mut self.diet_restrictions, patch.diet_restrictions);
        set(&mut self.allergies, patch.allergies);
        set(
            &mut self.meal_prep_time_minutes,
            patch.meal_prep_time_minutes,
        );
        set(&mut self.meals_per_day, patch.meals_per_day);
        set(&mut self.variety_preferences, patch.variety_preferences);
    }
}
