// ABOUTME: Energy balance estimates derived from a completed profile
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE and the daily calorie change toward a goal weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile Metrics
//!
//! The numbers the planning backend derives from a profile before optimizing,
//! computed locally so they can be shown alongside an infeasible result.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::constants::energy;
use crate::constants::fields;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityLevel, Gender, Profile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Energy balance figures for a profile, rounded to two decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetrics {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Goal weight minus current weight (kg); negative when losing
    pub weight_change_kg: f64,
    /// Days until the target date, at least 1
    pub days_to_target: i64,
    /// Daily surplus (positive) or deficit (negative) needed to reach the goal
    pub calorie_change_per_day: f64,
    /// TDEE plus the daily change
    pub target_calories: f64,
}

impl ProfileMetrics {
    /// Compute metrics for a profile that has a goal weight and target date.
    ///
    /// # Errors
    ///
    /// Returns an error if activity level, goal weight or target date are missing,
    /// or if the biometrics were never filled in
    pub fn compute(profile: &Profile, today: NaiveDate) -> AppResult<Self> {
        if profile.weight_kg <= 0.0 || profile.height_cm <= 0.0 || profile.age == 0 {
            return Err(AppError::validation(
                "Age, height and weight must be set before computing metrics",
            ));
        }
        let activity_level = profile
            .activity_level
            .ok_or_else(|| AppError::missing_field(fields::ACTIVITY_LEVEL))?;
        let goal_weight = profile
            .goal_weight_kg
            .ok_or_else(|| AppError::missing_field(fields::GOAL_WEIGHT))?;
        let target_date = profile
            .goal_target_date
            .ok_or_else(|| AppError::missing_field(fields::GOAL_TARGET_DATE))?;

        let bmr = calculate_mifflin_st_jeor(
            profile.weight_kg,
            profile.height_cm,
            profile.age,
            profile.gender,
        );
        let tdee = calculate_tdee(bmr, activity_level);
        let weight_change_kg = goal_weight - profile.weight_kg;
        let days_to_target = (target_date - today).num_days().max(1);
        let calorie_change_per_day =
            energy::KCAL_PER_KG * weight_change_kg / days_as_f64(days_to_target);

        Ok(Self {
            bmr: round2(bmr),
            tdee: round2(tdee),
            weight_change_kg: round2(weight_change_kg),
            days_to_target,
            calorie_change_per_day: round2(calorie_change_per_day),
            target_calories: round2(tdee + calorie_change_per_day),
        })
    }
}

/// Mifflin-St Jeor BMR: `10w + 6.25h - 5a + s`, `s = +5` for men and `-161` otherwise
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Option<Gender>,
) -> f64 {
    let gender_constant = match gender {
        Some(Gender::Male) => energy::BMR_MALE_OFFSET,
        Some(Gender::Female | Gender::Other) | None => energy::BMR_FEMALE_OFFSET,
    };
    energy::BMR_WEIGHT_COEFFICIENT * weight_kg + energy::BMR_HEIGHT_COEFFICIENT * height_cm
        - energy::BMR_AGE_COEFFICIENT * f64::from(age)
        + gender_constant
}

/// TDEE = BMR x activity multiplier
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    let multiplier = match activity_level {
        ActivityLevel::Sedentary => energy::SEDENTARY_MULTIPLIER,
        ActivityLevel::LightlyActive => energy::LIGHTLY_ACTIVE_MULTIPLIER,
        ActivityLevel::VeryActive => energy::VERY_ACTIVE_MULTIPLIER,
    };
    bmr * multiplier
}

// Safe: day counts are far below 2^52
#[allow(clippy::cast_precision_loss)]
fn days_as_f64(days: i64) -> f64 {
    days as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mifflin_st_jeor_offsets() {
        let male = calculate_mifflin_st_jeor(70.0, 175.0, 30, Some(Gender::Male));
        let other = calculate_mifflin_st_jeor(70.0, 175.0, 30, None);
        assert!((male - 1648.75).abs() < 1e-9);
        assert!((male - other - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_multipliers() {
        assert!((calculate_tdee(1000.0, ActivityLevel::Sedentary) - 1200.0).abs() < 1e-9);
        assert!((calculate_tdee(1000.0, ActivityLevel::VeryActive) - 1725.0).abs() < 1e-9);
    }
}
