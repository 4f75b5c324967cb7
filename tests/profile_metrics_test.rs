// ABOUTME: Tests for energy balance metrics derived from a completed profile
// ABOUTME: Checks BMR, TDEE and daily calorie change against hand-computed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::NaiveDate;
use common::today;
use fitplan::errors::ErrorCode;
use fitplan::intelligence::ProfileMetrics;
use fitplan::models::{ActivityLevel, Gender, Profile};

fn target_profile() -> Profile {
    Profile {
        name: "Ada".into(),
        age: 25,
        gender: Some(Gender::Female),
        height_cm: 170.0,
        weight_kg: 65.5,
        activity_level: Some(ActivityLevel::LightlyActive),
        goal_weight_kg: Some(60.0),
        goal_target_date: NaiveDate::from_ymd_opt(2025, 7, 11),
        ..Profile::default()
    }
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn test_weight_loss_metrics() -> Result<()> {
    let metrics = ProfileMetrics::compute(&target_profile(), today())?;
    assert!(close(metrics.bmr, 1431.5), "bmr = {}", metrics.bmr);
    assert!(close(metrics.tdee, 1968.31), "tdee = {}", metrics.tdee);
    assert!(close(metrics.weight_change_kg, -5.5));
    assert_eq!(metrics.days_to_target, 90);
    assert!(close(metrics.calorie_change_per_day, -470.56));
    assert!(close(metrics.target_calories, 1497.76));
    Ok(())
}

#[test]
fn test_male_offset_and_gain_goal() -> Result<()> {
    let profile = Profile {
        gender: Some(Gender::Male),
        activity_level: Some(ActivityLevel::Sedentary),
        goal_weight_kg: Some(68.5),
        ..target_profile()
    };
    let metrics = ProfileMetrics::compute(&profile, today())?;
    assert!(close(metrics.bmr, 1597.5));
    assert!(close(metrics.tdee, 1917.0));
    assert!(metrics.calorie_change_per_day > 0.0);
    Ok(())
}

#[test]
fn test_past_target_date_counts_as_one_day() -> Result<()> {
    let profile = Profile {
        goal_target_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        goal_weight_kg: Some(65.0),
        ..target_profile()
    };
    let metrics = ProfileMetrics::compute(&profile, today())?;
    assert_eq!(metrics.days_to_target, 1);
    assert!(close(metrics.calorie_change_per_day, -3850.0));
    Ok(())
}

#[test]
fn test_incomplete_profiles_are_rejected() {
    let no_goal = Profile {
        goal_weight_kg: None,
        ..target_profile()
    };
    let err = ProfileMetrics::compute(&no_goal, today()).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    let err = ProfileMetrics::compute(&Profile::default(), today()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}
