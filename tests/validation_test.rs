// ABOUTME: Integration tests for the per-step validation rules
// ABOUTME: Covers boundary operators, message selection, error collection and goal variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{goal_setting_values, meal_preparation_values, profile_setup_values, today, values};
use fitplan::config::GoalVariant;
use fitplan::constants::messages;
use fitplan::models::{DietRestriction, WizardStep};
use fitplan::validation::{CandidateValues, StepValidator, ValidationResult};
use serde_json::{json, Value};

fn with(mut base: CandidateValues, key: &str, value: Value) -> CandidateValues {
    base.insert(key.to_owned(), value);
    base
}

fn without(mut base: CandidateValues, key: &str) -> CandidateValues {
    base.remove(key);
    base
}

fn validate(step: WizardStep, values: &CandidateValues) -> ValidationResult {
    StepValidator::default().validate(step, values, today())
}

#[test]
fn test_valid_profile_setup_produces_patch() -> Result<()> {
    let result = validate(WizardStep::ProfileSetup, &profile_setup_values());
    assert!(result.is_valid);
    assert!(result.invalid_fields().is_empty());
    assert_eq!(result.errors.len(), WizardStep::ProfileSetup.fields().len());
    assert!(result.errors.values().all(String::is_empty));

    let patch = result.into_patch().expect("valid step has a patch");
    assert_eq!(patch.name.as_deref(), Some("Ada"));
    assert_eq!(patch.age, Some(25));
    assert_eq!(patch.days_per_week, Some(3));
    assert_eq!(
        patch.present_fields(),
        WizardStep::ProfileSetup.fields().to_vec()
    );
    Ok(())
}

#[test]
fn test_age_exclusive_maximum() {
    let at_max = validate(
        WizardStep::ProfileSetup,
        &with(profile_setup_values(), "age", json!(150)),
    );
    assert!(!at_max.is_valid);
    assert_eq!(at_max.error_for("age"), messages::AGE_TOO_HIGH);
    assert!(at_max.patch().is_none());

    let below_max = validate(
        WizardStep::ProfileSetup,
        &with(profile_setup_values(), "age", json!(149)),
    );
    assert!(below_max.is_valid);
    assert_eq!(below_max.error_for("age"), "");
}

#[test]
fn test_numeric_check_order() {
    let cases = [
        (json!(null), messages::AGE_REQUIRED),
        (json!(""), messages::AGE_REQUIRED),
        (json!("twenty"), messages::AGE_NOT_A_NUMBER),
        (json!(25.5), messages::AGE_NOT_WHOLE),
        (json!(0), messages::AGE_TOO_LOW),
        (json!(-4), messages::AGE_TOO_LOW),
        (json!("200"), messages::AGE_TOO_HIGH),
    ];
    for (value, expected) in cases {
        let result = validate(
            WizardStep::ProfileSetup,
            &with(profile_setup_values(), "age", value.clone()),
        );
        assert_eq!(result.error_for("age"), expected, "age = {value}");
    }
}

#[test]
fn test_numeric_strings_are_accepted() {
    let result = validate(
        WizardStep::ProfileSetup,
        &with(profile_setup_values(), "height", json!(" 182.5 ")),
    );
    assert!(result.is_valid);
    assert_eq!(result.patch().and_then(|p| p.height_cm), Some(182.5));
}

#[test]
fn test_inclusive_and_exclusive_operators() {
    let step = WizardStep::ProfileSetup;
    let base = profile_setup_values;

    assert!(validate(step, &with(base(), "freeTime", json!(24))).is_valid);
    assert_eq!(
        validate(step, &with(base(), "freeTime", json!(24.5))).error_for("freeTime"),
        messages::FREE_TIME_TOO_HIGH
    );
    assert_eq!(
        validate(step, &with(base(), "height", json!(250))).error_for("height"),
        messages::HEIGHT_TOO_HIGH
    );
    assert_eq!(
        validate(step, &with(base(), "weight", json!(200))).error_for("weight"),
        messages::WEIGHT_TOO_HIGH
    );
    assert!(validate(step, &with(base(), "daysWeek", json!(7))).is_valid);
    assert!(validate(step, &with(base(), "daysWeek", json!(1))).is_valid);
    assert_eq!(
        validate(step, &with(base(), "daysWeek", json!(0))).error_for("daysWeek"),
        messages::DAYS_WEEK_TOO_LOW
    );
    assert_eq!(
        validate(step, &with(base(), "daysWeek", json!(8))).error_for("daysWeek"),
        messages::DAYS_WEEK_TOO_HIGH
    );
}

#[test]
fn test_all_errors_are_collected() {
    let result = validate(WizardStep::ProfileSetup, &values(json!({})));
    assert!(!result.is_valid);
    assert_eq!(
        result.invalid_fields().len(),
        WizardStep::ProfileSetup.fields().len()
    );
    assert_eq!(result.error_for("name"), messages::NAME_REQUIRED);
    assert_eq!(result.error_for("gender"), messages::GENDER_REQUIRED);
    assert_eq!(result.error_for("activityLevel"), messages::ACTIVITY_LEVEL_REQUIRED);
    assert_eq!(result.error_for("daysWeek"), messages::DAYS_WEEK_REQUIRED);
}

#[test]
fn test_select_fields_accept_labels_and_reject_unknown() {
    let labelled = with(profile_setup_values(), "activityLevel", json!("Very Active"));
    assert!(validate(WizardStep::ProfileSetup, &labelled).is_valid);

    let unknown = with(profile_setup_values(), "gender", json!("robot"));
    assert_eq!(
        validate(WizardStep::ProfileSetup, &unknown).error_for("gender"),
        messages::GENDER_UNKNOWN
    );
}

#[test]
fn test_blank_name_is_required() {
    let result = validate(
        WizardStep::ProfileSetup,
        &with(profile_setup_values(), "name", json!("   ")),
    );
    assert_eq!(result.error_for("name"), messages::NAME_REQUIRED);
}

#[test]
fn test_goal_duration_limit() {
    let result = validate(
        WizardStep::GoalSetting,
        &with(goal_setting_values(), "goalDuration", json!(7)),
    );
    assert!(!result.is_valid);
    assert_eq!(
        result.error_for("goalDuration"),
        "Goal duration should be less than 6 months"
    );

    let at_limit = validate(
        WizardStep::GoalSetting,
        &with(goal_setting_values(), "goalDuration", json!(6)),
    );
    assert_eq!(at_limit.error_for("goalDuration"), messages::GOAL_DURATION_TOO_HIGH);
}

#[test]
fn test_duration_variant_target_date_is_optional_but_checked() {
    let result = validate(WizardStep::GoalSetting, &goal_setting_values());
    assert!(result.is_valid);
    assert_eq!(result.patch().and_then(|p| p.goal_target_date), None);

    let past = with(goal_setting_values(), "goalTargetDate", json!("2025-04-11"));
    assert_eq!(
        validate(WizardStep::GoalSetting, &past).error_for("goalTargetDate"),
        messages::GOAL_TARGET_DATE_PAST
    );

    let today_is_fine = with(goal_setting_values(), "goalTargetDate", json!("2025-04-12"));
    assert!(validate(WizardStep::GoalSetting, &today_is_fine).is_valid);

    let garbage = with(goal_setting_values(), "goalTargetDate", json!("next week"));
    assert_eq!(
        validate(WizardStep::GoalSetting, &garbage).error_for("goalTargetDate"),
        messages::GOAL_TARGET_DATE_INVALID
    );
}

#[test]
fn test_target_date_variant_requires_weight_and_date() {
    let validator = StepValidator::new(GoalVariant::TargetDate);
    let base = without(goal_setting_values(), "goalDuration");

    let missing = validator.validate(WizardStep::GoalSetting, &base, today());
    assert_eq!(missing.error_for("goalWeight"), messages::GOAL_WEIGHT_REQUIRED);
    assert_eq!(
        missing.error_for("goalTargetDate"),
        messages::GOAL_TARGET_DATE_REQUIRED
    );
    assert_eq!(missing.error_for("goalDuration"), "");

    let complete = with(
        with(base, "goalWeight", json!(60)),
        "goalTargetDate",
        json!("2025-07-01T00:00:00.000Z"),
    );
    let result = validator.validate(WizardStep::GoalSetting, &complete, today());
    assert!(result.is_valid, "errors: {:?}", result.errors);
    let patch = result.into_patch().expect("patch");
    assert_eq!(patch.goal_weight_kg, Some(60.0));
    assert_eq!(
        patch.goal_target_date,
        chrono::NaiveDate::from_ymd_opt(2025, 7, 1)
    );
}

#[test]
fn test_meal_preparation_rules() -> Result<()> {
    let result = validate(WizardStep::MealPreparation, &meal_preparation_values());
    assert!(result.is_valid, "errors: {:?}", result.errors);
    let patch = result.into_patch().expect("patch");
    assert_eq!(
        patch.diet_restrictions,
        Some([DietRestriction::Mediterranean].into())
    );
    assert_eq!(
        patch.allergies,
        Some(vec!["peanuts".to_owned(), "shellfish".to_owned()])
    );
    assert_eq!(
        patch.variety_preferences,
        Some(["italian".to_owned(), "middle_eastern".to_owned()].into())
    );
    Ok(())
}

#[test]
fn test_meal_preparation_boundaries() {
    let step = WizardStep::MealPreparation;
    let base = meal_preparation_values;

    assert!(validate(step, &with(base(), "mealPrepTime", json!(120))).is_valid);
    assert_eq!(
        validate(step, &with(base(), "mealPrepTime", json!(121))).error_for("mealPrepTime"),
        messages::MEAL_PREP_TOO_HIGH
    );
    assert_eq!(
        validate(step, &without(base(), "mealPrepTime")).error_for("mealPrepTime"),
        messages::MEAL_PREP_TOO_LOW
    );
    assert!(validate(step, &with(base(), "mealsPerDay", json!(9))).is_valid);
    assert_eq!(
        validate(step, &with(base(), "mealsPerDay", json!(10))).error_for("mealsPerDay"),
        messages::MEALS_TOO_HIGH
    );
    assert_eq!(
        validate(step, &with(base(), "mealsPerDay", json!(2.5))).error_for("mealsPerDay"),
        messages::MEALS_NOT_WHOLE
    );
}

#[test]
fn test_diet_and_cuisine_catalogs() {
    let step = WizardStep::MealPreparation;
    let base = meal_preparation_values;

    assert_eq!(
        validate(step, &with(base(), "dietRestrictions", json!([]))).error_for("dietRestrictions"),
        messages::DIET_REQUIRED
    );
    assert_eq!(
        validate(step, &with(base(), "dietRestrictions", json!(["carnivore"])))
            .error_for("dietRestrictions"),
        messages::unknown_diet("carnivore")
    );
    assert_eq!(
        validate(step, &with(base(), "varietyPreferences", json!(["martian"])))
            .error_for("varietyPreferences"),
        messages::unknown_cuisine("martian")
    );
    assert!(validate(step, &with(base(), "varietyPreferences", json!(["none"]))).is_valid);
    assert!(validate(step, &without(base(), "varietyPreferences")).is_valid);
    assert_eq!(
        validate(step, &with(base(), "varietyPreferences", json!("italian")))
            .error_for("varietyPreferences"),
        messages::TAGS_NOT_A_LIST
    );
}

#[test]
fn test_fields_of_other_steps_are_ignored() {
    let mixed = with(profile_setup_values(), "mealsPerDay", json!(3));
    let result = validate(WizardStep::ProfileSetup, &mixed);
    assert!(result.is_valid);
    assert!(!result.errors.contains_key("mealsPerDay"));
    assert_eq!(result.patch().and_then(|p| p.meals_per_day), None);
}
