// ABOUTME: Per-step rule engine for the profile wizard
// ABOUTME: Collects every field error of a step and builds a typed profile patch only when all pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Step Validation
//!
//! [`StepValidator::validate`] is pure: it reads the submitted form values, never
//! the stored profile, and reports one message per field. Errors are collected for
//! the whole step before returning so the form can highlight every problem at once.
//!
//! Numeric fields are checked in a fixed order: missing, not a number, not a whole
//! number (integer fields), below the minimum, above the maximum. The comparison
//! operator of each bound is part of the field's rule (`age < 150` but
//! `freeTime <= 24`).

mod rules;
mod values;

use crate::config::GoalVariant;
use crate::constants::{catalog, fields, messages};
use crate::models::{
    ActivityLevel, DietRestriction, FitnessLevel, Gender, GoalType, ProfilePatch, WizardStep,
    WorkoutLocation, WorkoutType,
};
use chrono::NaiveDate;
use rules::NumericRule;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use values::Scalar;

/// Raw form values for one step, keyed by wire name
pub type CandidateValues = Map<String, Value>;

/// Outcome of validating one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Step the values were submitted for
    pub step: WizardStep,
    /// Whether every field passed
    pub is_valid: bool,
    /// Error per field of the step; an empty string means no error
    pub errors: BTreeMap<String, String>,
    #[serde(skip)]
    patch: Option<ProfilePatch>,
}

impl ValidationResult {
    fn new(step: WizardStep) -> Self {
        Self {
            step,
            is_valid: true,
            errors: step
                .fields()
                .iter()
                .map(|field| ((*field).to_owned(), String::new()))
                .collect(),
            patch: None,
        }
    }

    fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.insert(field.to_owned(), message.into());
    }

    /// Error message for a field, empty when the field passed
    #[must_use]
    pub fn error_for(&self, field: &str) -> &str {
        self.errors.get(field).map_or("", String::as_str)
    }

    /// Wire names of the fields that failed
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, _)| field.as_str())
            .collect()
    }

    /// Typed update for the profile store, present only when the step is valid
    #[must_use]
    pub const fn patch(&self) -> Option<&ProfilePatch> {
        self.patch.as_ref()
    }

    /// Consume the result and take the patch
    #[must_use]
    pub fn into_patch(self) -> Option<ProfilePatch> {
        self.patch
    }
}

/// Rule engine for the wizard steps
#[derive(Debug, Clone, Copy, Default)]
pub struct StepValidator {
    goal_variant: GoalVariant,
}

impl StepValidator {
    /// Create a validator for the given goal-setting variant
    #[must_use]
    pub const fn new(goal_variant: GoalVariant) -> Self {
        Self { goal_variant }
    }

    /// Goal-setting variant this validator enforces
    #[must_use]
    pub const fn goal_variant(&self) -> GoalVariant {
        self.goal_variant
    }

    /// Validate the values submitted for `step`.
    ///
    /// `today` is the reference date for the goal target date check. Keys that
    /// belong to other steps are ignored.
    #[must_use]
    pub fn validate(
        &self,
        step: WizardStep,
        values: &CandidateValues,
        today: NaiveDate,
    ) -> ValidationResult {
        let mut check = FieldCheck {
            values,
            result: ValidationResult::new(step),
        };
        let patch = match step {
            WizardStep::ProfileSetup => check.profile_setup(),
            WizardStep::GoalSetting => check.goal_setting(self.goal_variant, today),
            WizardStep::MealPreparation => check.meal_preparation(),
        };
        let mut result = check.result;
        if result.is_valid {
            result.patch = Some(patch);
        }
        result
    }
}

/// Reads fields one at a time, recording failures as it goes.
///
/// Every reader returns `None` both for a failed field and for an absent optional
/// field; the patch is discarded whenever any error was recorded.
struct FieldCheck<'a> {
    values: &'a CandidateValues,
    result: ValidationResult,
}

impl FieldCheck<'_> {
    fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    fn fail<T>(&mut self, field: &str, message: impl Into<String>) -> Option<T> {
        self.result.add_error(field, message);
        None
    }

    fn text(&mut self, field: &str, missing: &str) -> Option<String> {
        match values::read_text(self.get(field)) {
            Scalar::Present(text) => Some(text),
            Scalar::Absent | Scalar::Invalid => self.fail(field, missing),
        }
    }

    fn number(&mut self, rule: &NumericRule, required: bool) -> Option<f64> {
        let value = match values::read_number(self.get(rule.field)) {
            Scalar::Present(value) => value,
            Scalar::Absent if required => return self.fail(rule.field, rule.missing),
            Scalar::Absent => return None,
            Scalar::Invalid => return self.fail(rule.field, rule.not_a_number),
        };
        match rule.check(value) {
            Some(message) => self.fail(rule.field, message),
            None => Some(value),
        }
    }

    fn whole_number(&mut self, rule: &NumericRule) -> Option<u32> {
        self.number(rule, true).map(to_whole)
    }

    fn select<T>(
        &mut self,
        field: &str,
        missing: &str,
        unknown: &str,
        parse: fn(&str) -> Option<T>,
    ) -> Option<T> {
        match values::read_text(self.get(field)) {
            Scalar::Absent => self.fail(field, missing),
            Scalar::Invalid => self.fail(field, unknown),
            Scalar::Present(raw) => match parse(&raw) {
                Some(option) => Some(option),
                None => self.fail(field, unknown),
            },
        }
    }

    fn target_date(&mut self, required: bool, today: NaiveDate) -> Option<NaiveDate> {
        let field = fields::GOAL_TARGET_DATE;
        let raw = match values::read_text(self.get(field)) {
            Scalar::Present(raw) => raw,
            Scalar::Absent if required => {
                return self.fail(field, messages::GOAL_TARGET_DATE_REQUIRED)
            }
            Scalar::Absent => return None,
            Scalar::Invalid => return self.fail(field, messages::GOAL_TARGET_DATE_INVALID),
        };
        match values::parse_date(&raw) {
            None => self.fail(field, messages::GOAL_TARGET_DATE_INVALID),
            Some(date) if date < today => self.fail(field, messages::GOAL_TARGET_DATE_PAST),
            Some(date) => Some(date),
        }
    }

    fn diet_restrictions(&mut self) -> Option<BTreeSet<DietRestriction>> {
        let field = fields::DIET_RESTRICTIONS;
        let Some(tags) = values::read_string_list(self.get(field)) else {
            return self.fail(field, messages::TAGS_NOT_A_LIST);
        };
        let tags: Vec<String> = tags.into_iter().filter(|t| !t.trim().is_empty()).collect();
        if tags.is_empty() {
            return self.fail(field, messages::DIET_REQUIRED);
        }
        let mut selected = BTreeSet::new();
        for tag in &tags {
            match DietRestriction::from_tag(tag) {
                Some(diet) => {
                    selected.insert(diet);
                }
                None => return self.fail(field, messages::unknown_diet(tag.trim())),
            }
        }
        Some(selected)
    }

    fn variety_preferences(&mut self) -> Option<BTreeSet<String>> {
        let field = fields::VARIETY_PREFERENCES;
        let Some(tags) = values::read_string_list(self.get(field)) else {
            return self.fail(field, messages::TAGS_NOT_A_LIST);
        };
        let mut selected = BTreeSet::new();
        for raw in tags.iter().filter(|t| !t.trim().is_empty()) {
            let tag = catalog::normalize_tag(raw);
            if !catalog::is_known_cuisine(&tag) {
                return self.fail(field, messages::unknown_cuisine(raw.trim()));
            }
            selected.insert(tag);
        }
        Some(selected)
    }

    fn allergies(&mut self) -> Option<Vec<String>> {
        let field = fields::ALLERGIES;
        match values::read_free_text_list(self.get(field)) {
            Some(allergies) => Some(allergies),
            None => self.fail(field, messages::ALLERGIES_INVALID),
        }
    }

    fn profile_setup(&mut self) -> ProfilePatch {
        ProfilePatch {
            name: self.text(fields::NAME, messages::NAME_REQUIRED),
            age: self.whole_number(&rules::AGE),
            gender: self.select(
                fields::GENDER,
                messages::GENDER_REQUIRED,
                messages::GENDER_UNKNOWN,
                Gender::from_tag,
            ),
            height_cm: self.number(&rules::HEIGHT, true),
            weight_kg: self.number(&rules::WEIGHT, true),
            activity_level: self.select(
                fields::ACTIVITY_LEVEL,
                messages::ACTIVITY_LEVEL_REQUIRED,
                messages::ACTIVITY_LEVEL_UNKNOWN,
                ActivityLevel::from_tag,
            ),
            free_time_hours_per_day: self.number(&rules::FREE_TIME, true),
            days_per_week: self.whole_number(&rules::DAYS_WEEK),
            ..ProfilePatch::default()
        }
    }

    fn goal_setting(&mut self, variant: GoalVariant, today: NaiveDate) -> ProfilePatch {
        let by_date = variant == GoalVariant::TargetDate;
        ProfilePatch {
            goal_type: self.select(
                fields::GOAL_TYPE,
                messages::GOAL_TYPE_REQUIRED,
                messages::GOAL_TYPE_UNKNOWN,
                GoalType::from_tag,
            ),
            goal_duration_months: self.number(&rules::GOAL_DURATION, !by_date),
            goal_weight_kg: self.number(&rules::GOAL_WEIGHT, by_date),
            goal_target_date: self.target_date(by_date, today),
            fitness_level: self.select(
                fields::FITNESS_LEVEL,
                messages::FITNESS_LEVEL_REQUIRED,
                messages::FITNESS_LEVEL_UNKNOWN,
                FitnessLevel::from_tag,
            ),
            preferred_location: self.select(
                fields::PREFERRED_LOCATION,
                messages::LOCATION_REQUIRED,
                messages::LOCATION_UNKNOWN,
                WorkoutLocation::from_tag,
            ),
            preferred_workout_type: self.select(
                fields::PREFERRED_WORKOUT_TYPE,
                messages::WORKOUT_TYPE_REQUIRED,
                messages::WORKOUT_TYPE_UNKNOWN,
                WorkoutType::from_tag,
            ),
            ..ProfilePatch::default()
        }
    }

    fn meal_preparation(&mut self) -> ProfilePatch {
        ProfilePatch {
            diet_restrictions: self.diet_restrictions(),
            allergies: self.allergies(),
            meal_prep_time_minutes: self.whole_number(&rules::MEAL_PREP_TIME),
            meals_per_day: self.whole_number(&rules::MEALS_PER_DAY),
            variety_preferences: self.variety_preferences(),
            ..ProfilePatch::default()
        }
    }
}

// Safe: integer rules reject fractions, negatives and anything above their small maximum
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_whole(value: f64) -> u32 {
    value as u32
}
