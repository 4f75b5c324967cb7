// ABOUTME: Numeric field rules with per-field comparison operators and messages
// ABOUTME: Check order is missing, not a number, not whole, below minimum, above maximum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Integer limits are small and convert to f64 exactly
#![allow(clippy::cast_precision_loss)]

use crate::constants::{fields, limits, messages};

/// A bound together with whether the bound value itself is allowed
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Bound {
    /// The bound value is rejected
    Exclusive(f64),
    /// The bound value is accepted
    Inclusive(f64),
}

impl Bound {
    /// `value` violates this bound used as a minimum
    pub(crate) fn below(self, value: f64) -> bool {
        match self {
            Self::Exclusive(min) => value <= min,
            Self::Inclusive(min) => value < min,
        }
    }

    /// `value` violates this bound used as a maximum
    pub(crate) fn above(self, value: f64) -> bool {
        match self {
            Self::Exclusive(max) => value >= max,
            Self::Inclusive(max) => value > max,
        }
    }
}

/// Everything the validator needs to check one numeric field
#[derive(Debug, Clone, Copy)]
pub(crate) struct NumericRule {
    pub field: &'static str,
    pub missing: &'static str,
    pub not_a_number: &'static str,
    /// Set for integer fields
    pub not_whole: Option<&'static str>,
    pub min: Bound,
    pub too_low: &'static str,
    pub max: Bound,
    pub too_high: &'static str,
}

impl NumericRule {
    /// First violated check for a parsed value, `None` if it passes
    pub(crate) fn check(&self, value: f64) -> Option<&'static str> {
        if let Some(message) = self.not_whole {
            if value.fract() != 0.0 {
                return Some(message);
            }
        }
        if self.min.below(value) {
            return Some(self.too_low);
        }
        if self.max.above(value) {
            return Some(self.too_high);
        }
        None
    }
}

pub(crate) const AGE: NumericRule = NumericRule {
    field: fields::AGE,
    missing: messages::AGE_REQUIRED,
    not_a_number: messages::AGE_NOT_A_NUMBER,
    not_whole: Some(messages::AGE_NOT_WHOLE),
    min: Bound::Exclusive(0.0),
    too_low: messages::AGE_TOO_LOW,
    max: Bound::Exclusive(limits::AGE_EXCLUSIVE_MAX as f64),
    too_high: messages::AGE_TOO_HIGH,
};

pub(crate) const HEIGHT: NumericRule = NumericRule {
    field: fields::HEIGHT,
    missing: messages::HEIGHT_REQUIRED,
    not_a_number: messages::HEIGHT_NOT_A_NUMBER,
    not_whole: None,
    min: Bound::Exclusive(0.0),
    too_low: messages::HEIGHT_TOO_LOW,
    max: Bound::Exclusive(limits::HEIGHT_CM_EXCLUSIVE_MAX),
    too_high: messages::HEIGHT_TOO_HIGH,
};

pub(crate) const WEIGHT: NumericRule = NumericRule {
    field: fields::WEIGHT,
    missing: messages::WEIGHT_REQUIRED,
    not_a_number: messages::WEIGHT_NOT_A_NUMBER,
    not_whole: None,
    min: Bound::Exclusive(0.0),
    too_low: messages::WEIGHT_TOO_LOW,
    max: Bound::Exclusive(limits::WEIGHT_KG_EXCLUSIVE_MAX),
    too_high: messages::WEIGHT_TOO_HIGH,
};

pub(crate) const FREE_TIME: NumericRule = NumericRule {
    field: fields::FREE_TIME,
    missing: messages::FREE_TIME_REQUIRED,
    not_a_number: messages::FREE_TIME_NOT_A_NUMBER,
    not_whole: None,
    min: Bound::Exclusive(0.0),
    too_low: messages::FREE_TIME_TOO_LOW,
    max: Bound::Inclusive(limits::FREE_TIME_HOURS_INCLUSIVE_MAX),
    too_high: messages::FREE_TIME_TOO_HIGH,
};

pub(crate) const DAYS_WEEK: NumericRule = NumericRule {
    field: fields::DAYS_WEEK,
    missing: messages::DAYS_WEEK_REQUIRED,
    not_a_number: messages::DAYS_WEEK_NOT_A_NUMBER,
    not_whole: Some(messages::DAYS_WEEK_NOT_WHOLE),
    min: Bound::Inclusive(limits::DAYS_PER_WEEK_MIN as f64),
    too_low: messages::DAYS_WEEK_TOO_LOW,
    max: Bound::Inclusive(limits::DAYS_PER_WEEK_MAX as f64),
    too_high: messages::DAYS_WEEK_TOO_HIGH,
};

pub(crate) const GOAL_DURATION: NumericRule = NumericRule {
    field: fields::GOAL_DURATION,
    missing: messages::GOAL_DURATION_REQUIRED,
    not_a_number: messages::GOAL_DURATION_NOT_A_NUMBER,
    not_whole: None,
    min: Bound::Exclusive(0.0),
    too_low: messages::GOAL_DURATION_TOO_LOW,
    max: Bound::Exclusive(limits::GOAL_DURATION_MONTHS_EXCLUSIVE_MAX),
    too_high: messages::GOAL_DURATION_TOO_HIGH,
};

pub(crate) const GOAL_WEIGHT: NumericRule = NumericRule {
    field: fields::GOAL_WEIGHT,
    missing: messages::GOAL_WEIGHT_REQUIRED,
    not_a_number: messages::GOAL_WEIGHT_NOT_A_NUMBER,
    not_whole: None,
    min: Bound::Exclusive(0.0),
    too_low: messages::GOAL_WEIGHT_TOO_LOW,
    max: Bound::Exclusive(limits::GOAL_WEIGHT_KG_EXCLUSIVE_MAX),
    too_high: messages::GOAL_WEIGHT_TOO_HIGH,
};

// The slider starts at 0, so an untouched value reads as "too low" rather than "required".
pub(crate) const MEAL_PREP_TIME: NumericRule = NumericRule {
    field: fields::MEAL_PREP_TIME,
    missing: messages::MEAL_PREP_TOO_LOW,
    not_a_number: messages::MEAL_PREP_NOT_A_NUMBER,
    not_whole: Some(messages::MEAL_PREP_NOT_WHOLE),
    min: Bound::Exclusive(0.0),
    too_low: messages::MEAL_PREP_TOO_LOW,
    max: Bound::Inclusive(limits::MEAL_PREP_MINUTES_INCLUSIVE_MAX as f64),
    too_high: messages::MEAL_PREP_TOO_HIGH,
};

pub(crate) const MEALS_PER_DAY: NumericRule = NumericRule {
    field: fields::MEALS_PER_DAY,
    missing: messages::MEALS_TOO_LOW,
    not_a_number: messages::MEALS_NOT_A_NUMBER,
    not_whole: Some(messages::MEALS_NOT_WHOLE),
    min: Bound::Exclusive(0.0),
    too_low: messages::MEALS_TOO_LOW,
    max: Bound::Exclusive(limits::MEALS_PER_DAY_EXCLUSIVE_MAX as f64),
    too_high: messages::MEALS_TOO_HIGH,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_and_inclusive_bounds() {
        assert!(Bound::Exclusive(0.0).below(0.0));
        assert!(!Bound::Inclusive(1.0).below(1.0));
        assert!(Bound::Exclusive(150.0).above(150.0));
        assert!(!Bound::Inclusive(7.0).above(7.0));
        assert!(Bound::Inclusive(7.0).above(7.5));
    }

    #[test]
    fn test_rule_check_order() {
        assert_eq!(AGE.check(25.5), Some(messages::AGE_NOT_WHOLE));
        assert_eq!(AGE.check(-3.0), Some(messages::AGE_TOO_LOW));
        assert_eq!(AGE.check(150.0), Some(messages::AGE_TOO_HIGH));
        assert_eq!(AGE.check(149.0), None);
        assert_eq!(MEAL_PREP_TIME.check(120.0), None);
        assert_eq!(MEALS_PER_DAY.check(10.0), Some(messages::MEALS_TOO_HIGH));
        assert_eq!(MEALS_PER_DAY.check(9.0), None);
    }
}
