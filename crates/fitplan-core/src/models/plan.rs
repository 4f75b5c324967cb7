// ABOUTME: Plan service response shape and the classified plan outcome
// ABOUTME: Includes the presentation helpers used by the plan summary and day screens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Weekly aggregates returned with an optimal plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyInfo {
    /// Average free time used per day (minutes)
    pub avg_free_time_used: f64,
    /// Free time available per week (minutes)
    pub free_time_week: f64,
    /// Average workout duration per day (minutes)
    pub avg_workout_duration: f64,
    /// Meals per day
    pub meals_per_day: f64,
    /// Average net calories per day (intake minus burned)
    pub avg_net_calories: f64,
}

impl WeeklyInfo {
    /// The four summary lines shown above the weekly plan
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let calories = if self.avg_net_calories > 0.0 {
            format!("+{}", self.avg_net_calories)
        } else {
            self.avg_net_calories.to_string()
        };
        vec![
            format!(
                "Time Used: {}/{} min",
                self.avg_free_time_used, self.free_time_week
            ),
            format!("Workout/day: {} min", self.avg_workout_duration),
            format!("Meals/day: {}", self.meals_per_day),
            format!("Calories/day: {calories} kcal"),
        ]
    }
}

/// One selected meal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meal {
    /// Recipe name
    pub recipe: String,
    /// Preparation time in minutes
    #[serde(alias = "prep_time")]
    pub total_time: f64,
    /// Calories
    pub calories: f64,
}

/// One selected exercise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Exercise category
    #[serde(rename = "type")]
    pub exercise_type: String,
    /// Where it takes place
    pub location: String,
    /// Duration in minutes
    pub duration: f64,
    /// Estimated calories burned
    pub estimated_calories_burned: f64,
}

/// Plan for a single day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPlan {
    /// ISO date (the backend sends it as `day`)
    #[serde(alias = "day")]
    pub date: String,
    /// Intake minus calories burned
    pub total_net_calories: f64,
    /// Meals for the day
    pub selected_meals: Vec<Meal>,
    /// Exercises for the day
    pub selected_exercises: Vec<Exercise>,
}

impl DayPlan {
    /// Parsed calendar date, accepting plain dates and RFC 3339 timestamps
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }

    /// Day column label such as `Sat 12 / 04`; falls back to the raw date
    #[must_use]
    pub fn label(&self) -> String {
        self.calendar_date().map_or_else(
            || self.date.clone(),
            |date| date.format("%a %-d / %m").to_string(),
        )
    }

    /// Recipe names then exercise names, in display order, skipping blanks
    #[must_use]
    pub fn image_queries(&self) -> Vec<String> {
        self.selected_meals
            .iter()
            .map(|meal| meal.recipe.as_str())
            .chain(self.selected_exercises.iter().map(|ex| ex.name.as_str()))
            .filter(|name| !name.trim().is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Raw plan service response; every key is optional on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanResponse {
    /// `OPTIMAL`, `INFEASIBLE`, or anything else
    pub status: Option<String>,
    /// Day plans
    pub plan: Option<Vec<DayPlan>>,
    /// Weekly aggregates
    pub weekly_info: Option<WeeklyInfo>,
    /// Recommendations when infeasible
    pub recommendations: Option<Vec<String>>,
}

/// Semantic outcome of a plan request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlanResult {
    /// A plan was found
    Optimal {
        /// Weekly aggregates (zeroed when the service omitted them)
        weekly_info: WeeklyInfo,
        /// At most seven days
        days: Vec<DayPlan>,
    },
    /// The inputs cannot be satisfied
    Infeasible {
        /// Computed inputs, one `key: value` pair per entry
        calculated_inputs: Vec<String>,
        /// Advisory text
        advice: Vec<String>,
    },
    /// Status missing or unrecognized
    Unknown,
}

impl PlanResult {
    /// Image queries for every day of an optimal plan, deduplicated case-insensitively
    #[must_use]
    pub fn image_queries(&self) -> Vec<String> {
        let Self::Optimal { days, .. } = self else {
            return Vec::new();
        };
        let mut seen = std::collections::HashSet::new();
        days.iter()
            .flat_map(DayPlan::image_queries)
            .filter(|query| seen.insert(query.trim().to_lowercase()))
            .collect()
    }

    /// Whether a plan was produced
    #[must_use]
    pub const fn is_optimal(&self) -> bool {
        matches!(self, Self::Optimal { .. })
    }
}
