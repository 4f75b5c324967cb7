// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, valid step submissions and mock external services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitplan`

use async_trait::async_trait;
use chrono::NaiveDate;
use fitplan::errors::{AppError, AppResult};
use fitplan::external::{ImageSearch, PlanService};
use fitplan::models::{PlanResponse, Profile};
use fitplan::validation::CandidateValues;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference date for target-date checks
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 12).unwrap_or_default()
}

/// Turn a `json!` object into form values
pub fn values(value: Value) -> CandidateValues {
    match value {
        Value::Object(map) => map,
        _ => CandidateValues::new(),
    }
}

/// A valid profile setup submission
pub fn profile_setup_values() -> CandidateValues {
    values(json!({
        "name": "Ada",
        "age": 25,
        "gender": "female",
        "height": 170,
        "weight": 65.5,
        "activityLevel": "lightly_active",
        "freeTime": 2,
        "daysWeek": 3
    }))
}

/// A valid goal setting submission for the duration variant
pub fn goal_setting_values() -> CandidateValues {
    values(json!({
        "goalType": "weight_loss",
        "goalDuration": 3,
        "fitnessLevel": "beginner",
        "preferredLocation": "home",
        "preferredWorkoutType": "cardio"
    }))
}

/// A valid meal preparation submission
pub fn meal_preparation_values() -> CandidateValues {
    values(json!({
        "dietRestrictions": ["mediterranean"],
        "allergies": "peanuts, shellfish",
        "mealPrepTime": 45,
        "mealsPerDay": 3,
        "varietyPreferences": ["italian", "Middle Eastern"]
    }))
}

/// A two-day optimal plan service body
pub fn optimal_body() -> Value {
    json!({
        "status": "OPTIMAL",
        "weekly_info": {
            "avg_free_time_used": 60,
            "free_time_week": 840,
            "avg_workout_duration": 30,
            "meals_per_day": 3,
            "avg_net_calories": -250
        },
        "plan": [
            {
                "day": "2025-04-12",
                "total_net_calories": 1700,
                "selected_meals": [{"recipe": "Greek Salad", "total_time": 15, "calories": 400}],
                "selected_exercises": [{"name": "Jogging", "type": "cardio", "location": "outdoor",
                    "duration": 30, "estimated_calories_burned": 300}]
            },
            {
                "day": "2025-04-13",
                "total_net_calories": 1750,
                "selected_meals": [{"recipe": "Lentil Soup", "total_time": 40, "calories": 500}],
                "selected_exercises": []
            }
        ]
    })
}

/// Plan service double returning a canned result and counting calls
pub struct MockPlanService {
    response: Mutex<AppResult<PlanResponse>>,
    delay: Duration,
    calls: AtomicUsize,
    last_profile: Mutex<Option<Profile>>,
}

impl MockPlanService {
    pub fn succeeding(body: &Value) -> Self {
        let response = serde_json::from_value(body.clone()).map_err(AppError::from);
        Self::with_response(response)
    }

    pub fn failing(message: &str) -> Self {
        Self::with_response(Err(AppError::external_service("Plan service", message)))
    }

    fn with_response(response: AppResult<PlanResponse>) -> Self {
        Self {
            response: Mutex::new(response),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            last_profile: Mutex::new(None),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Make subsequent calls succeed with `body`
    pub fn set_response(&self, body: &Value) {
        if let Ok(mut slot) = self.response.lock() {
            *slot = serde_json::from_value(body.clone()).map_err(AppError::from);
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_profile(&self) -> Option<Profile> {
        self.last_profile.lock().ok().and_then(|p| p.clone())
    }
}

#[async_trait]
impl PlanService for MockPlanService {
    async fn generate(&self, profile: &Profile) -> AppResult<PlanResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_profile.lock() {
            *last = Some(profile.clone());
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let guard = self
            .response
            .lock()
            .map_err(|_| AppError::internal("mock poisoned"))?;
        match &*guard {
            Ok(response) => Ok(response.clone()),
            Err(e) => Err(AppError::new(e.code, e.message.clone())),
        }
    }
}

/// Image search double with per-query delays and failures
#[derive(Default)]
pub struct MockImageSearch {
    delays: HashMap<String, Duration>,
    failing: Mutex<Vec<String>>,
    calls: Mutex<Vec<String>>,
}

impl MockImageSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_owned(), delay);
        self
    }

    pub fn failing_for(self, query: &str) -> Self {
        if let Ok(mut failing) = self.failing.lock() {
            failing.push(query.to_owned());
        }
        self
    }

    /// Stop failing for every query
    pub fn recover(&self) {
        if let Ok(mut failing) = self.failing.lock() {
            failing.clear();
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn url_for(query: &str) -> String {
        format!(
            "https://images.test/{}.jpg",
            query.to_lowercase().replace(' ', "-")
        )
    }
}

#[async_trait]
impl ImageSearch for MockImageSearch {
    async fn search(&self, query: &str) -> AppResult<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(query.to_owned());
        }
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        let fails = self
            .failing
            .lock()
            .map(|f| f.iter().any(|q| q == query))
            .unwrap_or(false);
        if fails {
            return Err(AppError::external_service("Image search", "HTTP 500"));
        }
        Ok(Self::url_for(query))
    }
}
