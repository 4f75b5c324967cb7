// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for validation limits, messages, catalogs and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Numeric bounds enforced by the step validator
pub mod limits;
/// User-facing validation messages
pub mod messages;
/// Accepted option tags for select and multi-select fields
pub mod catalog;
/// Wire field names shared by the validator and the plan service payload
pub mod fields;

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const FITPLAN: &str = "fitplan";
}

/// External service defaults
pub mod services {
    /// Default plan generation endpoint
    pub const DEFAULT_PLAN_SERVICE_URL: &str = "http://localhost:8000/optimize";
    /// Default plan request timeout in seconds
    pub const DEFAULT_PLAN_TIMEOUT_SECS: u64 = 60;
    /// Default image search endpoint
    pub const DEFAULT_IMAGE_SEARCH_URL: &str = "https://serpapi.com/search.json";
    /// Default image lookup timeout in seconds
    pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 15;
    /// Connect timeout shared by both clients
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Search engine requested from the image search service
    pub const IMAGE_SEARCH_ENGINE: &str = "google_images";
    /// Service label used in plan service errors and logs
    pub const PLAN_SERVICE_NAME: &str = "Plan service";
    /// Service label used in image search errors and logs
    pub const IMAGE_SERVICE_NAME: &str = "Image search";
}

/// Plan response interpretation
pub mod plan {
    /// Status returned when an optimal plan was found
    pub const STATUS_OPTIMAL: &str = "OPTIMAL";
    /// Status returned when the inputs cannot be satisfied
    pub const STATUS_INFEASIBLE: &str = "INFEASIBLE";
    /// Number of days shown from an optimal plan
    pub const MAX_PLAN_DAYS: usize = 7;
    /// Separator between computed input pairs in the first recommendation
    pub const CALCULATED_INPUT_SEPARATOR: char = ';';
    /// Advisory text returned when no single input is at fault
    pub const ALL_INPUTS_FEASIBLE: &str = "All input parameters appear feasible.";
    /// Suggestion appended to [`ALL_INPUTS_FEASIBLE`]
    pub const EXTEND_PERIOD_SUGGESTION: &str =
        "Try extending the time period to give the plan more room to reach your goal.";
}

/// Energy balance constants used by profile metrics
pub mod energy {
    /// Kilocalories per kilogram of body weight change
    pub const KCAL_PER_KG: f64 = 7700.0;
    /// Mifflin-St Jeor weight coefficient
    pub const BMR_WEIGHT_COEFFICIENT: f64 = 10.0;
    /// Mifflin-St Jeor height coefficient
    pub const BMR_HEIGHT_COEFFICIENT: f64 = 6.25;
    /// Mifflin-St Jeor age coefficient
    pub const BMR_AGE_COEFFICIENT: f64 = 5.0;
    /// Mifflin-St Jeor male offset
    pub const BMR_MALE_OFFSET: f64 = 5.0;
    /// Mifflin-St Jeor female/other offset
    pub const BMR_FEMALE_OFFSET: f64 = -161.0;
    /// TDEE multiplier for sedentary users
    pub const SEDENTARY_MULTIPLIER: f64 = 1.2;
    /// TDEE multiplier for lightly active users
    pub const LIGHTLY_ACTIVE_MULTIPLIER: f64 = 1.375;
    /// TDEE multiplier for very active users
    pub const VERY_ACTIVE_MULTIPLIER: f64 = 1.725;
}
