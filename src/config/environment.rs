// ABOUTME: Environment configuration management for the FitPlan core
// ABOUTME: Aggregates service, wizard and logging settings parsed from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use super::{ImageSearchConfig, PlanServiceConfig, WizardConfig};
use crate::errors::AppResult;
use crate::logging::LoggingConfig;
use std::env;
use std::str::FromStr;
use tracing::{info, warn};

/// Complete configuration for a wizard session host
#[derive(Debug, Clone, Default)]
pub struct FitPlanConfig {
    /// Plan generation service
    pub plan_service: PlanServiceConfig,
    /// Image search service
    pub image_search: ImageSearchConfig,
    /// Wizard behaviour
    pub wizard: WizardConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl FitPlanConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be interpreted
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            plan_service: PlanServiceConfig::from_env(),
            image_search: ImageSearchConfig::from_env(),
            wizard: WizardConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };
        config.log_summary();
        Ok(config)
    }

    fn log_summary(&self) {
        info!(
            plan_endpoint = %self.plan_service.endpoint,
            image_endpoint = %self.image_search.base_url,
            image_concurrency = ?self.image_search.max_concurrency,
            goal_variant = ?self.wizard.goal_variant,
            "Configuration loaded"
        );
        if self.image_search.api_key.is_none() {
            warn!("SERP_API_KEY is not set; image lookups will resolve to empty URLs");
        }
    }
}

/// Read an environment variable, falling back to `default` when unset
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset or unparseable
pub(crate) fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
