// ABOUTME: External API provider configuration for the plan service and image search
// ABOUTME: Endpoint URLs, API key and timeouts with environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::environment::{env_parse_or, env_var_or};
use crate::constants::services;
use std::env;

/// Plan generation service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanServiceConfig {
    /// Endpoint receiving the profile as a JSON POST
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for PlanServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: services::DEFAULT_PLAN_SERVICE_URL.to_owned(),
            timeout_secs: services::DEFAULT_PLAN_TIMEOUT_SECS,
            connect_timeout_secs: services::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl PlanServiceConfig {
    /// Load plan service configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            endpoint: env_var_or("PLAN_SERVICE_URL", services::DEFAULT_PLAN_SERVICE_URL),
            timeout_secs: env_parse_or(
                "PLAN_SERVICE_TIMEOUT_SECS",
                services::DEFAULT_PLAN_TIMEOUT_SECS,
            ),
            connect_timeout_secs: services::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Image search service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSearchConfig {
    /// API key; lookups degrade to empty URLs when absent
    pub api_key: Option<String>,
    /// Search endpoint
    pub base_url: String,
    /// Per-lookup timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Optional cap on concurrent lookups across all batches
    pub max_concurrency: Option<usize>,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: services::DEFAULT_IMAGE_SEARCH_URL.to_owned(),
            timeout_secs: services::DEFAULT_IMAGE_TIMEOUT_SECS,
            connect_timeout_secs: services::DEFAULT_CONNECT_TIMEOUT_SECS,
            max_concurrency: None,
        }
    }
}

impl ImageSearchConfig {
    /// Load image search configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("SERP_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: env_var_or("IMAGE_SEARCH_BASE_URL", services::DEFAULT_IMAGE_SEARCH_URL),
            timeout_secs: env_parse_or(
                "IMAGE_SEARCH_TIMEOUT_SECS",
                services::DEFAULT_IMAGE_TIMEOUT_SECS,
            ),
            connect_timeout_secs: services::DEFAULT_CONNECT_TIMEOUT_SECS,
            max_concurrency: env::var("IMAGE_SEARCH_MAX_CONCURRENCY")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|cap: &usize| *cap > 0),
        }
    }
}
