// ABOUTME: Image search client resolving a text query to the URL of its first image result
// ABOUTME: Talks to a SerpAPI-compatible google_images endpoint configured by base URL and key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Image search
//!
//! [`SerpImageClient`] asks the search endpoint for a single result and returns
//! its `original` URL. Callers treat every error as "no image": the resolver
//! degrades failures to an empty string.

use crate::config::ImageSearchConfig;
use crate::constants::services::{IMAGE_SEARCH_ENGINE, IMAGE_SERVICE_NAME};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::utils::http_client::create_client_with_timeout;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

/// Resolves a query to an image URL
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// URL of the best image for `query`, or an empty string when nothing matched
    ///
    /// # Errors
    ///
    /// Returns an error when the service is unconfigured, unreachable, or replies badly
    async fn search(&self, query: &str) -> AppResult<String>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchResponse {
    images_results: Vec<ImageResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ImageResult {
    original: String,
}

/// HTTP implementation of [`ImageSearch`]
pub struct SerpImageClient {
    config: ImageSearchConfig,
    http_client: reqwest::Client,
}

impl SerpImageClient {
    /// Create a client from configuration
    #[must_use]
    pub fn new(config: ImageSearchConfig) -> Self {
        let http_client =
            create_client_with_timeout(config.timeout_secs, config.connect_timeout_secs);
        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl ImageSearch for SerpImageClient {
    async fn search(&self, query: &str) -> AppResult<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(AppError::config_missing("SERP_API_KEY"));
        };

        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(&[
                ("engine", IMAGE_SEARCH_ENGINE),
                ("google_domain", "google.com"),
                ("hl", "en"),
                ("gl", "us"),
                ("q", query),
                ("api_key", api_key),
                ("per_page", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let code = if status == StatusCode::TOO_MANY_REQUESTS {
                ErrorCode::ExternalRateLimited
            } else {
                ErrorCode::ExternalServiceError
            };
            return Err(AppError::new(
                code,
                format!("{IMAGE_SERVICE_NAME}: HTTP {}", status.as_u16()),
            ));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            AppError::external_service(IMAGE_SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        let url = body
            .images_results
            .into_iter()
            .next()
            .map(|image| image.original)
            .unwrap_or_default();
        if url.is_empty() {
            debug!(query, "Image search returned no results");
        }
        Ok(url)
    }
}
