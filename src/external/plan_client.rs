// ABOUTME: Client for the external plan generation service
// ABOUTME: POSTs the accumulated profile as JSON and maps non-2xx replies to readable errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PlanServiceConfig;
use crate::constants::services::PLAN_SERVICE_NAME;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{PlanResponse, Profile};
use crate::utils::http_client::create_client_with_timeout;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use tracing::{debug, warn};

/// Opaque plan optimizer behind the final wizard step
#[async_trait]
pub trait PlanService: Send + Sync {
    /// Generate a weekly plan for `profile`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx reply, or an unreadable body
    async fn generate(&self, profile: &Profile) -> AppResult<PlanResponse>;
}

/// HTTP implementation of [`PlanService`]
pub struct HttpPlanClient {
    config: PlanServiceConfig,
    http_client: reqwest::Client,
}

impl HttpPlanClient {
    /// Create a client for the configured endpoint
    #[must_use]
    pub fn new(config: PlanServiceConfig) -> Self {
        let http_client =
            create_client_with_timeout(config.timeout_secs, config.connect_timeout_secs);
        Self {
            config,
            http_client,
        }
    }

    /// Endpoint this client posts to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl PlanService for HttpPlanClient {
    async fn generate(&self, profile: &Profile) -> AppResult<PlanResponse> {
        debug!(endpoint = %self.config.endpoint, "Requesting plan");
        let response = self
            .http_client
            .post(&self.config.endpoint)
            .json(profile)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error = status_error(status, response).await;
            warn!(status = status.as_u16(), "Plan service rejected the request");
            return Err(error);
        }

        response.json::<PlanResponse>().await.map_err(|e| {
            AppError::external_service(PLAN_SERVICE_NAME, format!("Invalid response body: {e}"))
        })
    }
}

/// Unreachable or timed-out service is unavailable; other send failures keep their kind
fn transport_error(error: reqwest::Error) -> AppError {
    if error.is_connect() || error.is_timeout() {
        warn!(error = %error, "Plan service unreachable");
        AppError::external_unavailable(PLAN_SERVICE_NAME, error.to_string()).with_source(error)
    } else {
        AppError::from(error)
    }
}

/// Build the error for a non-2xx reply.
///
/// JSON bodies are pretty-printed; anything else is passed through as text.
async fn status_error(status: StatusCode, response: Response) -> AppError {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("json"));
    let body = response.text().await.unwrap_or_default();

    let details = if is_json {
        serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or(body)
    } else {
        body
    };

    let code = match status {
        StatusCode::TOO_MANY_REQUESTS => ErrorCode::ExternalRateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorCode::ExternalAuthFailed,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            ErrorCode::ExternalServiceUnavailable
        }
        _ => ErrorCode::ExternalServiceError,
    };
    AppError::new(
        code,
        format!(
            "Request failed with status code {}. {details}",
            status.as_u16()
        ),
    )
}
