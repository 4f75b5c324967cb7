// ABOUTME: Interprets plan service responses into optimal, infeasible or unknown outcomes
// ABOUTME: Truncates plans to one week and splits infeasibility recommendations for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::plan::{
    ALL_INPUTS_FEASIBLE, CALCULATED_INPUT_SEPARATOR, EXTEND_PERIOD_SUGGESTION, MAX_PLAN_DAYS,
    STATUS_INFEASIBLE, STATUS_OPTIMAL,
};
use crate::models::{PlanResponse, PlanResult};
use serde_json::Value;
use tracing::{debug, warn};

/// Classify a decoded plan service response.
///
/// `OPTIMAL` with a non-empty plan wins, then `INFEASIBLE` with at least one
/// recommendation; anything else is [`PlanResult::Unknown`].
#[must_use]
pub fn classify(response: PlanResponse) -> PlanResult {
    let PlanResponse {
        status,
        plan,
        weekly_info,
        recommendations,
    } = response;
    let status = status.as_deref().map(str::trim);

    if status == Some(STATUS_OPTIMAL) {
        if let Some(mut days) = plan.filter(|days| !days.is_empty()) {
            days.truncate(MAX_PLAN_DAYS);
            debug!(days = days.len(), "Plan is optimal");
            return PlanResult::Optimal {
                weekly_info: weekly_info.unwrap_or_default(),
                days,
            };
        }
    } else if status == Some(STATUS_INFEASIBLE) {
        if let Some(recommendations) = recommendations.filter(|r| !r.is_empty()) {
            debug!(count = recommendations.len(), "Plan is infeasible");
            return infeasible(recommendations);
        }
    }

    debug!(status = ?status, "Plan status not recognized");
    PlanResult::Unknown
}

/// Classify a raw JSON body; bodies that do not fit the response shape are unknown
#[must_use]
pub fn classify_value(body: &Value) -> PlanResult {
    match serde_json::from_value::<PlanResponse>(body.clone()) {
        Ok(response) => classify(response),
        Err(e) => {
            warn!(error = %e, "Plan response has an unexpected shape");
            PlanResult::Unknown
        }
    }
}

fn infeasible(recommendations: Vec<String>) -> PlanResult {
    let mut items = recommendations.into_iter();
    let calculated_inputs = items
        .next()
        .unwrap_or_default()
        .split(CALCULATED_INPUT_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect();
    let advice = items
        .map(|text| {
            if text == ALL_INPUTS_FEASIBLE {
                format!("{text} {EXTEND_PERIOD_SUGGESTION}")
            } else {
                text
            }
        })
        .collect();
    PlanResult::Infeasible {
        calculated_inputs,
        advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optimal_without_plan_is_unknown() {
        let body = json!({"status": "OPTIMAL", "plan": []});
        assert_eq!(classify_value(&body), PlanResult::Unknown);
    }

    #[test]
    fn test_infeasible_without_recommendations_is_unknown() {
        let body = json!({"status": "INFEASIBLE", "recommendations": []});
        assert_eq!(classify_value(&body), PlanResult::Unknown);
    }

    #[test]
    fn test_malformed_body_is_unknown() {
        assert_eq!(classify_value(&json!({"plan": 3})), PlanResult::Unknown);
        assert_eq!(classify_value(&json!("OPTIMAL")), PlanResult::Unknown);
    }
}
