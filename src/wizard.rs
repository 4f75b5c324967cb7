// ABOUTME: Wizard state machine sequencing profile, goal and meal steps before plan generation
// ABOUTME: Validates each submission, merges it into the profile store and guards the plan request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Wizard Controller
//!
//! ```text
//! ProfileSetup -> GoalSetting -> MealPreparation -> PlanRequested -> PlanReady | PlanFailed
//! ```
//!
//! A step advances only when its submission validates. The final submission awaits
//! the plan service; while any operation is running the controller rejects new
//! ones with a resource-locked error, so the profile has a single writer.

use crate::config::{FitPlanConfig, WizardConfig};
use crate::errors::{AppError, AppResult};
use crate::external::{HttpPlanClient, PlanService};
use crate::models::{PlanResult, Profile, WizardStep};
use crate::plan::classify;
use crate::profile_store::ProfileStore;
use crate::validation::{CandidateValues, StepValidator, ValidationResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Where the wizard currently is
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum WizardState {
    /// Collecting identity and biometrics
    ProfileSetup,
    /// Collecting the goal and workout preferences
    GoalSetting,
    /// Collecting diet and meal preferences
    MealPreparation,
    /// Waiting on the plan service
    PlanRequested,
    /// The plan service answered
    PlanReady(PlanResult),
    /// The plan request failed; the message is shown to the user
    PlanFailed(String),
}

impl WizardState {
    const fn at(step: WizardStep) -> Self {
        match step {
            WizardStep::ProfileSetup => Self::ProfileSetup,
            WizardStep::GoalSetting => Self::GoalSetting,
            WizardStep::MealPreparation => Self::MealPreparation,
        }
    }

    /// Step accepting submissions in this state
    #[must_use]
    pub const fn current_step(&self) -> Option<WizardStep> {
        match self {
            Self::ProfileSetup => Some(WizardStep::ProfileSetup),
            Self::GoalSetting => Some(WizardStep::GoalSetting),
            Self::MealPreparation => Some(WizardStep::MealPreparation),
            Self::PlanRequested | Self::PlanReady(_) | Self::PlanFailed(_) => None,
        }
    }

    /// Number of steps completed to reach this state
    const fn progress(&self) -> usize {
        match self {
            Self::ProfileSetup => 0,
            Self::GoalSetting => 1,
            Self::MealPreparation => 2,
            Self::PlanRequested | Self::PlanReady(_) | Self::PlanFailed(_) => 3,
        }
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::ProfileSetup => "profile_setup",
            Self::GoalSetting => "goal_setting",
            Self::MealPreparation => "meal_preparation",
            Self::PlanRequested => "plan_requested",
            Self::PlanReady(_) => "plan_ready",
            Self::PlanFailed(_) => "plan_failed",
        }
    }
}

/// Result of a step submission that was accepted for processing
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Validation failed; nothing was stored and the wizard stays on the step
    Invalid(ValidationResult),
    /// The step was stored and the wizard moved on
    Advanced(WizardStep),
    /// The final step was stored and the plan service answered
    PlanReady(PlanResult),
    /// The final step was stored but the plan request failed
    PlanFailed(String),
}

/// Released when the running operation finishes or is dropped
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Drives one wizard session
pub struct WizardController {
    session_id: Uuid,
    validator: StepValidator,
    store: ProfileStore,
    plan_service: Arc<dyn PlanService>,
    state: Mutex<WizardState>,
    in_flight: AtomicBool,
    today: fn() -> NaiveDate,
}

impl WizardController {
    /// Create a controller with a fresh profile
    #[must_use]
    pub fn new(config: WizardConfig, plan_service: Arc<dyn PlanService>) -> Self {
        let session_id = Uuid::new_v4();
        info!(
            session_id = %session_id,
            goal_variant = ?config.goal_variant,
            "Wizard session started"
        );
        Self {
            session_id,
            validator: StepValidator::new(config.goal_variant),
            store: ProfileStore::new(),
            plan_service,
            state: Mutex::new(WizardState::ProfileSetup),
            in_flight: AtomicBool::new(false),
            today: || chrono::Local::now().date_naive(),
        }
    }

    /// Controller talking to the configured HTTP plan service
    #[must_use]
    pub fn from_config(config: &FitPlanConfig) -> Self {
        Self::new(
            config.wizard,
            Arc::new(HttpPlanClient::new(config.plan_service.clone())),
        )
    }

    /// Replace the clock used for the goal target date check
    #[must_use]
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Session identifier used to correlate logs and errors
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> WizardState {
        self.lock_state().clone()
    }

    /// Snapshot of the accumulated profile
    #[must_use]
    pub fn profile(&self) -> Profile {
        self.store.current()
    }

    /// Store backing this session
    #[must_use]
    pub const fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Whether an operation (typically the plan request) is running
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the form values for `step`.
    ///
    /// Invalid values come back as [`StepOutcome::Invalid`] without touching the
    /// profile. Submitting the final step awaits the plan service.
    ///
    /// # Errors
    ///
    /// Returns a resource-locked error while another operation is running, and an
    /// invalid-state error when `step` is not the step the wizard is on
    pub async fn submit_step(
        &self,
        step: WizardStep,
        values: &CandidateValues,
    ) -> AppResult<StepOutcome> {
        let _guard = self.begin()?;

        let state = self.state();
        if state.current_step() != Some(step) {
            return Err(self.tag(AppError::invalid_state(format!(
                "Cannot submit {step} while the wizard is at {}",
                state.name()
            ))));
        }

        let result = self.validator.validate(step, values, (self.today)());
        if !result.is_valid {
            info!(
                session_id = %self.session_id,
                step = %step,
                invalid_fields = ?result.invalid_fields(),
                "Step rejected"
            );
            return Ok(StepOutcome::Invalid(result));
        }

        let patch = result
            .into_patch()
            .ok_or_else(|| self.tag(AppError::internal("Valid step produced no update")))?;
        self.store.merge(patch);
        debug!(session_id = %self.session_id, step = %step, "Step accepted");

        match step.next() {
            Some(next) => {
                self.transition(WizardState::at(next));
                Ok(StepOutcome::Advanced(next))
            }
            None => Ok(self.request_plan().await),
        }
    }

    /// Request the plan again with the stored profile.
    ///
    /// Allowed after a failure, or when an earlier request was abandoned before
    /// it finished.
    ///
    /// # Errors
    ///
    /// Returns a resource-locked error while another operation is running, and an
    /// invalid-state error from any other state
    pub async fn retry_plan(&self) -> AppResult<StepOutcome> {
        let _guard = self.begin()?;
        let state = self.state();
        if !matches!(
            state,
            WizardState::PlanFailed(_) | WizardState::PlanRequested
        ) {
            return Err(self.tag(AppError::invalid_state(format!(
                "Cannot retry the plan request while the wizard is at {}",
                state.name()
            ))));
        }
        Ok(self.request_plan().await)
    }

    /// Go back to an already completed step, keeping every stored field
    ///
    /// # Errors
    ///
    /// Returns a resource-locked error while another operation is running, and an
    /// invalid-state error if `step` has not been reached yet
    pub fn edit(&self, step: WizardStep) -> AppResult<()> {
        let _guard = self.begin()?;
        let state = self.state();
        let target = WizardState::at(step);
        if target.progress() > state.progress() {
            return Err(self.tag(AppError::invalid_state(format!(
                "Cannot edit {step} before it has been reached"
            ))));
        }
        self.transition(target);
        Ok(())
    }

    /// Discard the profile and start over
    ///
    /// # Errors
    ///
    /// Returns a resource-locked error while another operation is running
    pub fn reset(&self) -> AppResult<()> {
        let _guard = self.begin()?;
        self.store.reset();
        self.transition(WizardState::ProfileSetup);
        Ok(())
    }

    async fn request_plan(&self) -> StepOutcome {
        self.transition(WizardState::PlanRequested);
        let profile = self.store.current();

        match self.plan_service.generate(&profile).await {
            Ok(response) => {
                let result = classify(response);
                self.transition(WizardState::PlanReady(result.clone()));
                StepOutcome::PlanReady(result)
            }
            Err(e) => {
                warn!(session_id = %self.session_id, error = %e, "Plan request failed");
                self.transition(WizardState::PlanFailed(e.message.clone()));
                StepOutcome::PlanFailed(e.message)
            }
        }
    }

    fn begin(&self) -> AppResult<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlight(&self.in_flight))
            .map_err(|_| {
                debug!(session_id = %self.session_id, "Rejected overlapping wizard operation");
                self.tag(AppError::resource_locked(
                    "A plan request is already in progress",
                ))
            })
    }

    fn transition(&self, next: WizardState) {
        let mut state = self.lock_state();
        info!(
            session_id = %self.session_id,
            from = state.name(),
            to = next.name(),
            "Wizard transition"
        );
        *state = next;
    }

    fn lock_state(&self) -> MutexGuard<'_, WizardState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Wizard state lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn tag(&self, error: AppError) -> AppError {
        error.with_request_id(self.session_id.to_string())
    }
}
