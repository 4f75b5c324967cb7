// ABOUTME: Fitness calculations derived from the accumulated profile
// ABOUTME: Currently energy balance metrics (BMR, TDEE, daily calorie change)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Energy balance metrics for a profile
pub mod profile_metrics;

pub use profile_metrics::{calculate_mifflin_st_jeor, calculate_tdee, ProfileMetrics};
