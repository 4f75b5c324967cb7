// ABOUTME: External service clients (plan generation, image search)
// ABOUTME: Trait seams let the wizard and image resolver run against mocks in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

/// Image search client
pub mod image_search;
/// Plan generation client
pub mod plan_client;

pub use image_search::{ImageSearch, SerpImageClient};
pub use plan_client::{HttpPlanClient, PlanService};
