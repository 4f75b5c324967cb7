// ABOUTME: Caching layer for the FitPlan core
// ABOUTME: Holds the per-session query cache used by image resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Query text to image URL cache with in-flight coalescing
pub mod query_cache;

pub use query_cache::{normalize_query, QueryCache};
