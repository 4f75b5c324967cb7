// ABOUTME: Plan response handling for the final wizard step
// ABOUTME: Re-exports the classifier that turns raw responses into plan outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Plan response classification
pub mod classifier;

pub use classifier::{classify, classify_value};
