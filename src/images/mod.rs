// ABOUTME: Image resolution for plan days (recipe and exercise pictures)
// ABOUTME: Batches queries through the session query cache with cancellation support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Batch resolver and cancellable batch handle
pub mod resolver;

pub use resolver::{BatchOutcome, ImageBatch, ImageResolver};
