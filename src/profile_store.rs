// ABOUTME: In-memory store for the profile accumulated across wizard steps
// ABOUTME: Merges validated partial updates under a single lock and hands out snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{Profile, ProfilePatch};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// Single mutable profile for one wizard session.
///
/// Cloning shares the same underlying profile. Every update happens under one
/// lock, so a merge is never observed half-applied.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: Arc<Mutex<Profile>>,
}

impl ProfileStore {
    /// Create a store holding the all-default profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Profile> {
        self.profile.lock().unwrap_or_else(|poisoned| {
            warn!("Profile store lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Apply a partial update and return the resulting snapshot.
    ///
    /// Only keys present in `patch` are overwritten; collections are replaced wholesale.
    pub fn merge(&self, patch: ProfilePatch) -> Profile {
        let fields = patch.present_fields();
        let mut profile = self.lock();
        profile.apply(patch);
        debug!(fields = ?fields, "Merged profile update");
        profile.clone()
    }

    /// Read-only snapshot of the current profile
    #[must_use]
    pub fn current(&self) -> Profile {
        self.lock().clone()
    }

    /// Discard everything and start over from the default profile
    pub fn reset(&self) {
        *self.lock() = Profile::default();
        debug!("Profile store reset");
    }
}
