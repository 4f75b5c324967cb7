// ABOUTME: Session cache from normalized query text to resolved image URL
// ABOUTME: Coalesces concurrent lookups per key and never records failed resolutions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

type PendingLookup = Shared<BoxFuture<'static, Option<String>>>;

#[derive(Default)]
struct CacheState {
    /// Settled entries; write-once for the life of the session
    resolved: HashMap<String, String>,
    /// At most one outstanding lookup per key
    pending: HashMap<String, PendingLookup>,
}

/// Normalize a query for keying: trim and case-fold
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Query to URL cache shared by every image batch of a session.
///
/// Cloning is cheap and shares state. Lookups run on spawned tasks, so a lookup
/// keeps going and still fills the cache after every caller waiting on it has
/// gone away.
#[derive(Clone, Default)]
pub struct QueryCache {
    state: Arc<Mutex<CacheState>>,
}

impl QueryCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached URL for `query`, resolving it on a miss.
    ///
    /// `resolver` receives the trimmed query text and is only invoked when no entry
    /// and no outstanding lookup exists for the normalized key. A failed or empty
    /// resolution yields `""` and leaves no trace, so the next call retries.
    pub async fn get_or_resolve<F, Fut>(&self, query: &str, resolver: F) -> String
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = AppResult<String>> + Send + 'static,
    {
        let key = normalize_query(query);
        if key.is_empty() {
            return String::new();
        }

        let lookup = {
            let mut state = self.state.lock().await;
            if let Some(url) = state.resolved.get(&key) {
                debug!(query = %key, "Image cache hit");
                return url.clone();
            }
            if let Some(pending) = state.pending.get(&key) {
                debug!(query = %key, "Joining in-flight image lookup");
                pending.clone()
            } else {
                let lookup = self.spawn_lookup(key.clone(), resolver(query.trim().to_owned()));
                state.pending.insert(key, lookup.clone());
                lookup
            }
        };

        lookup.await.unwrap_or_default()
    }

    // Must be called with the state lock held so the pending entry is in place
    // before the task can remove it.
    fn spawn_lookup<Fut>(&self, key: String, resolution: Fut) -> PendingLookup
    where
        Fut: Future<Output = AppResult<String>> + Send + 'static,
    {
        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            // A panicking resolver must still release the pending slot
            let outcome = AssertUnwindSafe(resolution).catch_unwind().await;
            let mut state = state.lock().await;
            state.pending.remove(&key);
            match outcome {
                Ok(Ok(url)) if !url.trim().is_empty() => {
                    Some(state.resolved.entry(key).or_insert(url).clone())
                }
                Ok(Ok(_)) => {
                    debug!(query = %key, "Image lookup found nothing, not caching");
                    None
                }
                Ok(Err(e)) => {
                    warn!(query = %key, error = %e, "Image lookup failed, not caching");
                    None
                }
                Err(_) => {
                    warn!(query = %key, "Image lookup panicked, not caching");
                    None
                }
            }
        });
        async move { handle.await.ok().flatten() }.boxed().shared()
    }

    /// Settled URL for `query` without triggering a lookup
    pub async fn peek(&self, query: &str) -> Option<String> {
        let key = normalize_query(query);
        self.state.lock().await.resolved.get(&key).cloned()
    }

    /// Number of settled entries
    pub async fn len(&self) -> usize {
        self.state.lock().await.resolved.len()
    }

    /// Whether nothing has been resolved yet
    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.resolved.is_empty()
    }

    /// Number of lookups currently in flight
    pub async fn pending(&self) -> usize {
        self.state.lock().await.pending.len()
    }
}
