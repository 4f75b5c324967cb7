// ABOUTME: Resolves batches of recipe and exercise names to image URLs through the query cache
// ABOUTME: Keeps output in input order and supports cooperative cancellation of a batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::cache::QueryCache;
use crate::config::ImageSearchConfig;
use crate::errors::{AppError, AppResult};
use crate::external::{ImageSearch, SerpImageClient};
use futures_util::future::join_all;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::debug;

struct ResolverInner {
    cache: QueryCache,
    search: Arc<dyn ImageSearch>,
    limiter: Option<Arc<Semaphore>>,
}

/// Batch image lookup over a shared [`QueryCache`].
///
/// Cloning shares the cache, the search client and the concurrency limit.
#[derive(Clone)]
pub struct ImageResolver {
    inner: Arc<ResolverInner>,
}

impl ImageResolver {
    /// Create a resolver.
    ///
    /// `max_concurrency` caps lookups that actually reach the search service;
    /// cache hits and coalesced waits never take a slot.
    #[must_use]
    pub fn new(
        search: Arc<dyn ImageSearch>,
        cache: QueryCache,
        max_concurrency: Option<usize>,
    ) -> Self {
        let limiter = max_concurrency
            .filter(|limit| *limit > 0)
            .map(|limit| Arc::new(Semaphore::new(limit)));
        Self {
            inner: Arc::new(ResolverInner {
                cache,
                search,
                limiter,
            }),
        }
    }

    /// Resolver backed by the HTTP image search client
    #[must_use]
    pub fn from_config(config: &ImageSearchConfig, cache: QueryCache) -> Self {
        let max_concurrency = config.max_concurrency;
        Self::new(
            Arc::new(SerpImageClient::new(config.clone())),
            cache,
            max_concurrency,
        )
    }

    /// Cache shared by this resolver
    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.inner.cache
    }

    /// URL for one query, `""` when the lookup fails or finds nothing
    pub async fn resolve(&self, query: &str) -> String {
        let search = Arc::clone(&self.inner.search);
        let limiter = self.inner.limiter.clone();
        self.inner
            .cache
            .get_or_resolve(query, move |query| async move {
                let _permit = match limiter {
                    Some(limiter) => Some(limiter.acquire_owned().await.map_err(|e| {
                        AppError::internal(format!("Image lookup limiter closed: {e}"))
                    })?),
                    None => None,
                };
                search.search(&query).await
            })
            .await
    }

    /// URLs for every query, same length and order as the input.
    ///
    /// All lookups run concurrently; completion order does not affect the output.
    pub async fn resolve_all<S: AsRef<str>>(&self, queries: &[S]) -> Vec<String> {
        join_all(queries.iter().map(|query| self.resolve(query.as_ref()))).await
    }

    /// Start a cancellable batch.
    ///
    /// `sink` receives `(index, query, url)` as each lookup settles, in completion
    /// order, for as long as the batch is live. Cancelling (or dropping) the returned
    /// [`ImageBatch`] stops further commits; lookups already in flight still finish
    /// and fill the cache.
    pub fn resolve_batch<F>(&self, queries: Vec<String>, sink: F) -> ImageBatch
    where
        F: Fn(usize, &str, &str) + Send + Sync + 'static,
    {
        let live = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&live);
        let resolver = self.clone();
        debug!(queries = queries.len(), "Starting image batch");

        let handle = tokio::spawn(async move {
            let lookups = queries.iter().enumerate().map(|(index, query)| {
                let (resolver, flag, sink) = (&resolver, &flag, &sink);
                async move {
                    let url = resolver.resolve(query).await;
                    if flag.load(Ordering::Acquire) {
                        sink(index, query, &url);
                    }
                    url
                }
            });
            join_all(lookups).await
        });

        ImageBatch {
            live,
            handle: Some(handle),
        }
    }
}

/// How a batch ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every lookup settled while the batch was live; URLs in input order
    Completed(Vec<String>),
    /// The batch was cancelled; nothing after the cancellation was committed
    Cancelled,
}

/// Handle to a running image batch. Dropping it cancels the batch.
pub struct ImageBatch {
    live: Arc<AtomicBool>,
    handle: Option<JoinHandle<Vec<String>>>,
}

impl ImageBatch {
    /// Stop committing results from this batch
    pub fn cancel(&self) {
        if self.live.swap(false, Ordering::AcqRel) {
            debug!("Image batch cancelled");
        }
    }

    /// Whether results are still being committed
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Wait for every lookup of the batch to settle
    ///
    /// # Errors
    ///
    /// Returns an error if the batch task panicked
    pub async fn finish(mut self) -> AppResult<BatchOutcome> {
        let Some(handle) = self.handle.take() else {
            return Ok(BatchOutcome::Cancelled);
        };
        let urls = handle
            .await
            .map_err(|e| AppError::internal(format!("Image batch task failed: {e}")))?;
        Ok(if self.is_live() {
            BatchOutcome::Completed(urls)
        } else {
            BatchOutcome::Cancelled
        })
    }
}

impl Drop for ImageBatch {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.cancel();
        }
    }
}
