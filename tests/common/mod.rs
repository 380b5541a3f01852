#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use breed_fetcher::prelude::*;

/// Wrapper that counts how many lookups reach the fetcher it decorates.
///
/// Used to verify the caching layer's forwarding behavior from the outside,
/// independently of its own `calls_made()` bookkeeping. Keep a clone of
/// [`Self::counter`] around to observe the count after the wrapper has been
/// moved into a caching fetcher.
pub struct CountingFetcher<F: BreedFetcher> {
    inner: F,
    lookups: Arc<AtomicUsize>,
}

impl<F: BreedFetcher> CountingFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.lookups)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<F: BreedFetcher> BreedFetcher for CountingFetcher<F> {
    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, FetchError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.sub_breeds(breed).await
    }
}

/// The underlying data set used across the integration tests.
pub fn sample_source() -> StaticBreedFetcher {
    StaticBreedFetcher::new()
        .with_breed("akita", Vec::<String>::new())
        .with_breed("beagle", vec!["english", "miniature"])
        .with_breed("hound", vec!["afghan", "basset", "blood"])
}
