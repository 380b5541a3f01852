//! In-memory breed fetcher for offline use and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::BreedFetcher;
use crate::error::FetchError;

/// A breed fetcher answering from a fixed in-memory data set.
///
/// Every lookup either returns the configured list or
/// [`FetchError::BreedNotFound`]; there is no transport involved.
///
/// # Use Cases
///
/// - Offline CLI runs (`--offline`)
/// - Integration tests that need a deterministic underlying source
#[derive(Debug, Default)]
pub struct StaticBreedFetcher {
    breeds: HashMap<String, Vec<String>>,
}

impl StaticBreedFetcher {
    /// Creates an empty fetcher; every lookup fails until breeds are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a breed with its sub-breed names.
    pub fn with_breed<I, S>(mut self, breed: &str, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breeds.insert(
            breed.to_string(),
            sub_breeds.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// A small built-in data set mirroring well-known dog.ceo entries.
    pub fn sample() -> Self {
        debug!("Using built-in breed data (offline)");
        Self::new()
            .with_breed("akita", Vec::<String>::new())
            .with_breed("beagle", vec!["english", "miniature"])
            .with_breed("bulldog", vec!["boston", "english", "french"])
            .with_breed("hound", vec!["afghan", "basset", "blood", "english", "ibizan", "plott", "walker"])
            .with_breed("mastiff", vec!["bull", "english", "tibetan"])
            .with_breed("retriever", vec!["chesapeake", "curly", "flatcoated", "golden"])
            .with_breed("spaniel", vec!["blenheim", "brittany", "cocker", "irish", "japanese", "sussex", "welsh"])
            .with_breed("terrier", vec!["american", "australian", "bedlington", "border", "cairn", "yorkshire"])
    }
}

#[async_trait]
impl BreedFetcher for StaticBreedFetcher {
    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, FetchError> {
        self.breeds
            .get(breed)
            .cloned()
            .ok_or_else(|| FetchError::not_found(breed))
    }
}
