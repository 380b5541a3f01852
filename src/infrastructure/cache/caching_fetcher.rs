//! Memoizing wrapper around a breed fetcher.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::BreedFetcher;
use crate::error::FetchError;

/// Cache map and upstream call counter, guarded together.
struct CacheState {
    entries: HashMap<String, Vec<String>>,
    calls_made: u64,
}

/// A [`BreedFetcher`] that remembers successful lookups.
///
/// Wraps another fetcher and serves repeat queries from an in-memory map,
/// reducing the load on the underlying source. The number of calls that
/// actually reach the inner fetcher is recorded and observable via
/// [`Self::calls_made`].
///
/// # Caching Policy
///
/// - **Hit**: the cached list is returned as-is; the call counter does not move.
/// - **Miss**: the counter is incremented, then the inner fetcher is invoked.
///   A successful result is stored under the queried breed name and returned.
/// - **Failure**: the error is propagated unchanged and nothing is stored, so
///   a repeat query for the same breed is forwarded (and counted) again. This
///   applies to [`FetchError::BreedNotFound`] and transport errors alike.
///
/// Entries are never evicted, expired, or invalidated; the cache lives as
/// long as the wrapper does.
///
/// # Synchronization
///
/// A single mutex guards the map and the counter, and is held across the
/// forwarded call. Concurrent lookups therefore serialize, which keeps the
/// bookkeeping exact: hits never bump the counter, each miss bumps it exactly
/// once, and a breed is written at most once.
pub struct CachingBreedFetcher<F: BreedFetcher> {
    inner: F,
    state: Mutex<CacheState>,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Wraps `inner` with an empty cache and a zero call counter.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                calls_made: 0,
            }),
        }
    }

    /// Number of lookups forwarded to the inner fetcher so far.
    ///
    /// Counts every forwarded attempt, including ones that failed.
    /// Cache hits are invisible to this counter.
    pub async fn calls_made(&self) -> u64 {
        self.state.lock().await.calls_made
    }

    /// Number of breeds currently held in the cache.
    pub async fn cache_size(&self) -> usize {
        self.state.lock().await.entries.len()
    }
}

#[async_trait]
impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, FetchError> {
        let mut state = self.state.lock().await;

        if let Some(cached) = state.entries.get(breed) {
            debug!("cache hit: {breed}");
            return Ok(cached.clone());
        }

        state.calls_made += 1;
        debug!("cache miss: {breed}, forwarding to inner fetcher");

        let sub_breeds = self.inner.sub_breeds(breed).await?;

        state.entries.insert(breed.to_string(), sub_breeds.clone());
        Ok(sub_breeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockBreedFetcher;

    #[tokio::test]
    async fn test_hit_returns_cached_list_without_counting() {
        let mut mock = MockBreedFetcher::new();
        mock.expect_sub_breeds()
            .withf(|breed| breed == "beagle")
            .times(1)
            .returning(|_| Ok(vec!["english".to_string(), "miniature".to_string()]));

        let caching = CachingBreedFetcher::new(mock);

        let first = caching.sub_breeds("beagle").await.unwrap();
        assert_eq!(first, vec!["english", "miniature"]);
        assert_eq!(caching.calls_made().await, 1);

        let second = caching.sub_breeds("beagle").await.unwrap();
        assert_eq!(second, first);
        assert_eq!(caching.calls_made().await, 1);
    }

    #[tokio::test]
    async fn test_miss_counts_once_per_breed() {
        let mut mock = MockBreedFetcher::new();
        mock.expect_sub_breeds()
            .times(2)
            .returning(|_| Ok(vec![]));

        let caching = CachingBreedFetcher::new(mock);

        caching.sub_breeds("akita").await.unwrap();
        assert_eq!(caching.calls_made().await, 1);

        caching.sub_breeds("husky").await.unwrap();
        assert_eq!(caching.calls_made().await, 2);
    }

    #[tokio::test]
    async fn test_not_found_is_not_cached() {
        let mut mock = MockBreedFetcher::new();
        mock.expect_sub_breeds()
            .withf(|breed| breed == "unknown")
            .times(2)
            .returning(|breed| Err(FetchError::not_found(breed)));

        let caching = CachingBreedFetcher::new(mock);

        let first = caching.sub_breeds("unknown").await;
        assert!(matches!(first, Err(FetchError::BreedNotFound { .. })));
        assert_eq!(caching.calls_made().await, 1);

        // Forwarded again: the negative result was not cached.
        let second = caching.sub_breeds("unknown").await;
        assert!(matches!(second, Err(FetchError::BreedNotFound { .. })));
        assert_eq!(caching.calls_made().await, 2);
        assert_eq!(caching.cache_size().await, 0);
    }

    #[tokio::test]
    async fn test_upstream_error_propagates_uncached() {
        let mut mock = MockBreedFetcher::new();
        mock.expect_sub_breeds()
            .times(2)
            .returning(|_| Err(FetchError::upstream("connection refused")));

        let caching = CachingBreedFetcher::new(mock);

        let result = caching.sub_breeds("beagle").await;
        assert!(matches!(result, Err(FetchError::Upstream(_))));
        assert_eq!(caching.calls_made().await, 1);

        let result = caching.sub_breeds("beagle").await;
        assert!(matches!(result, Err(FetchError::Upstream(_))));
        assert_eq!(caching.calls_made().await, 2);
        assert_eq!(caching.cache_size().await, 0);
    }

    #[tokio::test]
    async fn test_empty_list_is_a_cacheable_success() {
        let mut mock = MockBreedFetcher::new();
        mock.expect_sub_breeds()
            .withf(|breed| breed == "akita")
            .times(1)
            .returning(|_| Ok(vec![]));

        let caching = CachingBreedFetcher::new(mock);

        assert_eq!(caching.sub_breeds("akita").await.unwrap(), Vec::<String>::new());
        assert_eq!(caching.sub_breeds("akita").await.unwrap(), Vec::<String>::new());
        assert_eq!(caching.calls_made().await, 1);
        assert_eq!(caching.cache_size().await, 1);
    }

    #[tokio::test]
    async fn test_cached_order_is_preserved() {
        let mut mock = MockBreedFetcher::new();
        mock.expect_sub_breeds().times(1).returning(|_| {
            Ok(vec![
                "afghan".to_string(),
                "basset".to_string(),
                "blood".to_string(),
            ])
        });

        let caching = CachingBreedFetcher::new(mock);

        let first = caching.sub_breeds("hound").await.unwrap();
        let second = caching.sub_breeds("hound").await.unwrap();
        assert_eq!(second, vec!["afghan", "basset", "blood"]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_keys_are_matched_exactly() {
        let mut mock = MockBreedFetcher::new();
        mock.expect_sub_breeds()
            .times(2)
            .returning(|_| Ok(vec![]));

        let caching = CachingBreedFetcher::new(mock);

        caching.sub_breeds("Akita").await.unwrap();
        // Different spelling is a different key: forwarded again.
        caching.sub_breeds("akita").await.unwrap();
        assert_eq!(caching.calls_made().await, 2);
        assert_eq!(caching.cache_size().await, 2);
    }
}
