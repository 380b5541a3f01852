//! Caching layer for breed lookups.
//!
//! Provides [`CachingBreedFetcher`], a memoizing wrapper that can be placed
//! in front of any [`crate::domain::BreedFetcher`] implementation.

mod caching_fetcher;

pub use caching_fetcher::CachingBreedFetcher;
