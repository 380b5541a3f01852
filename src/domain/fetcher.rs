//! Lookup trait for breed data access.

use crate::error::FetchError;
use async_trait::async_trait;

/// Lookup interface for resolving a breed to its sub-breed names.
///
/// The breed name is treated as an opaque, case-sensitive identifier;
/// implementations decide whether and how to normalize it.
///
/// # Implementations
///
/// - [`crate::infrastructure::dog_api::DogApiFetcher`] - dog.ceo REST API client
/// - [`crate::infrastructure::fixture::StaticBreedFetcher`] - in-memory fixture
/// - [`crate::infrastructure::cache::CachingBreedFetcher`] - memoizing wrapper
///   around any other implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedFetcher: Send + Sync {
    /// Resolves a breed name to its list of sub-breed names.
    ///
    /// A breed with no sub-breeds resolves to an empty list; that is a
    /// successful outcome, distinct from the breed not existing at all.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::BreedNotFound`] if the breed does not exist in
    /// the underlying source.
    ///
    /// Returns [`FetchError::Upstream`] or [`FetchError::InvalidResponse`]
    /// on transport or payload failures.
    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, FetchError>;
}
