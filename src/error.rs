//! Error types for breed lookups.

/// Errors that can occur while resolving a breed to its sub-breeds.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The queried breed does not exist in the underlying source.
    ///
    /// This outcome is never cached by [`crate::infrastructure::cache::CachingBreedFetcher`]:
    /// a repeat query for the same breed is forwarded upstream again.
    #[error("breed not found: {breed}")]
    BreedNotFound { breed: String },

    /// The upstream request failed (connection, timeout, non-success status).
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The upstream answered, but the payload could not be interpreted.
    #[error("unexpected upstream response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    pub fn not_found(breed: impl Into<String>) -> Self {
        Self::BreedNotFound {
            breed: breed.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Returns true for the "no such breed" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BreedNotFound { .. })
    }
}
