//! # Breed Fetcher
//!
//! A dog breed sub-breed lookup tool with response caching, backed by the
//! public [dog.ceo](https://dog.ceo/dog-api/) API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::BreedFetcher`] lookup trait
//! - **Infrastructure Layer** ([`infrastructure`]) - Concrete fetchers: the
//!   dog.ceo client, an in-memory fixture, and the caching wrapper
//!
//! ## Caching
//!
//! [`infrastructure::cache::CachingBreedFetcher`] wraps any fetcher and
//! memoizes successful lookups in-process. Repeat queries are served from
//! memory, and the number of lookups that actually reached the underlying
//! source stays observable via `calls_made()`. Failed lookups, including
//! unknown breeds, are never cached.
//!
//! ## Quick Start
//!
//! ```bash
//! # Look up sub-breeds; the repeated argument is served from cache
//! cargo run -- hound beagle hound
//!
//! # Without network access
//! cargo run -- --offline beagle
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FetchError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::BreedFetcher;
    pub use crate::error::FetchError;
    pub use crate::infrastructure::cache::CachingBreedFetcher;
    pub use crate::infrastructure::dog_api::DogApiFetcher;
    pub use crate::infrastructure::fixture::StaticBreedFetcher;
}
