//! Infrastructure layer for concrete breed fetchers.
//!
//! This layer implements the [`crate::domain::BreedFetcher`] interface
//! defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Memoizing wrapper with an upstream call counter
//! - [`dog_api`] - dog.ceo REST API client
//! - [`fixture`] - In-memory fetcher for offline runs and tests

pub mod cache;
pub mod dog_api;
pub mod fixture;
