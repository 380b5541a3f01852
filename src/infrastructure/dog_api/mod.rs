//! dog.ceo REST API integration.

mod fetcher;

pub use fetcher::DogApiFetcher;
