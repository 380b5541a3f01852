//! dog.ceo API client implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::BreedFetcher;
use crate::error::FetchError;

/// Payload of `GET /breed/{breed}/list`.
///
/// The API wraps every response in `{"message": ..., "status": ...}`;
/// on success `message` is the array of sub-breed names.
#[derive(Debug, Deserialize)]
struct SubBreedsResponse {
    message: Vec<String>,
    status: String,
}

/// Breed fetcher backed by the public dog.ceo REST API.
///
/// Resolves a breed via `GET {base_url}/breed/{breed}/list`. Breed names are
/// passed through verbatim; the API expects lowercase names and answers 404
/// for anything it does not know.
pub struct DogApiFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl DogApiFetcher {
    /// Creates a client for the given API root (e.g. `https://dog.ceo/api`)
    /// with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        info!("Using dog API at {}", base_url);

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn list_url(&self, breed: &str) -> String {
        format!("{}/breed/{}/list", self.base_url, breed)
    }
}

#[async_trait]
impl BreedFetcher for DogApiFetcher {
    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, FetchError> {
        let url = self.list_url(breed);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::upstream(format!("GET {url} failed: {e}")))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::not_found(breed));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::upstream(format!("HTTP {status}: {body}")));
        }

        let payload: SubBreedsResponse = response
            .json()
            .await
            .map_err(|e| FetchError::invalid_response(format!("Failed to parse response: {e}")))?;

        if payload.status != "success" {
            return Err(FetchError::invalid_response(format!(
                "API reported status '{}'",
                payload.status
            )));
        }

        Ok(payload.message)
    }
}
