//! Petfinder API client.
//!
//! Every fetch performs its own client-credentials exchange; tokens are never
//! cached or shared between calls.

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::models::{AnimalRecord, AnimalResponse, AnimalsResponse, TokenResponse};

/// Base URL for the Petfinder v2 API.
pub const PETFINDER_API_BASE: &str = "https://api.petfinder.com/v2";

/// Fixed page size for the listing fetch. No follow-up pages are requested.
pub const LISTING_LIMIT: usize = 50;

/// Credentials and endpoint for the Petfinder API.
#[derive(Clone)]
pub struct PetfinderConfig {
    pub client_id: String,
    pub client_secret: String,
    /// API root without a trailing slash.
    pub base_url: String,
}

impl fmt::Debug for PetfinderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PetfinderConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl PetfinderConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: PETFINDER_API_BASE.to_string(),
        }
    }

    /// Points the client at a different API root (for testing).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Client for the Petfinder animal listing API.
#[derive(Debug, Clone)]
pub struct PetfinderClient {
    client: reqwest::Client,
    config: PetfinderConfig,
}

impl PetfinderClient {
    pub fn new(config: PetfinderConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("PetDash/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &PetfinderConfig {
        &self.config
    }

    /// Exchanges the client credentials for a bearer token.
    pub async fn request_token(&self) -> Result<String, FetchError> {
        let url = format!("{}/oauth2/token", self.config.base_url);
        let body = format!(
            "grant_type=client_credentials&client_id={}&client_secret={}",
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.client_secret)
        );

        debug!("Requesting access token from {}", url);
        let response = self
            .client
            .post(&url)
            .header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            )
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Token { status });
        }

        let token: TokenResponse = decode_body(response).await?;
        Ok(token.access_token)
    }

    /// Fetches up to [`LISTING_LIMIT`] animals.
    pub async fn fetch_animals(&self) -> Result<Vec<AnimalRecord>, FetchError> {
        let token = self.request_token().await?;
        let url = format!("{}/animals?limit={}", self.config.base_url, LISTING_LIMIT);

        let listing: AnimalsResponse = self.get_authorized(&url, &token).await?;
        info!(count = listing.animals.len(), "Fetched animal listing");
        Ok(listing.animals)
    }

    /// Fetches a single animal by identifier, re-authenticating from scratch.
    pub async fn fetch_animal(&self, id: u64) -> Result<AnimalRecord, FetchError> {
        let token = self.request_token().await?;
        let url = format!("{}/animals/{}", self.config.base_url, id);

        let detail: AnimalResponse = self.get_authorized(&url, &token).await?;
        info!(id, "Fetched animal detail");
        Ok(detail.animal)
    }

    async fn get_authorized<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
    ) -> Result<T, FetchError> {
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Data { status });
        }

        decode_body(response).await
    }
}

async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
