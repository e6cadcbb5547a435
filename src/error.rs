//! Error types for PetDash.
//!
//! Fetch failures collapse into a single human-readable message at the
//! handler boundary; the variants only exist so the log line says which
//! step failed.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while talking to the Petfinder API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The token endpoint answered with a non-success status.
    #[error("Failed to fetch token (HTTP {status})")]
    Token { status: StatusCode },

    /// The listing or detail endpoint answered with a non-success status.
    #[error("Failed to fetch pets (HTTP {status})")]
    Data { status: StatusCode },

    /// The request could not be sent or the body could not be read.
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not the JSON shape we expect.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure while assembling configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// JSON error answer for the `/api` routes.
#[derive(Debug)]
pub struct ApiError {
    pub status: axum::http::StatusCode,
    pub message: String,
}

impl ApiError {
    /// The upstream API failed; the caller only sees the message.
    pub fn bad_gateway(err: &FetchError) -> Self {
        Self {
            status: axum::http::StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = axum::Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
