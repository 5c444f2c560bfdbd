//! Storefront API errors.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur when talking to the shop's JSON API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The session is missing or expired.
    #[error("unauthorized")]
    Unauthorized,

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,

        /// Response body, as text
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request URL could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Whether the error means the user must sign in again.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
