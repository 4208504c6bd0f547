//! Error types for the Sky Bet client.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Client error types.
///
/// Every failure of a request chain surfaces as one of these variants. Nothing
/// is retried or replaced by a default value.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be configured (invalid config or the HTTP client
    /// could not be built).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A builder that already targets an endpoint was re-targeted.
    #[error("Chain error: {0}")]
    Chain(String),

    /// A required query parameter is absent.
    #[error("Missing parameter: the parameter \"{0}\" is missing from the query parameters")]
    MissingParameter(String),

    /// The HTTP exchange did not complete.
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Request failed ({status}): {body}")]
    Request {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// JSON deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query parameters could not be URL-encoded.
    #[error("Query encoding failed: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code for [`Error::Request`] errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
