//! Records API error types.

use thiserror::Error;

/// Errors that can occur when talking to the records API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// `error` field of the JSON body, or the raw body.
        message: String,
    },

    /// A success response whose body does not match the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request payload could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Input rejected before any request was sent.
    #[error(transparent)]
    Core(#[from] atl_core::CoreError),
}
