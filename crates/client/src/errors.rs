//! Client Errors

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Form input could not be turned into a product.
    #[error("invalid product form: {0}")]
    InvalidDraft(&'static str),

    /// A success response did not have the expected shape.
    #[error("unexpected response body: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {}", messages.join("; "))]
    Api {
        status: StatusCode,
        messages: Vec<String>,
    },

    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
