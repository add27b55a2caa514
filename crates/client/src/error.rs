//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by API operations.
///
/// Every operation fails in one of three ways: the request never completed
/// (`Transport`), the server answered outside the 2xx range (`Status`), or
/// the 2xx body did not match the declared schema (`Decode`). No operation
/// retries or recovers on its own.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read
    /// (connection, DNS, TLS, timeout).
    #[error("error sending request: {0}")]
    Transport(#[from] reqwest::Error),

    /// Credential verification was rejected.
    #[error("failed to authenticate: {0}")]
    Auth(String),

    /// The server answered with a non-2xx status. Carries the raw body
    /// verbatim; `message` holds the server's own description when the body
    /// matches the documented error envelope.
    #[error("unexpected status code: {status}, body: {body}")]
    Status {
        /// The HTTP status code.
        status: StatusCode,
        /// Message parsed from the error envelope, when present.
        message: Option<String>,
        /// The raw response body.
        body: String,
    },

    /// A 2xx body could not be parsed into the declared response type.
    #[error("error decoding response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ClientError>;
