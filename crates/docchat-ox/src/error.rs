use thiserror::Error;

/// Failures produced by the docchat backend client.
///
/// Every request-level failure is returned as the `Err` arm of a tagged
/// `Result`; nothing in this crate panics or propagates past the client
/// boundary. `MissingEndpoint` is the one construction-time kind and can
/// never occur once a client exists.
#[derive(Debug, Error)]
pub enum DocChatRequestError {
    /// The backend base URL is not configured.
    #[error(
        "backend endpoint is not configured: set the ENDPOINT environment variable to the backend base URL"
    )]
    MissingEndpoint,

    /// Transport-level failure: connection, DNS, TLS, or timeout.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {status}: {body}")]
    Status {
        /// Status code of the response.
        status: reqwest::StatusCode,
        /// Response body, lossily decoded for diagnostics.
        body: String,
    },

    /// A success response carried a body that does not decode.
    #[error("failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
}
