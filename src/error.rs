use thiserror::Error;

/// Errors returned by sdapi/v1 operations.
///
/// One variant per failure point in the request pipeline; nothing is retried
/// internally. The underlying cause is always reachable through
/// [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum SdError {
    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request URL could not be built from the configured endpoint.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// Network-level request failure with context.
    #[error("{context}: {source}")]
    Network {
        context: String,
        source: reqwest::Error,
    },

    /// The response body could not be read to completion.
    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    /// The server returned a non-200 HTTP status. Carries the literal
    /// response body for diagnostics.
    #[error("server returned HTTP {status}, body: {body}")]
    Http { status: u16, body: String },

    /// The response body was not valid JSON for the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SdError>;
