use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for gateway calls. An empty result set is a valid
/// response, never an error, so it has no variant here.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Http { status: StatusCode, body: String },
}
