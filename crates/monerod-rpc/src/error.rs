use std::convert::Infallible;

use reqwest::StatusCode;

/// Boxed error returned by [`Transport`](crate::Transport) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Malformed address, header set, or endpoint URL.
    #[error("failed to create request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Fault reported inside a JSON-RPC response envelope.
    #[error("JSON-RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to send request: {0}")]
    Send(#[source] BoxError),

    #[error("unexpected status code: {status}, body: {body}")]
    Status { status: StatusCode, body: String },
}

impl From<Infallible> for ClientError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
