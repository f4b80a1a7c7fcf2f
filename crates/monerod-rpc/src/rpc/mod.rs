//! Daemon RPC layer.
//!
//! Defines the [`Transport`] seam that performs one HTTP round trip, the
//! default `reqwest` implementation ([`ReqwestTransport`]), the
//! [`DaemonClient`] that dispatches every operation, and a test mock
//! (`mock::MockTransport`).

mod http_adapter;
pub mod types;

pub use http_adapter::{DaemonClient, ReqwestTransport};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};

use crate::error::BoxError;

/// A fully built outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Status and raw body of a completed round trip.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Performs a single HTTP round trip.
///
/// Implementations must be safe to share between concurrent calls; the
/// client never retries, so any timeout, proxy or TLS policy lives here.
/// Non-2xx statuses are returned as responses, not errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}
