use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::DaemonConfig;
use crate::error::{ClientError, TransportError};
use crate::rpc::{HttpRequest, Transport};

use super::connection::{build_headers, endpoint_url, parse_connection};
use super::protocol::{parse_jsonrpc_error, JsonRpcRequest, JsonRpcResponse, JSON_RPC_PATH};
use super::transport::ReqwestTransport;

/// Monero daemon RPC client.
///
/// Every call performs exactly one HTTP request and returns either the fully
/// decoded response or a single [`ClientError`]. Configuration is fixed at
/// construction, so one client can be shared by any number of concurrent
/// callers.
pub struct DaemonClient {
    transport: Arc<dyn Transport>,
    address: String,
    headers: HeaderMap,
    next_id: AtomicU64,
}

impl DaemonClient {
    /// Validate `config` and build a client. No network activity happens
    /// here; a bad address or header is reported immediately instead of on
    /// the first call.
    pub fn new(config: DaemonConfig) -> Result<Self, ClientError> {
        let address = parse_connection(&config.address)?;
        let headers = build_headers(&config.custom_headers)?;
        let transport = match config.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        Ok(Self {
            transport,
            address,
            headers,
            next_id: AtomicU64::new(initial_request_id()),
        })
    }

    /// Base address with any trailing `/` removed.
    pub fn address(&self) -> &str {
        &self.address
    }

    fn reserve_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    // ==========================================================================
    // Dispatch path A: JSON-RPC envelope on /json_rpc
    // ==========================================================================

    pub(super) async fn json_rpc<P, R>(&self, method: &str, params: &P) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        self.json_rpc_inner(method, Some(params)).await
    }

    pub(super) async fn json_rpc_bare<R>(&self, method: &str) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        self.json_rpc_inner::<(), R>(method, None).await
    }

    async fn json_rpc_inner<P, R>(&self, method: &str, params: Option<&P>) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let id = self.reserve_request_id();
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.is_some(),
            "rpc call"
        );
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        let body = serde_json::to_vec(&req).map_err(ClientError::Encode)?;

        let raw = self.send(Method::POST, JSON_RPC_PATH, Some(body)).await?;
        let decoded: JsonRpcResponse = serde_json::from_slice(&raw).map_err(|e| {
            ClientError::Decode(format!(
                "decode JSON-RPC response: {e}; body={}",
                String::from_utf8_lossy(&raw)
            ))
        })?;

        if let Some(err) = decoded.error {
            debug!(rpc.id = id, rpc.method = method, "rpc call returned an error");
            return Err(parse_jsonrpc_error(err));
        }

        let result = decoded.result.ok_or_else(|| {
            ClientError::Decode(format!(
                "JSON-RPC response to `{method}` carries neither result nor error"
            ))
        })?;
        serde_json::from_value(result)
            .map_err(|e| ClientError::Decode(format!("invalid `{method}` result: {e}")))
    }

    // ==========================================================================
    // Dispatch path B: plain JSON on a dedicated endpoint
    // ==========================================================================

    /// `GET <address><path>` for endpoints that take no parameters.
    pub(super) async fn get_other<R>(&self, path: &str) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        debug!(rpc.path = path, "rpc call");
        let raw = self.send(Method::GET, path, None).await?;
        decode_other(path, &raw)
    }

    /// `POST <address><path>` with `params` as the JSON body.
    pub(super) async fn post_other<P, R>(&self, path: &str, params: &P) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        debug!(rpc.path = path, "rpc call");
        let body = serde_json::to_vec(params).map_err(ClientError::Encode)?;
        let raw = self.send(Method::POST, path, Some(body)).await?;
        decode_other(path, &raw)
    }

    // ==========================================================================
    // Shared round trip
    // ==========================================================================

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ClientError> {
        let request = HttpRequest {
            method,
            url: endpoint_url(&self.address, path)?,
            headers: self.headers.clone(),
            body,
        };

        let response = self
            .transport
            .round_trip(request)
            .await
            .map_err(TransportError::Send)?;
        let status = response.status;
        debug!(rpc.path = path, %status, body_len = response.body.len(), "rpc response");
        trace!(
            rpc.path = path,
            body = %String::from_utf8_lossy(&response.body),
            "rpc response body"
        );

        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }
            .into());
        }

        Ok(response.body)
    }
}

impl fmt::Debug for DaemonClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DaemonClient")
            .field("address", &self.address)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

fn decode_other<R: DeserializeOwned>(path: &str, raw: &[u8]) -> Result<R, ClientError> {
    serde_json::from_slice(raw).map_err(|e| {
        ClientError::Decode(format!(
            "invalid `{path}` response: {e}; body={}",
            String::from_utf8_lossy(raw)
        ))
    })
}

fn initial_request_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
