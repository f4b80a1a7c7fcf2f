use serde::{Deserialize, Serialize};

use crate::error::ClientError;

pub(super) const JSON_RPC_PATH: &str = "/json_rpc";

#[derive(Serialize)]
pub(super) struct JsonRpcRequest<'a, P> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: u64,
    pub(super) method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) params: Option<&'a P>,
}

#[derive(Deserialize)]
pub(super) struct JsonRpcResponse {
    #[serde(default)]
    pub(super) result: Option<serde_json::Value>,
    #[serde(default)]
    pub(super) error: Option<serde_json::Value>,
}

/// Parse a JSON-RPC error value into a structured `ClientError`.
///
/// Errors shaped as `{"code": <int>, "message": <string>, "data"?: ..}`
/// become `ClientError::Rpc`; anything else is a malformed envelope.
pub(super) fn parse_jsonrpc_error(err: serde_json::Value) -> ClientError {
    #[derive(Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
        #[serde(default)]
        data: Option<serde_json::Value>,
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => ClientError::Rpc {
            code: parsed.code,
            message: parsed.message,
            data: parsed.data,
        },
        Err(_) => ClientError::Decode(format!("non-standard JSON-RPC error: {err}")),
    }
}
