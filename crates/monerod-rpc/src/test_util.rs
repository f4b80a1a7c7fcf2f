//! Shared test helpers for `monerod-rpc` unit tests.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::config::DaemonConfig;
use crate::rpc::mock::MockTransport;
use crate::rpc::{DaemonClient, HttpRequest};

pub const TEST_ADDRESS: &str = "http://127.0.0.1:18081";

// ==============================================================================
// Client Wiring
// ==============================================================================

/// Build a client at [`TEST_ADDRESS`] whose requests all go to `mock`.
pub fn mock_client(mock: &Arc<MockTransport>) -> DaemonClient {
    let config = DaemonConfig::new(TEST_ADDRESS).with_transport(mock.clone());
    DaemonClient::new(config).expect("test config must be valid")
}

/// Wrap `result` in a successful JSON-RPC 2.0 response envelope.
pub fn json_rpc_ok(result: Value) -> Value {
    json!({ "id": "0", "jsonrpc": "2.0", "result": result })
}

/// Parse the JSON body the client sent with `request`.
pub fn request_json(request: &HttpRequest) -> Value {
    let body = request.body.as_deref().expect("request must carry a body");
    serde_json::from_slice(body).expect("request body must be JSON")
}

// ==============================================================================
// Fixtures
// ==============================================================================

/// A block header as the node reports it, at `height`.
pub fn sample_block_header(height: u64) -> Value {
    json!({
        "block_size": 5500,
        "block_weight": 5500,
        "cumulative_difficulty": 86_164_894_009_456_483u64,
        "depth": 0,
        "difficulty": 227_026_389_695u64,
        "hash": "77b98d63bf1b2d1ea2d0b6a3a4e7f0b6c5bc3a1d7a6f0e0a47d3e4a5d3d4c2e1",
        "height": height,
        "long_term_weight": 5500,
        "major_version": 14,
        "miner_tx_hash": "7dee2a2db4b7c6cbc7bc5a2b2e5a3f0cdc3b0ef8d5e3f5e4e2a0b0e9c4f3a2b1",
        "minor_version": 14,
        "nonce": 1_885_649_739u64,
        "num_txes": 37,
        "orphan_status": false,
        "pow_hash": "",
        "prev_hash": "22c72248ae9c5a2863c94735d710a3525c499f70707d1c2f395169bc5c8a0da3",
        "reward": 1_181_337_498_013u64,
        "timestamp": 1_612_088_597u64,
        "wide_cumulative_difficulty": "0x1321e83bb8af763",
        "wide_difficulty": "0x34dbd3cabf"
    })
}
