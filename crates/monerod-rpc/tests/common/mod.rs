//! In-process stand-in for monerod used by the integration tests.
//!
//! The stub records every request it receives and answers from a fixed set
//! of fixtures: `/json_rpc` calls are answered by method name inside a
//! JSON-RPC envelope, every other path with a plain JSON body.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use monerod_rpc::{DaemonClient, DaemonConfig};
use serde::Serialize;
use serde_json::{json, Value};

static TRACING_INIT: Once = Once::new();

pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("monerod_rpc=debug")),
            )
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

// ==============================================================================
// Stub Behaviour
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Answer every call from the fixtures below.
    Fixtures,
    /// Answer every call with HTTP 500 and the body `boom`.
    InternalError,
    /// Answer every `/json_rpc` call with a -32601 envelope fault.
    RpcFault,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl RecordedRequest {
    /// The `method` member of an enveloped call.
    pub fn rpc_method(&self) -> Option<&str> {
        self.body.as_ref()?.get("method")?.as_str()
    }

    pub fn rpc_params(&self) -> Option<&Value> {
        self.body.as_ref()?.get("params")
    }
}

struct StubState {
    mode: Mode,
    delay: Option<Duration>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct StubDaemon {
    pub address: String,
    state: Arc<StubState>,
}

impl StubDaemon {
    pub async fn start() -> Self {
        Self::start_with(Mode::Fixtures, None).await
    }

    pub async fn start_with(mode: Mode, delay: Option<Duration>) -> Self {
        init_tracing();

        let state = Arc::new(StubState {
            mode,
            delay,
            requests: Mutex::new(Vec::new()),
        });
        let router = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("stub must bind an ephemeral port");
        let local = listener.local_addr().expect("stub must have a local address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            address: format!("http://{local}"),
            state,
        }
    }

    pub fn client(&self) -> DaemonClient {
        DaemonClient::new(DaemonConfig::new(&self.address)).expect("stub client must build")
    }

    pub fn client_with_headers(&self, headers: &[(&str, &str)]) -> DaemonClient {
        let config = headers
            .iter()
            .fold(DaemonConfig::new(&self.address), |config, (name, value)| {
                config.with_header(*name, *value)
            });
        DaemonClient::new(config).expect("stub client must build")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .expect("stub requests lock poisoned")
            .clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("stub must have received a request")
    }
}

async fn handle(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_owned();
    let body = if body.is_empty() {
        None
    } else {
        Some(serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null))
    };
    state
        .requests
        .lock()
        .expect("stub requests lock poisoned")
        .push(RecordedRequest {
            method,
            path: path.clone(),
            headers,
            body: body.clone(),
        });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    let body = body.unwrap_or(Value::Null);
    match (state.mode, path.as_str()) {
        (Mode::InternalError, _) => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        (Mode::RpcFault, "/json_rpc") => Json(json!({
            "id": body.get("id").cloned().unwrap_or(Value::Null),
            "jsonrpc": "2.0",
            "error": { "code": -32601, "message": "Method not found" }
        }))
        .into_response(),
        (_, "/json_rpc") => {
            let method = body.get("method").and_then(Value::as_str).unwrap_or("");
            let params = body.get("params").cloned().unwrap_or(Value::Null);
            Json(json!({
                "id": body.get("id").cloned().unwrap_or(Value::Null),
                "jsonrpc": "2.0",
                "result": json_rpc_result(method, &params)
            }))
            .into_response()
        }
        (_, path) => Json(other_result(path, &body)).into_response(),
    }
}

// ==============================================================================
// Fixtures
// ==============================================================================

// Every fixture lists each field of its response record, so a decoded
// response re-serialized with `serde_json::to_value` must equal it exactly.

pub const BLOCK_HASH: &str = "e22cf75f39ae720e8b71b3d120a5ac03f0db50bba6379e2850975b4859190bc6";
const MINER_TX_HASH: &str = "2ebd1b37c0c4e2f0ea68cb9d3d4ae9d5c2a4ac9b1b6e4e0f4f0e5b6f2c9c1a1d";
const SEED_HASH: &str = "d432f499205150873b2572b5f033c9c6e4b7c6f3394bd2dd93822cd7085e7307";
pub const POW_HASH: &str = "a2b2e4c5d3f1";

/// Assert that `decoded` re-serializes to exactly `expected`: same field
/// names, same nesting, same values.
pub fn assert_decoded<T: Serialize>(decoded: &T, expected: &Value) {
    let actual = serde_json::to_value(decoded).expect("decoded response must serialize");
    assert_eq!(&actual, expected, "decoded response differs from the fixture");
}

fn ok(mut fields: Value) -> Value {
    if let Some(map) = fields.as_object_mut() {
        map.entry("status").or_insert(json!("OK"));
        map.entry("untrusted").or_insert(json!(false));
    }
    fields
}

pub fn block_header(height: u64) -> Value {
    json!({
        "block_size": 65_853,
        "block_weight": 65_853,
        "cumulative_difficulty": 1_290_883_479_813_339u64,
        "cumulative_difficulty_top64": 0,
        "depth": 1,
        "difficulty": 312_143_416_113u64,
        "difficulty_top64": 0,
        "hash": BLOCK_HASH,
        "height": height,
        "long_term_weight": 65_853,
        "major_version": 16,
        "miner_tx_hash": MINER_TX_HASH,
        "minor_version": 16,
        "nonce": 3_246_014_578u64,
        "num_txes": 29,
        "orphan_status": false,
        "pow_hash": "",
        "prev_hash": "b0e4a5c6ed3bcc8c4b15ed4c4e5bd3d5dfa7f5a0c8cbb5e4c5a4a7c3c6a1a0b9",
        "reward": 600_000_000_000u64,
        "timestamp": 1_666_000_000u64,
        "wide_cumulative_difficulty": "0x4960d0fd6a5db",
        "wide_difficulty": "0x48ad4b9031"
    })
}

fn connection() -> Value {
    json!({
        "address": "95.216.203.255:18080",
        "address_type": 1,
        "avg_download": 1,
        "avg_upload": 2,
        "connection_id": "083c301a3030329a487adb12ad981d2c",
        "current_download": 3,
        "current_upload": 4,
        "height": 2_750_001,
        "host": "95.216.203.255",
        "incoming": false,
        "ip": "95.216.203.255",
        "live_time": 6,
        "local_ip": false,
        "localhost": false,
        "peer_id": "5c5ad6a35dbb5a36",
        "port": "18080",
        "pruning_seed": 387,
        "recv_count": 5_000,
        "recv_idle_time": 7,
        "rpc_credits_per_hash": 0,
        "rpc_port": 18089,
        "send_count": 6_000,
        "send_idle_time": 8,
        "state": "normal",
        "support_flags": 1
    })
}

fn span() -> Value {
    json!({
        "connection_id": "083c301a3030329a487adb12ad981d2c",
        "nblocks": 20,
        "rate": 1_500,
        "remote_address": "95.216.203.255:18080",
        "size": 2_000_000,
        "speed": 100,
        "start_block_height": 2_750_002
    })
}

fn peer(id: u64, host: &str, ip: u64) -> Value {
    json!({
        "id": id,
        "host": host,
        "ip": ip,
        "port": 18080,
        "rpc_port": 18089,
        "rpc_credits_per_hash": 0,
        "last_seen": 1_666_000_000u64,
        "pruning_seed": 0
    })
}

fn tx_info(tx_hash: Value) -> Value {
    json!({
        "as_hex": "0200010200",
        "as_json": "{\"version\": 2}",
        "block_height": 2_749_999,
        "block_timestamp": 1_665_999_880u64,
        "double_spend_seen": false,
        "in_pool": false,
        "output_indices": [66_040_030u64, 66_040_031u64],
        "prunable_as_hex": "",
        "prunable_hash": "0000000000000000000000000000000000000000000000000000000000000000",
        "pruned_as_hex": "",
        "tx_hash": tx_hash
    })
}

fn pool_transaction() -> Value {
    json!({
        "blob_size": 1_500,
        "do_not_relay": false,
        "double_spend_seen": false,
        "fee": 30_000_000,
        "id_hash": "aa",
        "kept_by_block": false,
        "last_failed_height": 0,
        "last_failed_id_hash": "0000000000000000000000000000000000000000000000000000000000000000",
        "last_relayed_time": 1_666_000_100u64,
        "max_used_block_height": 2_749_990,
        "max_used_block_id_hash": BLOCK_HASH,
        "receive_time": 1_666_000_050u64,
        "relayed": 3,
        "tx_blob": "0200010200",
        "tx_json": "{\"version\": 2}",
        "weight": 1_500
    })
}

/// Result payload the stub puts inside the envelope for `method`.
pub fn json_rpc_result(method: &str, params: &Value) -> Value {
    let height_param = params.get("height").and_then(Value::as_u64).unwrap_or(0);
    match method {
        "get_block_count" => ok(json!({ "count": 2_750_001 })),
        "on_get_block_hash" => json!(BLOCK_HASH),
        "calc_pow" => json!(POW_HASH),
        "get_block_template" => ok(json!({
            "blockhashing_blob": "1010f4bae0b4069d",
            "blocktemplate_blob": "1010f4bae0b4069d648e",
            "difficulty": 312_143_416_113u64,
            "difficulty_top64": 0,
            "expected_reward": 600_000_000_000u64,
            "height": 2_750_001,
            "next_seed_hash": "",
            "prev_hash": BLOCK_HASH,
            "reserved_offset": 130,
            "seed_hash": SEED_HASH,
            "seed_height": 2_748_416,
            "wide_difficulty": "0x48ad4b9031"
        })),
        "submit_block" | "set_bans" | "flush_txpool" | "relay_tx" | "flush_cache" => ok(json!({})),
        "generateblocks" => ok(json!({ "blocks": [BLOCK_HASH], "height": 2_750_002 })),
        "get_last_block_header" | "get_block_header_by_hash" => {
            ok(json!({ "block_header": block_header(2_750_000) }))
        }
        "get_block_header_by_height" => ok(json!({ "block_header": block_header(height_param) })),
        "get_block_headers_range" => {
            let start = params.get("start_height").and_then(Value::as_u64).unwrap_or(0);
            let end = params.get("end_height").and_then(Value::as_u64).unwrap_or(start);
            let headers: Vec<Value> = (start..=end).map(block_header).collect();
            ok(json!({ "headers": headers }))
        }
        "get_block" => ok(json!({
            "blob": "1010c58bab9b06b27bdecfc6cd0a46172d136c08831cf67660377ba992332363228b1b722781e7807e07f502cef8a70101ff92f8a7010180e0a596bb1103d7cbf826b665d7a532c316982dc8dbc24f285cbc18bbcc27c7164cd9b3277a85d034e91fd00b0d03a05c4520a7a45f80e88b3e74ded47a9d3b8b6b5e3d5f8bd0f2f0b7b1d2f4b6080e",
            "block_header": block_header(height_param),
            "json": "{\"major_version\": 16}",
            "miner_tx_hash": MINER_TX_HASH,
            "tx_hashes": ["d6e48158472848e6687173a91ae6eebfa3e1d778e65252ee99d7515d63090408"]
        })),
        "get_connections" => ok(json!({ "connections": [connection()] })),
        "get_info" => ok(json!({
            "adjusted_time": 1_666_000_010u64,
            "alt_blocks_count": 3,
            "block_size_limit": 600_000,
            "block_size_median": 300_000,
            "block_weight_limit": 600_000,
            "block_weight_median": 300_000,
            "bootstrap_daemon_address": "",
            "busy_syncing": false,
            "cumulative_difficulty": 1_290_883_479_813_339u64,
            "cumulative_difficulty_top64": 0,
            "database_size": 180_388_626_432u64,
            "difficulty": 312_143_416_113u64,
            "difficulty_top64": 0,
            "free_space": 18_446_744_073_709_551_615u64,
            "grey_peerlist_size": 4_991,
            "height": 2_750_001,
            "height_without_bootstrap": 2_750_001,
            "incoming_connections_count": 12,
            "mainnet": true,
            "nettype": "mainnet",
            "offline": false,
            "outgoing_connections_count": 8,
            "rpc_connections_count": 1,
            "stagenet": false,
            "start_time": 1_665_900_000u64,
            "synchronized": true,
            "target": 120,
            "target_height": 0,
            "testnet": false,
            "top_block_hash": BLOCK_HASH,
            "tx_count": 60_000_000,
            "tx_pool_size": 17,
            "update_available": false,
            "version": "0.18.1.2-release",
            "was_bootstrap_ever_used": false,
            "white_peerlist_size": 1_000,
            "wide_cumulative_difficulty": "0x4960d0fd6a5db",
            "wide_difficulty": "0x48ad4b9031"
        })),
        "hard_fork_info" => ok(json!({
            "earliest_height": 2_688_888,
            "enabled": true,
            "state": 0,
            "threshold": 0,
            "version": 16,
            "votes": 10_080,
            "voting": 16,
            "window": 10_080
        })),
        "get_bans" => ok(json!({
            "bans": [{ "host": "192.168.1.51", "ip": 855_746_752, "seconds": 30 }]
        })),
        "banned" => ok(json!({ "banned": true, "seconds": 30 })),
        "get_version" => ok(json!({
            "current_height": 2_750_001,
            "hard_forks": [
                { "height": 1, "hf_version": 1 },
                { "height": 2_688_888, "hf_version": 16 }
            ],
            "release": true,
            "version": 196_618
        })),
        "get_txpool_backlog" => ok(json!({
            "backlog": [{ "blob_size": 1_500, "fee": 30_000_000, "time_in_pool": 12 }]
        })),
        "get_output_histogram" => ok(json!({
            "histogram": [{
                "amount": 20_000_000_000u64,
                "total_instances": 381_490,
                "unlocked_instances": 381_490,
                "recent_instances": 0
            }]
        })),
        "get_coinbase_tx_sum" => ok(json!({
            "emission_amount": 9_387_854_817_320u64,
            "emission_amount_top64": 0,
            "fee_amount": 83_981_380_763u64,
            "fee_amount_top64": 0,
            "wide_emission_amount": "0x889c7c06828",
            "wide_fee_amount": "0x138dae29db"
        })),
        "get_fee_estimate" => ok(json!({
            "fee": 20_000,
            "fees": [20_000, 80_000, 320_000, 4_000_000],
            "quantization_mask": 10_000
        })),
        "get_output_distribution" => ok(json!({
            "distributions": [{
                "amount": 0,
                "base": 0,
                "distribution": [1, 2, 3],
                "start_height": 2_750_000
            }]
        })),
        "get_alternate_chains" => ok(json!({
            "chains": [{
                "block_hash": BLOCK_HASH,
                "block_hashes": [BLOCK_HASH],
                "difficulty": 312_143_416_113u64,
                "height": 2_749_990,
                "length": 1,
                "main_chain_parent_block": "b0e4a5c6ed3bcc8c4b15ed4c4e5bd3d5dfa7f5a0c8cbb5e4c5a4a7c3c6a1a0b9",
                "wide_difficulty": "0x48ad4b9031"
            }]
        })),
        "sync_info" => ok(json!({
            "height": 2_750_001,
            "next_needed_pruning_seed": 0,
            "overview": "[]",
            "peers": [{ "info": connection(), "spans": [span()] }],
            "spans": [span()],
            "target_height": 2_750_100
        })),
        "get_miner_data" => ok(json!({
            "already_generated_coins": 18_186_022_843_595_960_691u64,
            "difficulty": "0x48ad4b9031",
            "height": 2_750_001,
            "major_version": 16,
            "median_weight": 300_000,
            "prev_id": BLOCK_HASH,
            "seed_hash": SEED_HASH,
            "tx_backlog": [{ "fee": 30_000_000, "id": "a1", "weight": 1_500 }]
        })),
        "prune_blockchain" => ok(json!({ "pruned": true, "pruning_seed": 387 })),
        "add_aux_pow" => ok(json!({
            "aux_pow": [{
                "id": "3200b4ea97c3b2081cd4190b58e49572b2319fed00d030ad51809dff06b5d8c8",
                "hash": "7b35762de164b20885e15dbe656b1138db06bb402fa1796f5765a23933d8859a"
            }],
            "blockhashing_blob": "1010ee97e2a106e9f8ebe8887e5b609949ac8ea6143e560ed13552b110cb009b21f0cfca1eaccf00000000b2685c1283a646bc9020c758daa443be145b7370ce5a6efacb3e614117032e2c22",
            "blocktemplate_blob": "1010ee97e2a106",
            "merkle_root": "7b35762de164b20885e15dbe656b1138db06bb402fa1796f5765a23933d8859a",
            "merkle_tree_depth": 0
        })),
        _ => ok(json!({})),
    }
}

/// Body the stub answers with on a direct endpoint.
pub fn other_result(path: &str, body: &Value) -> Value {
    let echo = |field: &str, fallback: Value| body.get(field).cloned().unwrap_or(fallback);
    match path {
        "/get_height" => ok(json!({ "hash": BLOCK_HASH, "height": 2_750_001 })),
        "/get_transactions" => {
            let tx_hash = body["txs_hashes"].get(0).cloned().unwrap_or(json!(""));
            ok(json!({
                "missed_tx": ["c0ffee"],
                "txs": [tx_info(tx_hash)],
                "txs_as_hex": ["0200010200"],
                "txs_as_json": ["{\"version\": 2}"]
            }))
        }
        "/get_alt_blocks_hashes" => ok(json!({ "blks_hashes": [BLOCK_HASH] })),
        "/is_key_image_spent" => {
            let n = body["key_images"].as_array().map_or(0, Vec::len);
            ok(json!({ "spent_status": vec![1; n] }))
        }
        "/send_raw_transaction" => ok(json!({
            "double_spend": false,
            "fee_too_low": false,
            "invalid_input": false,
            "invalid_output": false,
            "low_mixin": false,
            "not_rct": false,
            "not_relayed": echo("do_not_relay", json!(false)),
            "overspend": false,
            "reason": "",
            "sanity_check_failed": false,
            "too_big": false,
            "too_few_outputs": false,
            "tx_extra_too_big": false
        })),
        "/mining_status" => ok(json!({
            "active": true,
            "address": "47xu3gQpF",
            "bg_idle_threshold": 90,
            "bg_ignore_battery": false,
            "bg_min_idle_seconds": 10,
            "bg_target": 40,
            "block_reward": 600_000_000_000u64,
            "block_target": 120,
            "difficulty": 312_143_416_113u64,
            "difficulty_top64": 0,
            "is_background_mining_enabled": false,
            "pow_algorithm": "RandomX",
            "speed": 100,
            "threads_count": 2,
            "wide_difficulty": "0x48ad4b9031"
        })),
        "/get_peer_list" => ok(json!({
            "white_list": [peer(1, "1.2.3.4", 67_305_985)],
            "gray_list": [peer(2, "5.6.7.8", 134_678_021)]
        })),
        "/get_public_nodes" => ok(json!({
            "white": [peer(3, "9.9.9.9", 151_587_081)],
            "gray": []
        })),
        "/set_log_categories" => ok(json!({ "categories": echo("categories", json!("*:WARNING")) })),
        "/get_transaction_pool" => ok(json!({
            "transactions": [pool_transaction()],
            "spent_key_images": [{ "id_hash": "bb", "txs_hashes": ["aa"] }]
        })),
        "/get_transaction_pool_hashes" => ok(json!({ "tx_hashes": ["aa", "cc"] })),
        "/get_transaction_pool_stats" => ok(json!({
            "pool_stats": {
                "bytes_max": 2_000,
                "bytes_med": 1_500,
                "bytes_min": 1_000,
                "bytes_total": 3_000,
                "fee_total": 60_000_000,
                "histo": [{ "bytes": 1_500, "txs": 1 }],
                "histo_98pc": 0,
                "num_10m": 0,
                "num_double_spends": 0,
                "num_failing": 0,
                "num_not_relayed": 0,
                "oldest": 1_666_000_050u64,
                "txs_total": 2
            }
        })),
        "/get_limit" => ok(json!({ "limit_down": 8_192, "limit_up": 2_048 })),
        "/set_limit" => ok(json!({ "limit_down": 4_096, "limit_up": 1_024 })),
        "/out_peers" => ok(json!({ "out_peers": echo("out_peers", json!(0)) })),
        "/in_peers" => ok(json!({ "in_peers": echo("in_peers", json!(0)) })),
        "/get_net_stats" => ok(json!({
            "start_time": 1_666_000_000u64,
            "total_bytes_in": 10,
            "total_bytes_out": 20,
            "total_packets_in": 3,
            "total_packets_out": 4
        })),
        "/get_outs" => ok(json!({
            "outs": [{
                "height": 2_000_000,
                "key": "9c6e",
                "mask": "a1b2",
                "txid": "d6e4",
                "unlocked": true
            }]
        })),
        "/update" => ok(json!({
            "auto_uri": "",
            "hash": "",
            "path": "",
            "update": false,
            "user_uri": "",
            "version": "0.18.1.2"
        })),
        "/pop_blocks" => ok(json!({ "height": 2_749_996 })),
        _ => ok(json!({})),
    }
}
