//! Shapes for operations served by dedicated endpoints (`/get_height`,
//! `/get_transactions`, ...). These travel as bare JSON bodies.

use serde::{Deserialize, Serialize};

use super::is_false;
use crate::types::{OutKey, OutputIndex, Peer, PoolStats, PoolTransaction, SpentKeyImage, TxInfo};

/// Response of endpoints that only report an outcome (`/stop_mining`,
/// `/save_bc`, `/set_log_level`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    pub status: String,
    pub untrusted: bool,
}

pub type StartMiningResponse = StatusResponse;
pub type StopMiningResponse = StatusResponse;
pub type SaveBcResponse = StatusResponse;
pub type SetLogHashRateResponse = StatusResponse;
pub type SetLogLevelResponse = StatusResponse;
pub type SetBootstrapDaemonResponse = StatusResponse;
pub type StopDaemonResponse = StatusResponse;

// ==============================================================================
// Chain and Transactions
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetHeightResponse {
    pub hash: String,
    pub height: u64,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTransactionsRequest {
    pub txs_hashes: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub decode_as_json: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub prune: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub split: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTransactionsResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missed_tx: Vec<String>,
    pub status: String,
    pub txs: Vec<TxInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub txs_as_hex: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub txs_as_json: Vec<String>,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAltBlocksHashesResponse {
    pub blks_hashes: Vec<String>,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsKeyImageSpentRequest {
    pub key_images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsKeyImageSpentResponse {
    /// Per key image: 0 unspent, 1 spent in a block, 2 spent in the pool.
    pub spent_status: Vec<u64>,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendRawTransactionRequest {
    pub tx_as_hex: String,
    #[serde(skip_serializing_if = "is_false")]
    pub do_not_relay: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendRawTransactionResponse {
    pub double_spend: bool,
    pub fee_too_low: bool,
    pub invalid_input: bool,
    pub invalid_output: bool,
    pub low_mixin: bool,
    pub not_rct: bool,
    pub not_relayed: bool,
    pub overspend: bool,
    pub reason: String,
    pub sanity_check_failed: bool,
    pub status: String,
    pub too_big: bool,
    pub too_few_outputs: bool,
    pub tx_extra_too_big: bool,
    pub untrusted: bool,
}

// ==============================================================================
// Mining
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartMiningRequest {
    pub do_background_mining: bool,
    pub ignore_battery: bool,
    pub miner_address: String,
    pub threads_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningStatusResponse {
    pub active: bool,
    pub address: String,
    pub bg_idle_threshold: u64,
    pub bg_ignore_battery: bool,
    pub bg_min_idle_seconds: u64,
    pub bg_target: u64,
    pub block_reward: u64,
    pub block_target: u64,
    pub difficulty: u64,
    pub difficulty_top64: u64,
    pub is_background_mining_enabled: bool,
    pub pow_algorithm: String,
    pub speed: u64,
    pub status: String,
    pub threads_count: u64,
    pub untrusted: bool,
    pub wide_difficulty: String,
}

// ==============================================================================
// Peers and Network
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetPeerListResponse {
    pub gray_list: Vec<Peer>,
    pub status: String,
    pub untrusted: bool,
    pub white_list: Vec<Peer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetPublicNodesRequest {
    #[serde(skip_serializing_if = "is_false")]
    pub gray: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub white: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub include_blocked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetPublicNodesResponse {
    pub gray: Vec<Peer>,
    pub status: String,
    pub untrusted: bool,
    pub white: Vec<Peer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetLimitResponse {
    pub limit_down: u64,
    pub limit_up: u64,
    pub status: String,
    pub untrusted: bool,
}

/// Limits in kB/s. `-1` resets a direction to its default, `0` leaves it
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetLimitRequest {
    pub limit_down: i64,
    pub limit_up: i64,
}

pub type SetLimitResponse = GetLimitResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutPeersRequest {
    pub out_peers: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutPeersResponse {
    pub out_peers: u64,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InPeersRequest {
    pub in_peers: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InPeersResponse {
    pub in_peers: u64,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetNetStatsResponse {
    pub start_time: u64,
    pub status: String,
    pub total_bytes_in: u64,
    pub total_bytes_out: u64,
    pub total_packets_in: u64,
    pub total_packets_out: u64,
    pub untrusted: bool,
}

// ==============================================================================
// Logging and Bootstrap Daemon
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetLogHashRateRequest {
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetLogLevelRequest {
    pub level: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetLogCategoriesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetLogCategoriesResponse {
    pub categories: String,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetBootstrapDaemonRequest {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

// ==============================================================================
// Transaction Pool
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTransactionPoolResponse {
    pub spent_key_images: Vec<SpentKeyImage>,
    pub status: String,
    pub transactions: Vec<PoolTransaction>,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTransactionPoolHashesResponse {
    pub status: String,
    pub tx_hashes: Vec<String>,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTransactionPoolStatsResponse {
    pub pool_stats: PoolStats,
    pub status: String,
    pub untrusted: bool,
}

// ==============================================================================
// Outputs, Updates and Rollback
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOutsRequest {
    pub outputs: Vec<OutputIndex>,
    #[serde(skip_serializing_if = "is_false")]
    pub get_txid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOutsResponse {
    pub outs: Vec<OutKey>,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateRequest {
    /// `check` or `download`.
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateResponse {
    pub auto_uri: String,
    pub hash: String,
    pub path: String,
    pub status: String,
    pub update: bool,
    pub user_uri: String,
    pub version: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopBlocksRequest {
    pub nblocks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopBlocksResponse {
    pub height: u64,
    pub status: String,
    pub untrusted: bool,
}
