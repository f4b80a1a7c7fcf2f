//! Sub-records shared by several daemon responses.
//!
//! Every record decodes leniently: a field the node leaves out takes its
//! default value and unknown fields are ignored, so the shapes keep working
//! across daemon releases that add or drop fields.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Blocks
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockHeader {
    pub block_size: u64,
    pub block_weight: u64,
    pub cumulative_difficulty: u64,
    pub cumulative_difficulty_top64: u64,
    pub depth: u64,
    pub difficulty: u64,
    pub difficulty_top64: u64,
    pub hash: String,
    pub height: u64,
    pub long_term_weight: u64,
    pub major_version: u64,
    pub miner_tx_hash: String,
    pub minor_version: u64,
    pub nonce: u64,
    pub num_txes: u64,
    pub orphan_status: bool,
    /// Only filled when the request asked for `fill_pow_hash`.
    pub pow_hash: String,
    pub prev_hash: String,
    pub reward: u64,
    pub timestamp: u64,
    pub wide_cumulative_difficulty: String,
    pub wide_difficulty: String,
}

/// An alternative chain known to the node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainInfo {
    pub block_hash: String,
    pub block_hashes: Vec<String>,
    pub difficulty: u64,
    pub height: u64,
    pub length: u64,
    pub main_chain_parent_block: String,
    pub wide_difficulty: String,
}

/// Reference to a merge-mined chain, used by `add_aux_pow`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuxPow {
    pub id: String,
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardFork {
    pub height: u64,
    pub hf_version: u64,
}

// ==============================================================================
// Peers and Connections
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    pub address: String,
    pub address_type: u64,
    pub avg_download: u64,
    pub avg_upload: u64,
    pub connection_id: String,
    pub current_download: u64,
    pub current_upload: u64,
    pub height: u64,
    pub host: String,
    pub incoming: bool,
    pub ip: String,
    pub live_time: u64,
    pub local_ip: bool,
    pub localhost: bool,
    pub peer_id: String,
    pub port: String,
    pub pruning_seed: u64,
    pub recv_count: u64,
    pub recv_idle_time: u64,
    pub rpc_credits_per_hash: u64,
    pub rpc_port: u64,
    pub send_count: u64,
    pub send_idle_time: u64,
    pub state: String,
    pub support_flags: u64,
}

/// Entry of the node's white or gray peer list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
    pub id: u64,
    pub host: String,
    pub ip: u64,
    pub port: u64,
    pub rpc_port: u64,
    pub rpc_credits_per_hash: u64,
    pub last_seen: u64,
    pub pruning_seed: u64,
}

/// A span of blocks being downloaded from one connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanInfo {
    pub connection_id: String,
    pub nblocks: u64,
    pub rate: u64,
    pub remote_address: String,
    pub size: u64,
    pub speed: u64,
    pub start_block_height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerInfo {
    pub info: Connection,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<SpanInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ban {
    pub host: String,
    pub ip: u64,
    pub seconds: u64,
}

/// One entry of a `set_bans` call. Identify the peer by `host` or by `ip`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<u64>,
    pub ban: bool,
    pub seconds: u64,
}

// ==============================================================================
// Outputs
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramEntry {
    pub amount: u64,
    pub total_instances: u64,
    pub unlocked_instances: u64,
    pub recent_instances: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputDistribution {
    pub amount: u64,
    pub base: u64,
    pub distribution: Vec<u64>,
    pub start_height: u64,
}

/// Global output to fetch with `get_outs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputIndex {
    pub amount: u64,
    pub index: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutKey {
    pub height: u64,
    pub key: String,
    pub mask: String,
    pub txid: String,
    pub unlocked: bool,
}

// ==============================================================================
// Transactions and Pool
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxInfo {
    pub as_hex: String,
    pub as_json: String,
    pub block_height: u64,
    pub block_timestamp: u64,
    pub double_spend_seen: bool,
    pub in_pool: bool,
    pub output_indices: Vec<u64>,
    pub prunable_as_hex: String,
    pub prunable_hash: String,
    pub pruned_as_hex: String,
    pub tx_hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxPoolBacklogEntry {
    pub blob_size: u64,
    pub fee: u64,
    pub time_in_pool: u64,
}

/// Pool transaction as listed in `get_miner_data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerTxBacklogEntry {
    pub fee: u64,
    pub id: String,
    pub weight: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpentKeyImage {
    pub id_hash: String,
    pub txs_hashes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolTransaction {
    pub blob_size: u64,
    pub do_not_relay: bool,
    pub double_spend_seen: bool,
    pub fee: u64,
    pub id_hash: String,
    pub kept_by_block: bool,
    pub last_failed_height: u64,
    pub last_failed_id_hash: String,
    pub last_relayed_time: u64,
    pub max_used_block_height: u64,
    pub max_used_block_id_hash: String,
    pub receive_time: u64,
    /// Number of times the transaction was relayed.
    pub relayed: u64,
    pub tx_blob: String,
    pub tx_json: String,
    pub weight: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolHistogramBucket {
    pub bytes: u64,
    pub txs: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolStats {
    pub bytes_max: u64,
    pub bytes_med: u64,
    pub bytes_min: u64,
    pub bytes_total: u64,
    pub fee_total: u64,
    pub histo: Vec<PoolHistogramBucket>,
    pub histo_98pc: u64,
    pub num_10m: u64,
    pub num_double_spends: u64,
    pub num_failing: u64,
    pub num_not_relayed: u64,
    pub oldest: u64,
    pub txs_total: u64,
}
