//! Shapes for operations multiplexed through `/json_rpc`.

use serde::{Deserialize, Serialize};

use super::is_false;
use crate::block_id::BlockId;
use crate::types::{
    AuxPow, Ban, BanRequest, BlockHeader, ChainInfo, Connection, HardFork, HistogramEntry,
    MinerTxBacklogEntry, OutputDistribution, PeerInfo, SpanInfo, TxPoolBacklogEntry,
};

// ==============================================================================
// Block Count / Template / Submission
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockCountResponse {
    pub count: u64,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockTemplateRequest {
    pub wallet_address: String,
    pub reserve_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_block: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockTemplateResponse {
    pub blockhashing_blob: String,
    pub blocktemplate_blob: String,
    pub difficulty: u64,
    pub difficulty_top64: u64,
    pub expected_reward: u64,
    pub height: u64,
    pub next_seed_hash: String,
    pub prev_hash: String,
    pub reserved_offset: u64,
    pub seed_hash: String,
    pub seed_height: u64,
    pub status: String,
    pub untrusted: bool,
    pub wide_difficulty: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitBlockResponse {
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateBlocksRequest {
    pub amount_of_blocks: u64,
    pub wallet_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_nonce: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_block: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateBlocksResponse {
    pub blocks: Vec<String>,
    pub height: u64,
    pub status: String,
    pub untrusted: bool,
}

// ==============================================================================
// Block Headers and Blocks
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockHeaderByHashRequest {
    pub hash: String,
    #[serde(skip_serializing_if = "is_false")]
    pub fill_pow_hash: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockHeaderByHeightRequest {
    pub height: u64,
    #[serde(skip_serializing_if = "is_false")]
    pub fill_pow_hash: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockHeadersRangeRequest {
    pub start_height: u64,
    pub end_height: u64,
    #[serde(skip_serializing_if = "is_false")]
    pub fill_pow_hash: bool,
}

/// Shared by `get_last_block_header`, `get_block_header_by_hash` and
/// `get_block_header_by_height`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockHeaderResponse {
    pub block_header: BlockHeader,
    pub status: String,
    pub untrusted: bool,
}

pub type GetLastBlockHeaderResponse = BlockHeaderResponse;
pub type GetBlockHeaderByHashResponse = BlockHeaderResponse;
pub type GetBlockHeaderByHeightResponse = BlockHeaderResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockHeadersRangeResponse {
    pub headers: Vec<BlockHeader>,
    pub status: String,
    pub untrusted: bool,
}

/// Exactly one of `hash` and `height` is set; build it from a [`BlockId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(skip_serializing_if = "is_false")]
    pub fill_pow_hash: bool,
}

impl GetBlockRequest {
    pub fn new(block: BlockId, fill_pow_hash: bool) -> Self {
        match block {
            BlockId::Hash(hash) => Self {
                hash: Some(hash),
                height: None,
                fill_pow_hash,
            },
            BlockId::Height(height) => Self {
                hash: None,
                height: Some(height),
                fill_pow_hash,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockResponse {
    pub blob: String,
    pub block_header: BlockHeader,
    /// The block itself, JSON-encoded as a string by the node.
    pub json: String,
    pub miner_tx_hash: String,
    pub status: String,
    pub tx_hashes: Vec<String>,
    pub untrusted: bool,
}

// ==============================================================================
// Node Info
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetConnectionsResponse {
    pub connections: Vec<Connection>,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetInfoResponse {
    pub adjusted_time: u64,
    pub alt_blocks_count: u64,
    pub block_size_limit: u64,
    pub block_size_median: u64,
    pub block_weight_limit: u64,
    pub block_weight_median: u64,
    pub bootstrap_daemon_address: String,
    pub busy_syncing: bool,
    pub cumulative_difficulty: u64,
    pub cumulative_difficulty_top64: u64,
    pub database_size: u64,
    pub difficulty: u64,
    pub difficulty_top64: u64,
    pub free_space: u64,
    pub grey_peerlist_size: u64,
    pub height: u64,
    pub height_without_bootstrap: u64,
    pub incoming_connections_count: u64,
    pub mainnet: bool,
    pub nettype: String,
    pub offline: bool,
    pub outgoing_connections_count: u64,
    pub rpc_connections_count: u64,
    pub stagenet: bool,
    pub start_time: u64,
    pub status: String,
    pub synchronized: bool,
    pub target: u64,
    pub target_height: u64,
    pub testnet: bool,
    pub top_block_hash: String,
    pub tx_count: u64,
    pub tx_pool_size: u64,
    pub untrusted: bool,
    pub update_available: bool,
    pub version: String,
    pub was_bootstrap_ever_used: bool,
    pub white_peerlist_size: u64,
    pub wide_cumulative_difficulty: String,
    pub wide_difficulty: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardForkInfoResponse {
    pub earliest_height: u64,
    pub enabled: bool,
    pub state: u64,
    pub status: String,
    pub threshold: u64,
    pub untrusted: bool,
    pub version: u64,
    pub votes: u64,
    pub voting: u64,
    pub window: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetVersionResponse {
    pub current_height: u64,
    pub hard_forks: Vec<HardFork>,
    pub release: bool,
    pub status: String,
    pub untrusted: bool,
    pub version: u64,
}

// ==============================================================================
// Bans
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetBansRequest {
    pub bans: Vec<BanRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetBansResponse {
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBansResponse {
    pub bans: Vec<Ban>,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannedRequest {
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannedResponse {
    pub banned: bool,
    pub seconds: u64,
    pub status: String,
    pub untrusted: bool,
}

// ==============================================================================
// Transaction Pool
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlushTxpoolRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub txids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlushTxpoolResponse {
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayTxRequest {
    pub txids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayTxResponse {
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTxpoolBacklogResponse {
    pub backlog: Vec<TxPoolBacklogEntry>,
    pub status: String,
    pub untrusted: bool,
}

// ==============================================================================
// Outputs, Emission and Fees
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOutputHistogramRequest {
    pub amounts: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u64>,
    #[serde(skip_serializing_if = "is_false")]
    pub unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_cutoff: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOutputHistogramResponse {
    pub histogram: Vec<HistogramEntry>,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCoinbaseTxSumRequest {
    pub height: u64,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCoinbaseTxSumResponse {
    pub emission_amount: u64,
    pub emission_amount_top64: u64,
    pub fee_amount: u64,
    pub fee_amount_top64: u64,
    pub status: String,
    pub untrusted: bool,
    pub wide_emission_amount: String,
    pub wide_fee_amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFeeEstimateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_blocks: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFeeEstimateResponse {
    pub fee: u64,
    pub fees: Vec<u64>,
    pub quantization_mask: u64,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOutputDistributionRequest {
    pub amounts: Vec<u64>,
    #[serde(skip_serializing_if = "is_false")]
    pub cumulative: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_height: Option<u64>,
    #[serde(skip_serializing_if = "is_false")]
    pub binary: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub compress: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOutputDistributionResponse {
    pub distributions: Vec<OutputDistribution>,
    pub status: String,
    pub untrusted: bool,
}

// ==============================================================================
// Chains and Sync
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAlternateChainsResponse {
    pub chains: Vec<ChainInfo>,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncInfoResponse {
    pub height: u64,
    pub next_needed_pruning_seed: u64,
    pub overview: String,
    pub peers: Vec<PeerInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<SpanInfo>,
    pub status: String,
    pub target_height: u64,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneBlockchainRequest {
    #[serde(skip_serializing_if = "is_false")]
    pub check: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneBlockchainResponse {
    pub pruned: bool,
    pub pruning_seed: u64,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlushCacheRequest {
    #[serde(skip_serializing_if = "is_false")]
    pub bad_txs: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub bad_blocks: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlushCacheResponse {
    pub status: String,
    pub untrusted: bool,
}

// ==============================================================================
// Mining
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetMinerDataResponse {
    pub already_generated_coins: u64,
    /// Hex string; difficulty no longer fits in 64 bits.
    pub difficulty: String,
    pub height: u64,
    pub major_version: u64,
    pub median_weight: u64,
    pub prev_id: String,
    pub seed_hash: String,
    pub status: String,
    pub tx_backlog: Vec<MinerTxBacklogEntry>,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcPowRequest {
    pub major_version: u64,
    pub height: u64,
    pub block_blob: String,
    pub seed_hash: String,
}

/// Result of `calc_pow`.
///
/// Current daemons answer with the bare proof-of-work hash as the envelope
/// result; the record form `{ "result": .. }` is accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CalcPowWire")]
pub struct CalcPowResponse {
    pub result: String,
    pub status: String,
    pub untrusted: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CalcPowWire {
    Hash(String),
    Record {
        #[serde(default)]
        result: String,
        #[serde(default)]
        status: String,
        #[serde(default)]
        untrusted: bool,
    },
}

impl From<CalcPowWire> for CalcPowResponse {
    fn from(wire: CalcPowWire) -> Self {
        match wire {
            CalcPowWire::Hash(result) => Self {
                result,
                ..Self::default()
            },
            CalcPowWire::Record {
                result,
                status,
                untrusted,
            } => Self {
                result,
                status,
                untrusted,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddAuxPowRequest {
    pub blocktemplate_blob: String,
    pub aux_pow: Vec<AuxPow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddAuxPowResponse {
    pub aux_pow: Vec<AuxPow>,
    pub blockhashing_blob: String,
    pub blocktemplate_blob: String,
    pub merkle_root: String,
    pub merkle_tree_depth: u64,
    pub status: String,
    pub untrusted: bool,
}
