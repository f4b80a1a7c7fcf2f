//! Operations multiplexed through the `/json_rpc` endpoint.

use crate::block_id::BlockId;
use crate::error::ClientError;
use crate::rpc::types::*;
use crate::types::{AuxPow, BanRequest};

use super::client::DaemonClient;

impl DaemonClient {
    pub async fn get_block_count(&self) -> Result<GetBlockCountResponse, ClientError> {
        self.json_rpc_bare("get_block_count").await
    }

    /// Hash of the block at `height`. The node answers with a bare string.
    pub async fn on_get_block_hash(&self, height: u64) -> Result<String, ClientError> {
        self.json_rpc("on_get_block_hash", &[height]).await
    }

    pub async fn get_block_template(
        &self,
        request: &GetBlockTemplateRequest,
    ) -> Result<GetBlockTemplateResponse, ClientError> {
        self.json_rpc("get_block_template", request).await
    }

    pub async fn submit_block(&self, block_blob: &str) -> Result<SubmitBlockResponse, ClientError> {
        self.json_rpc("submit_block", &[block_blob]).await
    }

    /// Regtest only.
    pub async fn generate_blocks(
        &self,
        request: &GenerateBlocksRequest,
    ) -> Result<GenerateBlocksResponse, ClientError> {
        self.json_rpc("generateblocks", request).await
    }

    // ==========================================================================
    // Headers and Blocks
    // ==========================================================================

    pub async fn get_last_block_header(&self) -> Result<GetLastBlockHeaderResponse, ClientError> {
        self.json_rpc_bare("get_last_block_header").await
    }

    pub async fn get_block_header_by_hash(
        &self,
        hash: &str,
        fill_pow_hash: bool,
    ) -> Result<GetBlockHeaderByHashResponse, ClientError> {
        let request = GetBlockHeaderByHashRequest {
            hash: hash.to_owned(),
            fill_pow_hash,
        };
        self.json_rpc("get_block_header_by_hash", &request).await
    }

    pub async fn get_block_header_by_height(
        &self,
        height: u64,
        fill_pow_hash: bool,
    ) -> Result<GetBlockHeaderByHeightResponse, ClientError> {
        let request = GetBlockHeaderByHeightRequest {
            height,
            fill_pow_hash,
        };
        self.json_rpc("get_block_header_by_height", &request).await
    }

    /// Headers for the inclusive range `start_height..=end_height`.
    pub async fn get_block_headers_range(
        &self,
        start_height: u64,
        end_height: u64,
        fill_pow_hash: bool,
    ) -> Result<GetBlockHeadersRangeResponse, ClientError> {
        let request = GetBlockHeadersRangeRequest {
            start_height,
            end_height,
            fill_pow_hash,
        };
        self.json_rpc("get_block_headers_range", &request).await
    }

    /// Fetch a full block by hash or height.
    ///
    /// `block` is anything convertible into a [`BlockId`]: a `u64` height,
    /// a hash string, a `BlockId`, or a `serde_json::Value`. A value that
    /// is neither fails with [`ClientError::InvalidParameter`] before any
    /// request is sent.
    pub async fn get_block<B>(
        &self,
        block: B,
        fill_pow_hash: bool,
    ) -> Result<GetBlockResponse, ClientError>
    where
        B: TryInto<BlockId>,
        ClientError: From<B::Error>,
    {
        let request = GetBlockRequest::new(block.try_into()?, fill_pow_hash);
        self.json_rpc("get_block", &request).await
    }

    // ==========================================================================
    // Node and Network
    // ==========================================================================

    pub async fn get_connections(&self) -> Result<GetConnectionsResponse, ClientError> {
        self.json_rpc_bare("get_connections").await
    }

    pub async fn get_info(&self) -> Result<GetInfoResponse, ClientError> {
        self.json_rpc_bare("get_info").await
    }

    pub async fn hard_fork_info(&self) -> Result<HardForkInfoResponse, ClientError> {
        self.json_rpc_bare("hard_fork_info").await
    }

    pub async fn set_bans(&self, bans: &[BanRequest]) -> Result<SetBansResponse, ClientError> {
        let request = SetBansRequest {
            bans: bans.to_vec(),
        };
        self.json_rpc("set_bans", &request).await
    }

    pub async fn get_bans(&self) -> Result<GetBansResponse, ClientError> {
        self.json_rpc_bare("get_bans").await
    }

    pub async fn banned(&self, address: &str) -> Result<BannedResponse, ClientError> {
        let request = BannedRequest {
            address: address.to_owned(),
        };
        self.json_rpc("banned", &request).await
    }

    pub async fn get_version(&self) -> Result<GetVersionResponse, ClientError> {
        self.json_rpc_bare("get_version").await
    }

    pub async fn sync_info(&self) -> Result<SyncInfoResponse, ClientError> {
        self.json_rpc_bare("sync_info").await
    }

    pub async fn get_alternate_chains(&self) -> Result<GetAlternateChainsResponse, ClientError> {
        self.json_rpc_bare("get_alternate_chains").await
    }

    // ==========================================================================
    // Transaction Pool
    // ==========================================================================

    /// Drop the given transactions from the pool, or the whole pool when
    /// `txids` is empty.
    pub async fn flush_txpool(&self, txids: &[String]) -> Result<FlushTxpoolResponse, ClientError> {
        let request = FlushTxpoolRequest {
            txids: txids.to_vec(),
        };
        self.json_rpc("flush_txpool", &request).await
    }

    pub async fn relay_tx(&self, txids: &[String]) -> Result<RelayTxResponse, ClientError> {
        let request = RelayTxRequest {
            txids: txids.to_vec(),
        };
        self.json_rpc("relay_tx", &request).await
    }

    pub async fn get_txpool_backlog(&self) -> Result<GetTxpoolBacklogResponse, ClientError> {
        self.json_rpc_bare("get_txpool_backlog").await
    }

    // ==========================================================================
    // Outputs, Emission and Fees
    // ==========================================================================

    pub async fn get_output_histogram(
        &self,
        request: &GetOutputHistogramRequest,
    ) -> Result<GetOutputHistogramResponse, ClientError> {
        self.json_rpc("get_output_histogram", request).await
    }

    pub async fn get_coinbase_tx_sum(
        &self,
        height: u64,
        count: u64,
    ) -> Result<GetCoinbaseTxSumResponse, ClientError> {
        let request = GetCoinbaseTxSumRequest { height, count };
        self.json_rpc("get_coinbase_tx_sum", &request).await
    }

    pub async fn get_fee_estimate(
        &self,
        grace_blocks: Option<u64>,
    ) -> Result<GetFeeEstimateResponse, ClientError> {
        let request = GetFeeEstimateRequest { grace_blocks };
        self.json_rpc("get_fee_estimate", &request).await
    }

    pub async fn get_output_distribution(
        &self,
        request: &GetOutputDistributionRequest,
    ) -> Result<GetOutputDistributionResponse, ClientError> {
        self.json_rpc("get_output_distribution", request).await
    }

    // ==========================================================================
    // Mining and Maintenance
    // ==========================================================================

    pub async fn get_miner_data(&self) -> Result<GetMinerDataResponse, ClientError> {
        self.json_rpc_bare("get_miner_data").await
    }

    /// Prune the chain, or with `check` only report the pruning state.
    pub async fn prune_blockchain(
        &self,
        check: bool,
    ) -> Result<PruneBlockchainResponse, ClientError> {
        let request = PruneBlockchainRequest { check };
        self.json_rpc("prune_blockchain", &request).await
    }

    pub async fn calc_pow(&self, request: &CalcPowRequest) -> Result<CalcPowResponse, ClientError> {
        self.json_rpc("calc_pow", request).await
    }

    pub async fn flush_cache(
        &self,
        bad_txs: bool,
        bad_blocks: bool,
    ) -> Result<FlushCacheResponse, ClientError> {
        let request = FlushCacheRequest { bad_txs, bad_blocks };
        self.json_rpc("flush_cache", &request).await
    }

    pub async fn add_aux_pow(
        &self,
        blocktemplate_blob: &str,
        aux_pow: &[AuxPow],
    ) -> Result<AddAuxPowResponse, ClientError> {
        let request = AddAuxPowRequest {
            blocktemplate_blob: blocktemplate_blob.to_owned(),
            aux_pow: aux_pow.to_vec(),
        };
        self.json_rpc("add_aux_pow", &request).await
    }
}
