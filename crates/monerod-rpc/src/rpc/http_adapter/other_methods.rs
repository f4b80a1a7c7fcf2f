//! Operations served on dedicated endpoints with a plain JSON body.
//!
//! Endpoints that take no parameters are fetched with `GET`; everything else
//! is a `POST` of the request record.

use crate::error::ClientError;
use crate::rpc::types::*;

use super::client::DaemonClient;

impl DaemonClient {
    pub async fn get_height(&self) -> Result<GetHeightResponse, ClientError> {
        self.get_other("/get_height").await
    }

    pub async fn get_transactions(
        &self,
        request: &GetTransactionsRequest,
    ) -> Result<GetTransactionsResponse, ClientError> {
        self.post_other("/get_transactions", request).await
    }

    pub async fn get_alt_blocks_hashes(&self) -> Result<GetAltBlocksHashesResponse, ClientError> {
        self.get_other("/get_alt_blocks_hashes").await
    }

    /// Spent state of each key image, in request order. See
    /// [`IsKeyImageSpentResponse::spent_status`] for the codes.
    pub async fn is_key_image_spent(
        &self,
        key_images: &[String],
    ) -> Result<IsKeyImageSpentResponse, ClientError> {
        let request = IsKeyImageSpentRequest {
            key_images: key_images.to_vec(),
        };
        self.post_other("/is_key_image_spent", &request).await
    }

    /// Submit a signed transaction. Rejection reasons come back as flags on
    /// the response, not as an error.
    pub async fn send_raw_transaction(
        &self,
        tx_as_hex: &str,
        do_not_relay: bool,
    ) -> Result<SendRawTransactionResponse, ClientError> {
        let request = SendRawTransactionRequest {
            tx_as_hex: tx_as_hex.to_owned(),
            do_not_relay,
        };
        self.post_other("/send_raw_transaction", &request).await
    }

    // ==========================================================================
    // Mining
    // ==========================================================================

    pub async fn start_mining(
        &self,
        request: &StartMiningRequest,
    ) -> Result<StartMiningResponse, ClientError> {
        self.post_other("/start_mining", request).await
    }

    pub async fn stop_mining(&self) -> Result<StopMiningResponse, ClientError> {
        self.get_other("/stop_mining").await
    }

    pub async fn mining_status(&self) -> Result<MiningStatusResponse, ClientError> {
        self.get_other("/mining_status").await
    }

    // ==========================================================================
    // Node Administration
    // ==========================================================================

    pub async fn save_bc(&self) -> Result<SaveBcResponse, ClientError> {
        self.get_other("/save_bc").await
    }

    pub async fn get_peer_list(&self) -> Result<GetPeerListResponse, ClientError> {
        self.get_other("/get_peer_list").await
    }

    pub async fn get_public_nodes(
        &self,
        request: &GetPublicNodesRequest,
    ) -> Result<GetPublicNodesResponse, ClientError> {
        self.post_other("/get_public_nodes", request).await
    }

    pub async fn set_log_hash_rate(
        &self,
        visible: bool,
    ) -> Result<SetLogHashRateResponse, ClientError> {
        let request = SetLogHashRateRequest { visible };
        self.post_other("/set_log_hash_rate", &request).await
    }

    pub async fn set_log_level(&self, level: u64) -> Result<SetLogLevelResponse, ClientError> {
        let request = SetLogLevelRequest { level };
        self.post_other("/set_log_level", &request).await
    }

    /// Replace the node's log categories. With `None` the node only reports
    /// the current set.
    pub async fn set_log_categories(
        &self,
        categories: Option<&str>,
    ) -> Result<SetLogCategoriesResponse, ClientError> {
        let request = SetLogCategoriesRequest {
            categories: categories.map(str::to_owned),
        };
        self.post_other("/set_log_categories", &request).await
    }

    pub async fn set_bootstrap_daemon(
        &self,
        request: &SetBootstrapDaemonRequest,
    ) -> Result<SetBootstrapDaemonResponse, ClientError> {
        self.post_other("/set_bootstrap_daemon", request).await
    }

    pub async fn stop_daemon(&self) -> Result<StopDaemonResponse, ClientError> {
        self.get_other("/stop_daemon").await
    }

    pub async fn update(
        &self,
        command: &str,
        path: Option<&str>,
    ) -> Result<UpdateResponse, ClientError> {
        let request = UpdateRequest {
            command: command.to_owned(),
            path: path.map(str::to_owned),
        };
        self.post_other("/update", &request).await
    }

    pub async fn pop_blocks(&self, nblocks: u64) -> Result<PopBlocksResponse, ClientError> {
        let request = PopBlocksRequest { nblocks };
        self.post_other("/pop_blocks", &request).await
    }

    // ==========================================================================
    // Transaction Pool
    // ==========================================================================

    pub async fn get_transaction_pool(&self) -> Result<GetTransactionPoolResponse, ClientError> {
        self.get_other("/get_transaction_pool").await
    }

    pub async fn get_transaction_pool_hashes(
        &self,
    ) -> Result<GetTransactionPoolHashesResponse, ClientError> {
        self.get_other("/get_transaction_pool_hashes").await
    }

    pub async fn get_transaction_pool_stats(
        &self,
    ) -> Result<GetTransactionPoolStatsResponse, ClientError> {
        self.get_other("/get_transaction_pool_stats").await
    }

    // ==========================================================================
    // Network
    // ==========================================================================

    pub async fn get_limit(&self) -> Result<GetLimitResponse, ClientError> {
        self.get_other("/get_limit").await
    }

    /// Set bandwidth limits in kB/s. `-1` resets a direction to the default
    /// and `0` leaves it unchanged.
    pub async fn set_limit(
        &self,
        limit_down: i64,
        limit_up: i64,
    ) -> Result<SetLimitResponse, ClientError> {
        let request = SetLimitRequest {
            limit_down,
            limit_up,
        };
        self.post_other("/set_limit", &request).await
    }

    pub async fn out_peers(&self, out_peers: u64) -> Result<OutPeersResponse, ClientError> {
        let request = OutPeersRequest { out_peers };
        self.post_other("/out_peers", &request).await
    }

    pub async fn in_peers(&self, in_peers: u64) -> Result<InPeersResponse, ClientError> {
        let request = InPeersRequest { in_peers };
        self.post_other("/in_peers", &request).await
    }

    pub async fn get_net_stats(&self) -> Result<GetNetStatsResponse, ClientError> {
        self.get_other("/get_net_stats").await
    }

    // ==========================================================================
    // Outputs
    // ==========================================================================

    pub async fn get_outs(&self, request: &GetOutsRequest) -> Result<GetOutsResponse, ClientError> {
        self.post_other("/get_outs", request).await
    }
}
