// Runtime configuration shared across layers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub rpc_url: Option<String>,
    pub ipfs_gateway_url: String,
    pub metadata_timeout_seconds: u64,
    pub store_path: Option<String>,
    pub start_block: u64,
    pub block_batch_size: u64,
    pub poll_interval_seconds: u64,
    pub wallet_account: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}
