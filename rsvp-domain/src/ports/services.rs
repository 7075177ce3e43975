use alloy_primitives::Address;
use async_trait::async_trait;

use crate::entities::{LogFilter, RawLog};

/// Content-addressed store holding event metadata documents.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// `Ok(None)` when the store has nothing under `path`.
    async fn cat(&self, path: &str) -> anyhow::Result<Option<Vec<u8>>>;
}

/// Wallet capability able to hand out the currently connected account.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn request_signer(&self) -> anyhow::Result<Address>;
}

#[async_trait]
pub trait LogSource: Send + Sync {
    async fn latest_block(&self) -> anyhow::Result<u64>;
    async fn fetch_logs(&self, filter: &LogFilter) -> anyhow::Result<Vec<RawLog>>;
}

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn check_store(&self) -> anyhow::Result<bool>;
    async fn check_log_source(&self) -> anyhow::Result<bool>;
}
