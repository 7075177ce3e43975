use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use rsvp_domain::RuntimeConfig;

use crate::config::validation::{parse_account, validate_http_url};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
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

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3234".to_string(),
            api_token: None,
            rpc_url: None,
            ipfs_gateway_url: "https://ipfs.io".to_string(),
            metadata_timeout_seconds: 10,
            store_path: None,
            start_block: 0,
            block_batch_size: 2000,
            poll_interval_seconds: 12,
            wallet_account: None,
            max_body_bytes: 8 * 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("RSVP_INDEXER_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let mut config = Self::read_file(Path::new(&path)).await?;
        config.apply_env_overrides();
        config.finish(Path::new(&path).parent())?;
        Ok(config)
    }

    /// File contents without env overrides; a missing file yields defaults.
    pub async fn read_file(file_path: &Path) -> Result<Self> {
        if !file_path.exists() {
            warn!("{} not found, using defaults", file_path.display());
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(file_path).await?;
        Ok(toml::from_str(&content)?)
    }

    pub fn finish(&mut self, base_dir: Option<&Path>) -> Result<()> {
        self.normalize();
        self.resolve_paths(base_dir);
        self.validate()
    }

    pub fn normalize(&mut self) {
        blank_to_none(&mut self.api_token);
        blank_to_none(&mut self.rpc_url);
        blank_to_none(&mut self.store_path);
        blank_to_none(&mut self.wallet_account);
        let gateway = self.ipfs_gateway_url.trim().trim_end_matches('/').to_string();
        self.ipfs_gateway_url = gateway;
        if let Some(rpc_url) = &self.rpc_url {
            self.rpc_url = Some(rpc_url.trim().to_string());
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        if let Some(store_path) = &self.store_path {
            self.store_path = Some(resolve_path(base, store_path));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_http_url("ipfs_gateway_url", &self.ipfs_gateway_url)?;
        if let Some(rpc_url) = &self.rpc_url {
            validate_http_url("rpc_url", rpc_url)?;
        }
        if let Some(account) = &self.wallet_account {
            parse_account(account)?;
        }
        if self.block_batch_size == 0 {
            return Err(anyhow!("block_batch_size must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            rpc_url: self.rpc_url.clone(),
            ipfs_gateway_url: self.ipfs_gateway_url.clone(),
            metadata_timeout_seconds: self.metadata_timeout_seconds,
            store_path: self.store_path.clone(),
            start_block: self.start_block,
            block_batch_size: self.block_batch_size,
            poll_interval_seconds: self.poll_interval_seconds,
            wallet_account: self.wallet_account.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("RSVP_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("RSVP_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("RSVP_RPC_URL") {
            self.rpc_url = Some(value);
        }
        if let Ok(value) = env::var("RSVP_IPFS_GATEWAY_URL") {
            self.ipfs_gateway_url = value;
        }
        if let Ok(value) = env::var("RSVP_METADATA_TIMEOUT_SECONDS") {
            self.metadata_timeout_seconds = value.parse().unwrap_or(self.metadata_timeout_seconds);
        }
        if let Ok(value) = env::var("RSVP_STORE_PATH") {
            self.store_path = Some(value);
        }
        if let Ok(value) = env::var("RSVP_START_BLOCK") {
            self.start_block = value.parse().unwrap_or(self.start_block);
        }
        if let Ok(value) = env::var("RSVP_BLOCK_BATCH_SIZE") {
            self.block_batch_size = value.parse().unwrap_or(self.block_batch_size);
        }
        if let Ok(value) = env::var("RSVP_POLL_INTERVAL_SECONDS") {
            self.poll_interval_seconds = value.parse().unwrap_or(self.poll_interval_seconds);
        }
        if let Ok(value) = env::var("RSVP_WALLET_ACCOUNT") {
            self.wallet_account = Some(value);
        }
        if let Ok(value) = env::var("RSVP_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("RSVP_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn blank_to_none(value: &mut Option<String>) {
    if value.as_deref().is_some_and(|inner| inner.trim().is_empty()) {
        *value = None;
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
