use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::{info, warn};

use rsvp_application::{connect_contract, AppState, Metrics};
use rsvp_domain::ports::{EntityStore, HealthCheckService, LogSource, WalletProvider};
use rsvp_domain::CONTRACT_ADDRESS;
use rsvp_infrastructure::{
    parse_account, AppConfig, DefaultHealthService, FileEntityStore, IpfsGatewayStore,
    JsonRpcClient, MemoryEntityStore, StaticWalletProvider,
};

pub struct AppContext {
    pub state: AppState,
    /// Node to poll; `None` runs the indexer push-only.
    pub log_source: Option<Arc<dyn LogSource>>,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(&config).await
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();

        let entity_store: Arc<dyn EntityStore> = match &runtime_config.store_path {
            Some(path) => Arc::new(FileEntityStore::open(path).await?),
            None => {
                info!("no store_path configured, entities are kept in memory");
                Arc::new(MemoryEntityStore::new())
            }
        };
        let metadata_store = Arc::new(IpfsGatewayStore::new(
            &runtime_config.ipfs_gateway_url,
            runtime_config.metadata_timeout_seconds,
        )?);

        let rpc = match &runtime_config.rpc_url {
            Some(url) => Some(Arc::new(JsonRpcClient::new(
                url,
                runtime_config.request_timeout_seconds,
            )?)),
            None => None,
        };
        let wallet: Option<Arc<dyn WalletProvider>> = match &runtime_config.wallet_account {
            Some(account) => Some(Arc::new(StaticWalletProvider::new(parse_account(account)?))),
            None => rpc
                .clone()
                .map(|client| client as Arc<dyn WalletProvider>),
        };
        let contract = connect_contract(wallet.as_deref()).await;
        let log_source = rpc.map(|client| client as Arc<dyn LogSource>);

        let health = DefaultHealthService::new(entity_store.clone(), log_source.clone());
        if let Err(err) = health.check_store().await {
            warn!("entity store check failed: {}", err);
        }
        if let Err(err) = health.check_log_source().await {
            warn!("node check failed: {}", err);
        }

        let state = AppState {
            config: runtime_config,
            contract_address: CONTRACT_ADDRESS,
            contract,
            entity_store,
            metadata_store,
            metrics: Arc::new(Metrics::default()),
            ingest_lock: Arc::new(Mutex::new(())),
        };

        Ok(Self { state, log_source })
    }
}
