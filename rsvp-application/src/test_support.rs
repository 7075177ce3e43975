// Shared fixtures for handler, ingest and sync tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use tokio::sync::Mutex as AsyncMutex;

use rsvp_domain::ports::{LogSource, MetadataStore};
use rsvp_domain::{EventCreated, LogFilter, RawLog, RuntimeConfig, CONTRACT_ADDRESS};
use rsvp_infrastructure::MemoryEntityStore;

use crate::{AppState, Metrics};

pub fn test_state(metadata_store: Arc<dyn MetadataStore>) -> AppState {
    AppState {
        config: RuntimeConfig {
            block_batch_size: 10,
            ..RuntimeConfig::default()
        },
        contract_address: CONTRACT_ADDRESS,
        contract: None,
        entity_store: Arc::new(MemoryEntityStore::new()),
        metadata_store,
        metrics: Arc::new(Metrics::default()),
        ingest_lock: Arc::new(AsyncMutex::new(())),
    }
}

pub fn scenario_event_id() -> B256 {
    let mut bytes = [0u8; 32];
    bytes[0] = 0xAA;
    bytes[31] = 0x01;
    B256::from(bytes)
}

pub fn scenario_event() -> EventCreated {
    EventCreated {
        event_id: scenario_event_id(),
        creator: Address::repeat_byte(0x11),
        event_timestamp: U256::from(1_700_000_000u64),
        max_capacity: U256::from(50u64),
        deposit: U256::from(1_000_000_000_000_000_000u128),
        event_data_cid: "bafy123".to_string(),
    }
}

/// Encodes `event` the way the contract emits it: no indexed params, so the
/// signature hash is the only topic.
pub fn log_for<E: SolEvent>(event: &E, block_number: u64, log_index: u64) -> RawLog {
    RawLog {
        address: CONTRACT_ADDRESS,
        topics: vec![E::SIGNATURE_HASH],
        data: event.encode_data().into(),
        block_number,
        log_index,
        transaction_hash: None,
    }
}

pub struct StaticMetadataStore {
    documents: HashMap<String, Vec<u8>>,
    fail: bool,
    requests: Mutex<Vec<String>>,
}

impl StaticMetadataStore {
    pub fn empty() -> Self {
        Self {
            documents: HashMap::new(),
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::empty()
        }
    }

    pub fn with_document(path: &str, body: &str) -> Self {
        Self::empty().and_document(path, body)
    }

    pub fn and_document(mut self, path: &str, body: &str) -> Self {
        self.documents
            .insert(path.to_string(), body.as_bytes().to_vec());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl MetadataStore for StaticMetadataStore {
    async fn cat(&self, path: &str) -> anyhow::Result<Option<Vec<u8>>> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(path.to_string());
        if self.fail {
            anyhow::bail!("gateway unreachable");
        }
        Ok(self.documents.get(path).cloned())
    }
}

/// In-memory chain: a fixed head and a set of logs filtered by block range.
pub struct StaticLogSource {
    head: u64,
    logs: Vec<RawLog>,
    ranges: Mutex<Vec<(u64, u64)>>,
}

impl StaticLogSource {
    pub fn new(head: u64, logs: Vec<RawLog>) -> Self {
        Self {
            head,
            logs,
            ranges: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_ranges(&self) -> Vec<(u64, u64)> {
        self.ranges.lock().expect("ranges lock").clone()
    }
}

#[async_trait]
impl LogSource for StaticLogSource {
    async fn latest_block(&self) -> anyhow::Result<u64> {
        Ok(self.head)
    }

    async fn fetch_logs(&self, filter: &LogFilter) -> anyhow::Result<Vec<RawLog>> {
        self.ranges
            .lock()
            .expect("ranges lock")
            .push((filter.from_block, filter.to_block));
        Ok(self
            .logs
            .iter()
            .filter(|log| log.address == filter.address)
            .filter(|log| (filter.from_block..=filter.to_block).contains(&log.block_number))
            .filter(|log| {
                log.topics
                    .first()
                    .is_some_and(|topic| filter.topics.contains(topic))
            })
            .cloned()
            .collect())
    }
}
