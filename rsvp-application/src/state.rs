use std::sync::Arc;

use alloy_primitives::Address;
use rsvp_domain::ports::{EntityStore, MetadataStore};
use rsvp_domain::{ContractHandle, RuntimeConfig};
use tokio::sync::Mutex;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub contract_address: Address,
    /// Signer-bound handle, absent when no wallet is configured.
    pub contract: Option<ContractHandle>,
    pub entity_store: Arc<dyn EntityStore>,
    pub metadata_store: Arc<dyn MetadataStore>,
    pub metrics: Arc<Metrics>,
    /// Serialises log batches so events are projected one at a time in ledger order.
    pub ingest_lock: Arc<Mutex<()>>,
}
