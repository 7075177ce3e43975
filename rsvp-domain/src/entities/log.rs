// Raw contract log as delivered by a node or pushed over HTTP

use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

use crate::value_objects::EventKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    #[serde(default)]
    pub block_number: u64,
    #[serde(default)]
    pub log_index: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<B256>,
}

impl RawLog {
    /// Ledger position used to restore delivery order.
    pub fn position(&self) -> (u64, u64) {
        (self.block_number, self.log_index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub address: Address,
    /// Accepted topic0 values.
    pub topics: Vec<B256>,
    pub from_block: u64,
    pub to_block: u64,
}

impl LogFilter {
    /// Every log the projector understands from `address` in `[from_block, to_block]`.
    pub fn for_contract(address: Address, from_block: u64, to_block: u64) -> Self {
        Self {
            address,
            topics: EventKind::ALL
                .iter()
                .map(|kind| kind.signature_hash())
                .collect(),
            from_block,
            to_block,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestEnvelope {
    pub logs: Vec<RawLog>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub received: usize,
    pub dispatched: usize,
    pub skipped: usize,
    pub events_created: usize,
}
