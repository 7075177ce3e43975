// Event entity
// A scheduled gathering recorded on-chain, projected from NewEventCreated

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::events::EventCreated;
use crate::value_objects::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub event_id: B256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub event_owner: Address,
    pub event_timestamp: U256,
    pub max_capacity: U256,
    pub deposit: U256,
    pub total_rsvps: u64,
    pub total_confirmed_attendees: u64,
}

impl Event {
    /// Fresh entity carrying only the on-chain fields, counters at zero.
    pub fn from_created(created: &EventCreated) -> Self {
        Self {
            id: EntityId::from_event_id(&created.event_id),
            event_id: created.event_id,
            name: None,
            description: None,
            link: None,
            image_url: None,
            event_owner: created.creator,
            event_timestamp: created.event_timestamp,
            max_capacity: created.max_capacity,
            deposit: created.deposit,
            total_rsvps: 0,
            total_confirmed_attendees: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventQuery {
    pub limit: Option<usize>,
    pub owner: Option<String>,
}
