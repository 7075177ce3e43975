// Account entity
// A wallet participating as creator, RSVP-er or confirmed attendee

use serde::{Deserialize, Serialize};

use crate::value_objects::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: EntityId,
    pub total_rsvps: u64,
    pub total_attended_events: u64,
}
