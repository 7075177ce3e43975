// RSVP entity
// One attendee's reservation against an Event. Declared for the entity
// graph; no handler populates it yet.

use serde::{Deserialize, Serialize};

use crate::value_objects::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsvp {
    pub id: EntityId,
    pub attendee: EntityId,
    pub event: EntityId,
}
