// Confirmation entity
// An attendee's confirmed attendance at an Event. Declared for the entity
// graph; no handler populates it yet.

use serde::{Deserialize, Serialize};

use crate::value_objects::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub id: EntityId,
    pub attendee: EntityId,
    pub event: EntityId,
}
