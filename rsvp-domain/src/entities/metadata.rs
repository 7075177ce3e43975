// Off-chain event metadata
// The `data.json` document pinned next to an event's content identifier

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl EventMetadata {
    /// Reads the document defensively: anything but a JSON object yields `None`,
    /// and each field is kept only when it is present as a string.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(bytes).ok()?;
        let object = value.as_object()?;
        let text = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .map(ToString::to_string)
        };
        Some(Self {
            name: text("name"),
            description: text("description"),
            link: text("link"),
            image: text("image"),
        })
    }
}
