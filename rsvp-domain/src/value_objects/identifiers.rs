// Identifier value objects

use alloy_primitives::{hex, Address, B256};
use serde::{Deserialize, Serialize};

/// Store key of an entity.
///
/// Event ids are the `0x`-prefixed lowercase hex form of the on-chain `bytes32`
/// event id, account ids the same form of the wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn from_event_id(event_id: &B256) -> Self {
        Self(hex::encode_prefixed(event_id))
    }

    pub fn from_address(address: &Address) -> Self {
        Self(hex::encode_prefixed(address))
    }

    /// Accepts user supplied event ids with or without `0x`, in any case.
    pub fn parse_event_id(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.len() != 64 || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_is_lowercase_prefixed_hex() {
        let mut raw = [0u8; 32];
        raw[0] = 0xAA;
        raw[31] = 0x01;
        let id = EntityId::from_event_id(&B256::from(raw));
        assert_eq!(
            id.as_str(),
            "0xaa00000000000000000000000000000000000000000000000000000000000001"
        );
    }

    #[test]
    fn parse_event_id_normalizes_case_and_prefix() {
        let upper = "AA00000000000000000000000000000000000000000000000000000000000001";
        let parsed = EntityId::parse_event_id(upper).expect("parse");
        assert_eq!(
            parsed.as_str(),
            "0xaa00000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(EntityId::parse_event_id(&format!("0x{upper}")), Some(parsed));
    }

    #[test]
    fn parse_event_id_rejects_wrong_length() {
        assert!(EntityId::parse_event_id("0x1234").is_none());
        assert!(EntityId::parse_event_id("").is_none());
        assert!(EntityId::parse_event_id(&"zz".repeat(32)).is_none());
    }
}
