// Event kind value object

use alloy_primitives::B256;
use alloy_sol_types::SolEvent;
use serde::{Deserialize, Serialize};

use crate::contract::Web3RSVP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    NewEventCreated,
    NewRsvp,
    ConfirmedAttendee,
    DepositsPaidOut,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::NewEventCreated,
        EventKind::NewRsvp,
        EventKind::ConfirmedAttendee,
        EventKind::DepositsPaidOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::NewEventCreated => "NewEventCreated",
            EventKind::NewRsvp => "NesRSVP",
            EventKind::ConfirmedAttendee => "ConfirmedAttendee",
            EventKind::DepositsPaidOut => "DepositsPaidOut",
        }
    }

    /// Canonical Solidity signature, e.g. `DepositsPaidOut(bytes32)`.
    pub fn signature(&self) -> &'static str {
        match self {
            EventKind::NewEventCreated => Web3RSVP::NewEventCreated::SIGNATURE,
            EventKind::NewRsvp => Web3RSVP::NesRSVP::SIGNATURE,
            EventKind::ConfirmedAttendee => Web3RSVP::ConfirmedAttendee::SIGNATURE,
            EventKind::DepositsPaidOut => Web3RSVP::DepositsPaidOut::SIGNATURE,
        }
    }

    /// topic0 of logs carrying this event.
    pub fn signature_hash(&self) -> B256 {
        match self {
            EventKind::NewEventCreated => Web3RSVP::NewEventCreated::SIGNATURE_HASH,
            EventKind::NewRsvp => Web3RSVP::NesRSVP::SIGNATURE_HASH,
            EventKind::ConfirmedAttendee => Web3RSVP::ConfirmedAttendee::SIGNATURE_HASH,
            EventKind::DepositsPaidOut => Web3RSVP::DepositsPaidOut::SIGNATURE_HASH,
        }
    }

    pub fn from_topic(topic: &B256) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.signature_hash() == *topic)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signatures_match_contract_declarations() {
        assert_eq!(
            EventKind::NewEventCreated.signature(),
            "NewEventCreated(bytes32,address,uint256,uint256,uint256,string)"
        );
        assert_eq!(EventKind::NewRsvp.signature(), "NesRSVP(bytes32,address)");
        assert_eq!(
            EventKind::ConfirmedAttendee.signature(),
            "ConfirmedAttendee(bytes32,address)"
        );
        assert_eq!(EventKind::DepositsPaidOut.signature(), "DepositsPaidOut(bytes32)");
    }

    #[test]
    fn from_topic_round_trips_every_kind() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_topic(&kind.signature_hash()), Some(kind));
        }
        assert_eq!(EventKind::from_topic(&B256::ZERO), None);
    }
}
