// Decoded contract events
// Typed view of the four Web3RSVP logs the projector dispatches on.

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolEvent;
use serde::Serialize;
use thiserror::Error;

use crate::contract::Web3RSVP;
use crate::entities::RawLog;
use crate::value_objects::EventKind;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("log has no topics")]
    MissingTopic,
    #[error("unknown event signature {0}")]
    UnknownSignature(B256),
    #[error("failed to decode {kind}: {source}")]
    Abi {
        kind: EventKind,
        source: alloy_sol_types::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCreated {
    pub event_id: B256,
    pub creator: Address,
    pub event_timestamp: U256,
    pub max_capacity: U256,
    pub deposit: U256,
    pub event_data_cid: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendeeAction {
    pub event_id: B256,
    pub attendee: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepositsPayout {
    pub event_id: B256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ContractEvent {
    NewEventCreated(EventCreated),
    NewRsvp(AttendeeAction),
    ConfirmedAttendee(AttendeeAction),
    DepositsPaidOut(DepositsPayout),
}

impl ContractEvent {
    pub fn decode(log: &RawLog) -> Result<Self, DecodeError> {
        let topic0 = log.topics.first().ok_or(DecodeError::MissingTopic)?;
        let kind = EventKind::from_topic(topic0).ok_or(DecodeError::UnknownSignature(*topic0))?;
        let topics = log.topics.iter().copied();
        let data = log.data.as_ref();
        let abi_err = |source| DecodeError::Abi { kind, source };

        let event = match kind {
            EventKind::NewEventCreated => {
                let raw = Web3RSVP::NewEventCreated::decode_raw_log(topics, data, true)
                    .map_err(abi_err)?;
                ContractEvent::NewEventCreated(EventCreated {
                    event_id: raw.eventID,
                    creator: raw.creatorAddress,
                    event_timestamp: raw.eventTimestamp,
                    max_capacity: raw.maxCapacity,
                    deposit: raw.deposit,
                    event_data_cid: raw.eventDataCID,
                })
            }
            EventKind::NewRsvp => {
                let raw =
                    Web3RSVP::NesRSVP::decode_raw_log(topics, data, true).map_err(abi_err)?;
                ContractEvent::NewRsvp(AttendeeAction {
                    event_id: raw.eventID,
                    attendee: raw.attendeeAddress,
                })
            }
            EventKind::ConfirmedAttendee => {
                let raw = Web3RSVP::ConfirmedAttendee::decode_raw_log(topics, data, true)
                    .map_err(abi_err)?;
                ContractEvent::ConfirmedAttendee(AttendeeAction {
                    event_id: raw.eventID,
                    attendee: raw.attendeeAddress,
                })
            }
            EventKind::DepositsPaidOut => {
                let raw = Web3RSVP::DepositsPaidOut::decode_raw_log(topics, data, true)
                    .map_err(abi_err)?;
                ContractEvent::DepositsPaidOut(DepositsPayout {
                    event_id: raw.eventID,
                })
            }
        };
        Ok(event)
    }

    pub fn kind(&self) -> EventKind {
        match self {
            ContractEvent::NewEventCreated(_) => EventKind::NewEventCreated,
            ContractEvent::NewRsvp(_) => EventKind::NewRsvp,
            ContractEvent::ConfirmedAttendee(_) => EventKind::ConfirmedAttendee,
            ContractEvent::DepositsPaidOut(_) => EventKind::DepositsPaidOut,
        }
    }

    pub fn event_id(&self) -> B256 {
        match self {
            ContractEvent::NewEventCreated(created) => created.event_id,
            ContractEvent::NewRsvp(action) | ContractEvent::ConfirmedAttendee(action) => {
                action.event_id
            }
            ContractEvent::DepositsPaidOut(payout) => payout.event_id,
        }
    }
}
