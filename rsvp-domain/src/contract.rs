// Web3RSVP contract definition
// Fixed deployment address, event declarations and the static ABI document.

// The sol! macro generates code with Solidity naming
#![allow(non_snake_case)]

use std::sync::Arc;

use alloy_primitives::{address, Address};
use alloy_sol_types::sol;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::LogFilter;
use crate::value_objects::EventKind;

pub const CONTRACT_ADDRESS: Address = address!("Fb4B6aD39323005170Ab8008436248D04622Ff7B");

const WEB3_RSVP_ABI_JSON: &str = include_str!("../abi/Web3RSVP.json");

sol! {
    /// Events emitted by the Web3RSVP contract. None of the parameters are indexed,
    /// so every log carries only the signature hash as topic0.
    #[derive(Debug, PartialEq, Eq)]
    interface Web3RSVP {
        event NewEventCreated(
            bytes32 eventID,
            address creatorAddress,
            uint256 eventTimestamp,
            uint256 maxCapacity,
            uint256 deposit,
            string eventDataCID
        );

        // Name matches the deployed contract's event, typo included.
        event NesRSVP(bytes32 eventID, address attendeeAddress);

        event ConfirmedAttendee(bytes32 eventID, address attendeeAddress);

        event DepositsPaidOut(bytes32 eventID);
    }
}

#[derive(Debug, Error)]
pub enum AbiError {
    #[error("abi document is invalid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("abi is missing event {0}")]
    MissingEvent(&'static str),
    #[error("abi declares {found}, expected {expected}")]
    SignatureMismatch {
        expected: &'static str,
        found: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub indexed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    #[serde(
        default,
        rename = "stateMutability",
        skip_serializing_if = "Option::is_none"
    )]
    pub state_mutability: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
}

impl AbiEntry {
    pub fn signature(&self) -> String {
        let params = self
            .inputs
            .iter()
            .map(|param| param.kind.as_str())
            .collect::<Vec<_>>()
            .join(",");
        format!("{}({})", self.name.as_deref().unwrap_or_default(), params)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractAbi {
    #[serde(rename = "contractName")]
    pub contract_name: String,
    pub abi: Vec<AbiEntry>,
}

impl ContractAbi {
    /// Parses the ABI bundled with the crate and checks it against the event
    /// declarations the indexer decodes with.
    pub fn load_bundled() -> Result<Self, AbiError> {
        let abi = Self::parse(WEB3_RSVP_ABI_JSON)?;
        abi.verify_events()?;
        Ok(abi)
    }

    pub fn parse(raw: &str) -> Result<Self, AbiError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn verify_events(&self) -> Result<(), AbiError> {
        for kind in EventKind::ALL {
            let entry = self
                .event(kind.as_str())
                .ok_or(AbiError::MissingEvent(kind.as_str()))?;
            let found = entry.signature();
            if found != kind.signature() {
                return Err(AbiError::SignatureMismatch {
                    expected: kind.signature(),
                    found,
                });
            }
        }
        Ok(())
    }

    pub fn event(&self, name: &str) -> Option<&AbiEntry> {
        self.entries("event")
            .find(|entry| entry.name.as_deref() == Some(name))
    }

    pub fn event_names(&self) -> Vec<String> {
        self.entries("event")
            .filter_map(|entry| entry.name.clone())
            .collect()
    }

    pub fn function_names(&self) -> Vec<String> {
        self.entries("function")
            .filter_map(|entry| entry.name.clone())
            .collect()
    }

    fn entries<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a AbiEntry> + 'a {
        self.abi.iter().filter(move |entry| entry.kind == kind)
    }
}

/// Contract interface bound to the deployment address and a signing account.
#[derive(Debug, Clone)]
pub struct ContractHandle {
    address: Address,
    abi: Arc<ContractAbi>,
    signer: Address,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContractHandleInfo {
    pub contract_name: String,
    pub address: Address,
    pub signer: Address,
    pub events: Vec<String>,
    pub functions: Vec<String>,
}

impl ContractHandle {
    pub fn new(address: Address, abi: Arc<ContractAbi>, signer: Address) -> Self {
        Self {
            address,
            abi,
            signer,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn signer(&self) -> Address {
        self.signer
    }

    pub fn abi(&self) -> &ContractAbi {
        &self.abi
    }

    pub fn log_filter(&self, from_block: u64, to_block: u64) -> LogFilter {
        LogFilter::for_contract(self.address, from_block, to_block)
    }

    pub fn info(&self) -> ContractHandleInfo {
        ContractHandleInfo {
            contract_name: self.abi.contract_name.clone(),
            address: self.address,
            signer: self.signer,
            events: self.abi.event_names(),
            functions: self.abi.function_names(),
        }
    }
}
