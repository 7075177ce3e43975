// Ethereum node adapter over HTTP JSON-RPC.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use alloy_primitives::{Address, Bytes, B256};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use rsvp_domain::ports::{LogSource, WalletProvider};
use rsvp_domain::{LogFilter, RawLog};

use crate::utils::{parse_hex_quantity, to_hex_quantity};

pub struct JsonRpcClient {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcLog {
    address: Address,
    topics: Vec<B256>,
    data: Bytes,
    block_number: Option<String>,
    log_index: Option<String>,
    transaction_hash: Option<B256>,
    #[serde(default)]
    removed: bool,
}

impl RpcLog {
    /// `None` for pending or reorged-out logs.
    fn into_raw(self) -> Result<Option<RawLog>> {
        if self.removed {
            return Ok(None);
        }
        let (Some(block_number), Some(log_index)) = (self.block_number, self.log_index) else {
            return Ok(None);
        };
        Ok(Some(RawLog {
            address: self.address,
            topics: self.topics,
            data: self.data,
            block_number: parse_hex_quantity(&block_number)?,
            log_index: parse_hex_quantity(&log_index)?,
            transaction_hash: self.transaction_hash,
        }))
    }
}

impl JsonRpcClient {
    pub fn new(url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds.max(3)))
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        let response: RpcResponse<T> = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        decode_response(method, response)
    }
}

fn decode_response<T>(method: &str, response: RpcResponse<T>) -> Result<T> {
    if let Some(error) = response.error {
        return Err(anyhow!(
            "{} failed with code {}: {}",
            method,
            error.code,
            error.message
        ));
    }
    response
        .result
        .ok_or_else(|| anyhow!("{} returned no result", method))
}

fn log_filter_params(filter: &LogFilter) -> Value {
    json!([{
        "address": filter.address,
        "topics": [filter.topics],
        "fromBlock": to_hex_quantity(filter.from_block),
        "toBlock": to_hex_quantity(filter.to_block),
    }])
}

#[async_trait]
impl LogSource for JsonRpcClient {
    async fn latest_block(&self) -> Result<u64> {
        let quantity: String = self.call("eth_blockNumber", json!([])).await?;
        parse_hex_quantity(&quantity)
    }

    async fn fetch_logs(&self, filter: &LogFilter) -> Result<Vec<RawLog>> {
        let logs: Vec<RpcLog> = self.call("eth_getLogs", log_filter_params(filter)).await?;
        let mut out = Vec::with_capacity(logs.len());
        for log in logs {
            match log.into_raw()? {
                Some(raw) => out.push(raw),
                None => debug!("dropping pending or removed log"),
            }
        }
        Ok(out)
    }
}

#[async_trait]
impl WalletProvider for JsonRpcClient {
    async fn request_signer(&self) -> Result<Address> {
        let accounts: Vec<Address> = self.call("eth_accounts", json!([])).await?;
        accounts
            .first()
            .copied()
            .ok_or_else(|| anyhow!("node exposes no unlocked accounts"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsvp_domain::{EventKind, CONTRACT_ADDRESS};

    #[test]
    fn filter_params_use_topic_alternatives() {
        let filter = LogFilter::for_contract(CONTRACT_ADDRESS, 16, 31);
        let params = log_filter_params(&filter);
        let object = &params[0];
        assert_eq!(object["fromBlock"], "0x10");
        assert_eq!(object["toBlock"], "0x1f");
        assert_eq!(
            object["address"].as_str().map(str::to_ascii_lowercase),
            Some("0xfb4b6ad39323005170ab8008436248d04622ff7b".to_string())
        );
        let alternatives = object["topics"][0].as_array().expect("topic array");
        assert_eq!(alternatives.len(), EventKind::ALL.len());
    }

    #[test]
    fn rpc_logs_convert_and_drop_removed() {
        let raw: Vec<RpcLog> = serde_json::from_value(json!([
            {
                "address": "0xfb4b6ad39323005170ab8008436248d04622ff7b",
                "topics": [format!("{}", EventKind::DepositsPaidOut.signature_hash())],
                "data": "0x01",
                "blockNumber": "0x1b4",
                "logIndex": "0x2",
                "transactionHash": null,
                "removed": false
            },
            {
                "address": "0xfb4b6ad39323005170ab8008436248d04622ff7b",
                "topics": [],
                "data": "0x",
                "blockNumber": "0x1b5",
                "logIndex": "0x0",
                "removed": true
            },
            {
                "address": "0xfb4b6ad39323005170ab8008436248d04622ff7b",
                "topics": [],
                "data": "0x",
                "blockNumber": null,
                "logIndex": null
            }
        ]))
        .expect("logs");

        let converted: Vec<RawLog> = raw
            .into_iter()
            .filter_map(|log| log.into_raw().expect("convert"))
            .collect();
        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].address, CONTRACT_ADDRESS);
        assert_eq!(converted[0].position(), (436, 2));
    }

    #[test]
    fn rpc_errors_surface_code_and_message() {
        let response: RpcResponse<String> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32005, "message": "query returned more than 10000 results"}
        }))
        .expect("response");
        let err = decode_response("eth_getLogs", response).expect_err("error");
        assert!(err.to_string().contains("-32005"));
    }
}
