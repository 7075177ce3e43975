use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use rsvp_domain::ports::MetadataStore;

/// Reads content-addressed documents through an HTTP IPFS gateway.
pub struct IpfsGatewayStore {
    client: Client,
    gateway_url: String,
}

impl IpfsGatewayStore {
    pub fn new(gateway_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds.max(1)))
            .build()?;
        Ok(Self {
            client,
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn document_url(&self, path: &str) -> String {
        format!("{}/ipfs/{}", self.gateway_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl MetadataStore for IpfsGatewayStore {
    async fn cat(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let url = self.document_url(path);
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("gateway has no document at {}", url);
            return Ok(None);
        }
        let response = response.error_for_status()?;
        Ok(Some(response.bytes().await?.to_vec()))
    }
}
