use std::io::Read;

use anyhow::{Context, Result};
use axum::http::header::{AUTHORIZATION, CONTENT_ENCODING};
use axum::http::HeaderMap;
use flate2::read::GzDecoder;

use rsvp_domain::{IngestEnvelope, RawLog, RuntimeConfig};

/// Open when no `api_token` is configured; otherwise the request must carry
/// `Authorization: Bearer <api_token>`.
pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    match config.api_token.as_deref() {
        None => true,
        Some(expected) => bearer_token(headers) == Some(expected),
    }
}

/// Decodes an ingest body: `{"logs": [...]}`, optionally gzip-encoded.
pub fn parse_logs(headers: &HeaderMap, body: &[u8]) -> Result<Vec<RawLog>> {
    let envelope: IngestEnvelope = if is_gzip(headers) {
        let mut raw = Vec::new();
        GzDecoder::new(body)
            .read_to_end(&mut raw)
            .context("invalid gzip body")?;
        serde_json::from_slice(&raw)?
    } else {
        serde_json::from_slice(body)?
    };
    Ok(envelope.logs)
}

fn is_gzip(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_ENCODING)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim().eq_ignore_ascii_case("gzip"))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.trim().strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}
