use alloy_primitives::Address;
use anyhow::{anyhow, Result};

pub fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("{} must not be empty", field));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(anyhow!("{} must be an http(s) url: {}", field, trimmed));
    }
    Ok(())
}

pub fn parse_account(value: &str) -> Result<Address> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if digits.len() != 40 {
        return Err(anyhow!("account must be a 20-byte hex address: {}", trimmed));
    }
    digits
        .parse::<Address>()
        .map_err(|err| anyhow!("invalid account {}: {}", trimmed, err))
}
