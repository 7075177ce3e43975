use anyhow::{anyhow, Result};

/// Ethereum JSON-RPC quantity encoding: `0x`-prefixed, no leading zeros.
pub fn to_hex_quantity(value: u64) -> String {
    format!("{:#x}", value)
}

pub fn parse_hex_quantity(value: &str) -> Result<u64> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| anyhow!("quantity without 0x prefix: {}", value))?;
    if digits.is_empty() {
        return Err(anyhow!("empty quantity"));
    }
    u64::from_str_radix(digits, 16).map_err(|err| anyhow!("invalid quantity {}: {}", value, err))
}
