use anyhow::{anyhow, bail};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Parses a non-negative amount, accepting `,` and `_` as thousands separators.
pub fn parse_amount(s: &str) -> anyhow::Result<u64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    if cleaned.is_empty() {
        bail!("empty amount");
    }
    cleaned
        .parse::<u64>()
        .map_err(|e| anyhow!("invalid amount {s}: {e}"))
}

/// Like [`parse_amount`], but a leading `-` is accepted and saturates to 0.
pub fn parse_amount_clamped(s: &str) -> anyhow::Result<u64> {
    match s.trim().strip_prefix('-') {
        Some(magnitude) => parse_amount(magnitude).map(|_| 0),
        None => parse_amount(s),
    }
}
