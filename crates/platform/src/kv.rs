//! Key-value maps parsed from power-supply text sources.

use std::collections::HashMap;

use crate::error::{ChargeError, Result};

/// Raw key to raw value, as reported by the OS.
pub type KeyValueMap = HashMap<String, String>;

/// Parse `KEY=VALUE` lines, splitting on the first `=`.
///
/// Lines without a `=` are skipped.
pub fn parse_uevent(text: &str) -> KeyValueMap {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// Parse every `"Key" = Value` pair found in `ioreg` output.
///
/// Quotes are stripped from keys and values, and a value ends at the first
/// space. Nested dictionary entries (`"Key"=Value`, no spaces) are ignored,
/// so only top-level properties of the registry entry are collected.
pub fn parse_ioreg(text: &str) -> KeyValueMap {
    let mut map = KeyValueMap::new();

    for line in text.lines() {
        let mut rest = line;
        while let Some(open) = rest.find('"') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('"') else {
                break;
            };
            let key = &after[..close];
            let tail = &after[close + 1..];

            let Some(value) = tail.strip_prefix(" = ") else {
                rest = tail;
                continue;
            };

            let token = value.split(' ').next().unwrap_or_default();
            let cleaned = token.replace('"', "");
            if !key.is_empty() && !cleaned.is_empty() {
                map.insert(key.to_string(), cleaned);
            }
            rest = &value[token.len()..];
        }
    }

    map
}

/// Look up `key` and parse it as an unsigned integer.
pub fn get_u64(map: &KeyValueMap, key: &str) -> Result<u64> {
    let raw = map.get(key).ok_or_else(|| ChargeError::missing_key(key))?;
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ChargeError::InvalidNumber {
            key: key.to_string(),
            value: raw.clone(),
        })
}

/// `100 * current / full`, truncating.
pub fn capacity_percent(current: u64, full: u64, full_key: &str) -> Result<u32> {
    if full == 0 {
        return Err(ChargeError::ZeroCapacity {
            key: full_key.to_string(),
        });
    }
    let percent = current.saturating_mul(100) / full;
    Ok(u32::try_from(percent).unwrap_or(u32::MAX))
}
