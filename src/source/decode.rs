//! Decoding of the `terraform output -json` payload.
//!
//! Accepted shapes:
//!   ["10.0.0.1", "10.0.0.2", ...]                           // output -json node_ips
//!   { "sensitive": false, "type": [...], "value": [...] }   // one entry of output -json

use anyhow::{Context, bail};
use regex::Regex;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<String>),
    Wrapped { value: Vec<String> },
}

/// Decode and validate an ordered address list.
///
/// Each address becomes a single `ansible_host=` token, so anything that would
/// break the INI grammar (whitespace, '=', comment or section characters) is
/// rejected rather than written.
pub fn decode_addresses(raw: &[u8]) -> anyhow::Result<Vec<String>> {
    let payload: Payload = serde_json::from_slice(raw)
        .context("expected a JSON list of address strings (or an object with a \"value\" list)")?;

    let list = match payload {
        Payload::List(list) | Payload::Wrapped { value: list } => list,
    };

    let re = Regex::new(r"^[^\s=#;\[\]]+$")?;

    let mut out = Vec::with_capacity(list.len());
    for (idx, addr) in list.into_iter().enumerate() {
        let addr = addr.trim();
        if addr.is_empty() {
            bail!("address at index {} is empty", idx);
        }
        if !re.is_match(addr) {
            bail!("address at index {} is malformed: {:?}", idx, addr);
        }
        out.push(addr.to_string());
    }

    Ok(out)
}
