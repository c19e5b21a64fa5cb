//! Positional partition of an ordered address list into host groups.
//!
//! For a validator count V:
//!   [0, V)   -> validator-1 .. validator-V
//!   V        -> rpc-1 (bootnode, is_bootnode=true)
//!   V+1, V+2 -> rpc-2, rpc-3
//!
//! Addresses past V+2 are not assigned.

use crate::inventory::{HostEntry, HostGroup, Inventory};
use thiserror::Error;
use tracing::debug;

/// Number of RPC hosts, counting the bootnode (which is named `rpc-1`).
pub const RPC_COUNT: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("validator count must be non-negative, got {0}")]
    InvalidCount(i64),
    #[error(
        "address index out of range: {validators} validators need at least {needed} addresses, got {len}"
    )]
    IndexOutOfRange {
        len: usize,
        validators: u64,
        needed: u64,
    },
}

/// Partition `addresses` into the `bootnode`, `validators` and `rpcs` groups.
pub fn generate(addresses: &[String], validator_count: i64) -> Result<Inventory, GenerateError> {
    if validator_count < 0 {
        return Err(GenerateError::InvalidCount(validator_count));
    }
    let validators = validator_count as u64;
    let needed = validators.saturating_add(RPC_COUNT as u64);

    if (addresses.len() as u64) < needed {
        return Err(GenerateError::IndexOutOfRange {
            len: addresses.len(),
            validators,
            needed,
        });
    }
    // Fits: needed <= len.
    let v = validators as usize;

    let bootnode = HostEntry::new("rpc-1", &addresses[v]).with_var("is_bootnode", "true");

    let validator_hosts = addresses[..v]
        .iter()
        .enumerate()
        .map(|(i, addr)| HostEntry::new(format!("validator-{}", i + 1), addr))
        .collect();

    // rpc-1 is the bootnode, so the remaining names continue from 2.
    let rpc_hosts = addresses[v + 1..v + RPC_COUNT]
        .iter()
        .enumerate()
        .map(|(i, addr)| HostEntry::new(format!("rpc-{}", i + 2), addr))
        .collect();

    let unused = addresses.len() - v - RPC_COUNT;
    if unused > 0 {
        debug!(unused, "addresses past the rpc range were not assigned");
    }

    Ok(Inventory {
        groups: vec![
            HostGroup::new("bootnode", vec![bootnode]),
            HostGroup::new("validators", validator_hosts),
            HostGroup::new("rpcs", rpc_hosts),
        ],
    })
}
