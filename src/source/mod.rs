//! Address acquisition: Terraform output or a saved copy of it.

pub mod decode;
pub mod terraform;

pub use decode::decode_addresses;
pub use terraform::{TerraformQuery, query_terraform};

use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a payload saved from `terraform output -json node_ips`.
pub fn read_addresses_file(path: &Path) -> anyhow::Result<Vec<String>> {
    info!(path = %path.display(), "reading addresses from file");
    let raw = fs::read(path).with_context(|| format!("read addresses file {}", path.display()))?;
    decode_addresses(&raw).with_context(|| format!("decode addresses file {}", path.display()))
}
