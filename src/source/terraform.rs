use crate::source::decode_addresses;
use anyhow::{Context, bail};
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

/// Where and how to ask Terraform for the node addresses.
#[derive(Debug, Clone)]
pub struct TerraformQuery {
    pub bin: String,
    pub dir: PathBuf,
    pub output_name: String,
}

impl TerraformQuery {
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.args(["output", "-json", &self.output_name])
            .current_dir(&self.dir);
        cmd
    }
}

/// Run `terraform output -json <name>` once and decode its stdout.
///
/// Blocks until the tool exits; there is no timeout and no retry.
pub fn query_terraform(query: &TerraformQuery) -> anyhow::Result<Vec<String>> {
    info!(
        bin = %query.bin,
        dir = %query.dir.display(),
        output = %query.output_name,
        "querying terraform output"
    );

    let output = query.command().output().with_context(|| {
        format!(
            "run {} output -json {} in {}",
            query.bin,
            query.output_name,
            query.dir.display()
        )
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "{} output -json {} exited with {}: {}",
            query.bin,
            query.output_name,
            output.status,
            stderr.trim()
        );
    }
    debug!(bytes = output.stdout.len(), "terraform output received");

    decode_addresses(&output.stdout)
        .with_context(|| format!("decode terraform output {:?}", query.output_name))
}
