use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

mod inventory;
mod render;
mod source;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "node-inventory")]
#[command(about = "Ansible inventory generator for Terraform-provisioned nodes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the bootnode / validators / rpcs inventory from the node address list.
    Generate {
        /// Number of validator hosts; the bootnode and two rpc hosts follow them.
        #[arg(
            short = 'v',
            long,
            env = "INVENTORY_VALIDATORS",
            default_value_t = 5,
            allow_negative_numbers = true
        )]
        validators: i64,

        #[arg(long, env = "TERRAFORM_DIR", default_value = "../terraform")]
        terraform_dir: PathBuf,

        #[arg(long, env = "TERRAFORM_BIN", default_value = "terraform")]
        terraform_bin: String,

        #[arg(long, default_value = "node_ips")]
        output_name: String,

        /// Read a saved `terraform output -json` payload instead of running terraform.
        #[arg(long)]
        ips_file: Option<PathBuf>,

        /// Destination file, or `-` for stdout.
        #[arg(short = 'o', long, default_value = "inventory.ini")]
        out: String,

        #[arg(long, value_enum, default_value_t = render::Format::Ini)]
        format: render::Format,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli.cmd, &mut std::io::stdout().lock())
}

/// Execute one command. `stdout` receives the inventory when `--out -` is given.
fn run(cmd: Commands, stdout: &mut impl Write) -> Result<()> {
    match cmd {
        Commands::Generate {
            validators,
            terraform_dir,
            terraform_bin,
            output_name,
            ips_file,
            out,
            format,
        } => {
            // 1) Acquire the ordered address list.
            let addresses = match &ips_file {
                Some(path) => source::read_addresses_file(path),
                None => source::query_terraform(&source::TerraformQuery {
                    bin: terraform_bin,
                    dir: terraform_dir,
                    output_name,
                }),
            }
            .context("query: could not obtain node addresses")?;
            info!(count = addresses.len(), "received node addresses");

            // 2) Partition into host groups.
            let inv = inventory::generate(&addresses, validators)
                .context("partition: could not assign node roles")?;
            for group in &inv.groups {
                info!(group = %group.name, hosts = group.hosts.len(), "built host group");
            }

            // 3) Render + write (overwrites any previous inventory).
            let text = render::render(&inv, format).context("write: could not render inventory")?;
            if out == "-" {
                stdout
                    .write_all(text.as_bytes())
                    .and_then(|_| stdout.flush())
                    .context("write: could not write inventory to stdout")?;
            } else {
                fs::write(&out, text)
                    .with_context(|| format!("write: could not write inventory to {}", out))?;
                info!(path = %out, hosts = inv.host_count(), "wrote inventory");
            }
        }
    }

    Ok(())
}
