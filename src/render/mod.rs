//! Inventory serializers.

pub mod ini;
pub mod json;

pub use ini::render_ini;
pub use json::render_json;

use crate::inventory::Inventory;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Static INI inventory (`[group]` sections, one host per line).
    #[default]
    Ini,
    /// Ansible dynamic-inventory JSON (groups plus `_meta.hostvars`).
    Json,
}

pub fn render(inventory: &Inventory, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Ini => Ok(render_ini(inventory)),
        Format::Json => render_json(inventory),
    }
}
