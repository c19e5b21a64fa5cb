//! Inventory layer: host groups and the positional partition that fills them.
//!
//! It owns:
//! - HostEntry / HostGroup / Inventory (in-memory inventory model)
//! - generate (address list + validator count -> Inventory)

pub mod host;
pub mod partition;

pub use host::{HostEntry, HostGroup, Inventory};
pub use partition::generate;
