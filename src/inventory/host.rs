//! In-memory inventory model.
//!
//! Groups and hosts are kept in insertion order; rendering walks them as-is,
//! which is what makes the output byte-for-byte reproducible.

/// One host line: `<name> ansible_host=<address> [<key>=<value> ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub name: String,
    pub address: String,
    /// Extra host variables, rendered after `ansible_host` in this order.
    pub vars: Vec<(String, String)>,
}

impl HostEntry {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            vars: Vec::new(),
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.push((key.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostGroup {
    pub name: String,
    pub hosts: Vec<HostEntry>,
}

impl HostGroup {
    pub fn new(name: impl Into<String>, hosts: Vec<HostEntry>) -> Self {
        Self {
            name: name.into(),
            hosts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub groups: Vec<HostGroup>,
}

impl Inventory {
    pub fn host_count(&self) -> usize {
        self.groups.iter().map(|g| g.hosts.len()).sum()
    }
}
