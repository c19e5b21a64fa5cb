//! Ansible dynamic-inventory JSON.
//!
//! Shape:
//! {
//!   "bootnode":   { "hosts": ["rpc-1"] },
//!   "validators": { "hosts": ["validator-1", ...] },
//!   "rpcs":       { "hosts": ["rpc-2", "rpc-3"] },
//!   "_meta": {
//!     "hostvars": {
//!       "rpc-1": { "ansible_host": "10.0.0.6", "is_bootnode": true },
//!       ...
//!     }
//!   }
//! }
//!
//! serde_json::Map is sorted by key, so the output is stable across runs.

use crate::inventory::Inventory;
use serde_json::{Map, Value, json};

pub fn render_json(inventory: &Inventory) -> anyhow::Result<String> {
    let mut root = Map::new();
    let mut hostvars = Map::new();

    for group in &inventory.groups {
        let hosts: Vec<&str> = group.hosts.iter().map(|h| h.name.as_str()).collect();
        root.insert(group.name.clone(), json!({ "hosts": hosts }));

        for host in &group.hosts {
            let mut vars = Map::new();
            vars.insert("ansible_host".to_string(), Value::from(host.address.as_str()));
            for (key, value) in &host.vars {
                vars.insert(key.clone(), var_value(value));
            }
            hostvars.insert(host.name.clone(), Value::Object(vars));
        }
    }

    root.insert("_meta".to_string(), json!({ "hostvars": hostvars }));

    let mut out = serde_json::to_string_pretty(&Value::Object(root))?;
    out.push('\n');
    Ok(out)
}

/// INI vars are untyped; booleans are the only ones worth typing in JSON.
fn var_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::generate;
    use pretty_assertions::assert_eq;

    fn ips(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("10.0.0.{}", i)).collect()
    }

    #[test]
    fn groups_and_hostvars() {
        let inv = generate(&ips(5), 2).unwrap();
        let text = render_json(&inv).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed["bootnode"]["hosts"], json!(["rpc-1"]));
        assert_eq!(
            parsed["validators"]["hosts"],
            json!(["validator-1", "validator-2"])
        );
        assert_eq!(parsed["rpcs"]["hosts"], json!(["rpc-2", "rpc-3"]));

        let hostvars = &parsed["_meta"]["hostvars"];
        assert_eq!(
            hostvars["rpc-1"],
            json!({ "ansible_host": "10.0.0.3", "is_bootnode": true })
        );
        assert_eq!(hostvars["validator-1"], json!({ "ansible_host": "10.0.0.1" }));
        assert_eq!(hostvars["rpc-3"], json!({ "ansible_host": "10.0.0.5" }));
    }

    #[test]
    fn empty_group_has_empty_host_list() {
        let inv = generate(&ips(3), 0).unwrap();
        let parsed: Value = serde_json::from_str(&render_json(&inv).unwrap()).unwrap();
        assert_eq!(parsed["validators"]["hosts"], json!([]));
    }

    #[test]
    fn output_is_stable() {
        let inv = generate(&ips(8), 5).unwrap();
        let a = render_json(&inv).unwrap();
        let b = render_json(&inv).unwrap();
        assert_eq!(a, b);
        assert!(a.ends_with("}\n"));
    }
}
