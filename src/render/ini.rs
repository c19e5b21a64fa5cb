use crate::inventory::{HostEntry, Inventory};

/// Render the INI inventory:
///
/// [bootnode]
/// rpc-1 ansible_host=10.0.0.6 is_bootnode=true
///
/// [validators]
/// validator-1 ansible_host=10.0.0.1
///
/// Sections are separated by one blank line; the last host line ends with '\n'.
pub fn render_ini(inventory: &Inventory) -> String {
    let mut out = String::new();
    for (i, group) in inventory.groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push('[');
        out.push_str(&group.name);
        out.push_str("]\n");
        for host in &group.hosts {
            push_host_line(&mut out, host);
        }
    }
    out
}

fn push_host_line(out: &mut String, host: &HostEntry) {
    out.push_str(&host.name);
    out.push_str(" ansible_host=");
    out.push_str(&host.address);
    for (key, value) in &host.vars {
        out.push_str(&format!(" {}={}", key, value));
    }
    out.push('\n');
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
    fn five_validator_layout() {
        let inv = generate(&ips(8), 5).unwrap();
        let expected = "\
[bootnode]
rpc-1 ansible_host=10.0.0.6 is_bootnode=true

[validators]
validator-1 ansible_host=10.0.0.1
validator-2 ansible_host=10.0.0.2
validator-3 ansible_host=10.0.0.3
validator-4 ansible_host=10.0.0.4
validator-5 ansible_host=10.0.0.5

[rpcs]
rpc-2 ansible_host=10.0.0.7
rpc-3 ansible_host=10.0.0.8
";
        assert_eq!(render_ini(&inv), expected);
    }

    #[test]
    fn empty_validators_keeps_header() {
        let inv = generate(&ips(3), 0).unwrap();
        let expected = "\
[bootnode]
rpc-1 ansible_host=10.0.0.1 is_bootnode=true

[validators]

[rpcs]
rpc-2 ansible_host=10.0.0.2
rpc-3 ansible_host=10.0.0.3
";
        assert_eq!(render_ini(&inv), expected);
    }

    #[test]
    fn fifteen_validators_line_counts() {
        let inv = generate(&ips(18), 15).unwrap();
        let text = render_ini(&inv);

        let validator_lines = text
            .lines()
            .filter(|l| l.starts_with("validator-"))
            .count();
        assert_eq!(validator_lines, 15);
        assert!(text.contains("validator-15 ansible_host=10.0.0.15\n"));
        assert!(text.contains("rpc-1 ansible_host=10.0.0.16 is_bootnode=true\n"));
        assert!(text.ends_with("rpc-2 ansible_host=10.0.0.17\nrpc-3 ansible_host=10.0.0.18\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = render_ini(&generate(&ips(9), 6).unwrap());
        let second = render_ini(&generate(&ips(9), 6).unwrap());
        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
