use serde_json::{json, Value};

/// Common test domains
pub struct TestDomains;

impl TestDomains {
    pub fn example() -> &'static str {
        "example.com"
    }

    pub fn dual_stack() -> &'static str {
        "dual.example.net"
    }

    pub fn ipv6_only() -> &'static str {
        "v6only.example.org"
    }

    pub fn nonexistent() -> &'static str {
        "nonexistent.invalid"
    }
}

/// A stored history entry in its persisted JSON form
pub fn stored_entry(domain: &str, created_at: i64, ips: &[&str]) -> String {
    let addresses: Vec<Value> = ips.iter().map(|ip| json!({ "ip": ip })).collect();
    json!({
        "addresses": addresses,
        "client_ip": "198.51.100.10",
        "created_at": created_at,
        "domain": domain,
    })
    .to_string()
}

pub fn domains_of(history: &Value) -> Vec<String> {
    history
        .as_array()
        .expect("history is an array")
        .iter()
        .map(|q| q["domain"].as_str().expect("domain is a string").to_string())
        .collect()
}
