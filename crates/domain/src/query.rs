use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// A single IPv4 address returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    ip: String,
}

impl Address {
    pub fn new(ip: impl Into<String>) -> Self {
        Self { ip: ip.into() }
    }

    pub fn from_ipv4(ip: Ipv4Addr) -> Self {
        Self { ip: ip.to_string() }
    }

    /// Returns `None` for addresses that have no IPv4 form.
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are unwrapped.
    pub fn from_ip(ip: IpAddr) -> Option<Self> {
        match ip {
            IpAddr::V4(v4) => Some(Self::from_ipv4(v4)),
            IpAddr::V6(v6) => v6.to_ipv4_mapped().map(Self::from_ipv4),
        }
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }
}

/// Record of one completed DNS lookup.
///
/// Field names are part of the persisted format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, deserialize_with = "null_as_empty")]
    addresses: Vec<Address>,
    client_ip: String,
    created_at: i64,
    domain: String,
}

impl Query {
    pub fn new(
        domain: impl Into<String>,
        client_ip: impl Into<String>,
        addresses: Vec<Address>,
        created_at: i64,
    ) -> Self {
        Self {
            addresses,
            client_ip: client_ip.into(),
            created_at,
            domain: domain.into(),
        }
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn client_ip(&self) -> &str {
        &self.client_ip
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

// Older records store `"addresses": null` when a lookup had no IPv4 results.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Address>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
