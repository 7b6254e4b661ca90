use ferrous_lookup_domain::{Address, Query};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressResponse {
    pub ip: String,
}

impl From<&Address> for AddressResponse {
    fn from(address: &Address) -> Self {
        Self {
            ip: address.ip().to_string(),
        }
    }
}

/// Wire form of a recorded lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub addresses: Vec<AddressResponse>,
    pub client_ip: String,
    pub created_at: i64,
    pub domain: String,
}

impl From<Query> for QueryResponse {
    fn from(query: Query) -> Self {
        Self {
            addresses: query.addresses().iter().map(AddressResponse::from).collect(),
            client_ip: query.client_ip().to_string(),
            created_at: query.created_at(),
            domain: query.domain().to_string(),
        }
    }
}

/// Query-string pairs as sent, duplicates included
pub type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupParams {
    pub domain: String,
}

impl LookupParams {
    /// First `domain` value wins; other parameters are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            domain: first_value(pairs, "domain").unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryParams {
    /// Optional, capped at the configured retention. Values that are not
    /// a non-negative integer are ignored.
    pub limit: Option<u32>,
}

impl HistoryParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            limit: first_value(pairs, "limit").and_then(|v| v.trim().parse().ok()),
        }
    }
}

fn first_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}
