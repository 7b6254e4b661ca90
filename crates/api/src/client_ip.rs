use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

/// Caller address as seen through reverse proxies.
///
/// Order: first `X-Forwarded-For` hop, `X-Real-IP`, then the TCP peer.
/// Header values that are not IP literals are ignored. Empty when nothing
/// is known (e.g. routers driven without `ConnectInfo`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        Ok(ClientIp(resolve_client_ip(&parts.headers, peer)))
    }
}

pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    forwarded_for(headers)
        .or_else(|| header_ip(headers, "x-real-ip"))
        .or_else(|| peer.map(|addr| addr.ip()))
        .map(|ip| ip.to_string())
        .unwrap_or_default()
}

fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .and_then(|hop| hop.trim().parse().ok())
}

fn header_ip(headers: &HeaderMap, name: &str) -> Option<IpAddr> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
