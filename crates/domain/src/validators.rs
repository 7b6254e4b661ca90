use std::net::IpAddr;

/// Syntactic IP literal check: dotted-decimal IPv4 or colon-hex IPv6,
/// including abbreviated and IPv4-suffixed forms.
pub fn is_valid_ip(candidate: &str) -> bool {
    match candidate.parse::<IpAddr>() {
        // The family match cannot reject anything that parsed; it is kept
        // so the rule reads the same as the historic two-step check.
        Ok(IpAddr::V4(_)) | Ok(IpAddr::V6(_)) => true,
        Err(_) => false,
    }
}

pub fn validate_domain(domain: &str) -> Result<(), String> {
    if domain.is_empty() {
        return Err("Missing required parameter: domain".to_string());
    }
    Ok(())
}
