use crate::errors::DomainError;
use std::net::IpAddr;

/// Second-level labels that are registries rather than owners under a
/// country-code TLD, e.g. `co.uk` or `com.hk`.
const REGISTRY_SECOND_LEVELS: &[&str] = &["ac", "co", "com", "edu", "gov", "ne", "net", "or", "org"];

/// The destination of a proxied request, as seen by the classifier.
///
/// `domain` is the registered domain used as the secondary lookup key. It is
/// empty for bare host names and private addresses, which are always reached
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    pub host: String,
    pub domain: String,
    pub port: Option<u16>,
}

impl RouteTarget {
    pub fn new(host: impl Into<String>, domain: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            domain: domain.into(),
            port,
        }
    }

    /// Builds a target from `host`, `host:port` or `[v6]:port`.
    pub fn parse(authority: &str) -> Result<Self, DomainError> {
        let authority = authority.trim();
        if authority.is_empty() {
            return Err(DomainError::InvalidDomainName(authority.to_string()));
        }

        let (host, port) = split_host_port(authority)?;
        if host.is_empty() {
            return Err(DomainError::InvalidDomainName(authority.to_string()));
        }

        let domain = registered_domain(host);
        Ok(Self::new(host, domain, port))
    }

    /// `host:port` for log lines; just the host when no port is known.
    pub fn host_port(&self) -> String {
        match (self.port, self.host.contains(':')) {
            (Some(port), true) => format!("[{}]:{}", self.host, port),
            (Some(port), false) => format!("{}:{}", self.host, port),
            (None, _) => self.host.clone(),
        }
    }

    pub fn host_is_ip(&self) -> bool {
        self.host.parse::<IpAddr>().is_ok()
    }

    pub fn has_domain(&self) -> bool {
        !self.domain.is_empty()
    }
}

impl std::fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.host_port())
    }
}

fn split_host_port(authority: &str) -> Result<(&str, Option<u16>), DomainError> {
    let invalid = || DomainError::InvalidDomainName(authority.to_string());

    if let Some(rest) = authority.strip_prefix('[') {
        let (host, tail) = rest.split_once(']').ok_or_else(invalid)?;
        return match tail {
            "" => Ok((host, None)),
            _ => {
                let port = tail.strip_prefix(':').ok_or_else(invalid)?;
                Ok((host, Some(port.parse().map_err(|_| invalid())?)))
            }
        };
    }

    // More than one colon without brackets is a bare IPv6 address.
    match authority.split_once(':') {
        Some((host, port)) if !port.contains(':') => {
            Ok((host, Some(port.parse().map_err(|_| invalid())?)))
        }
        _ => Ok((authority, None)),
    }
}

/// Registered domain of `host`: empty for simple host names and private
/// addresses, the address itself for public IPs.
pub fn registered_domain(host: &str) -> String {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return if is_private(&ip) {
            String::new()
        } else {
            host.to_string()
        };
    }

    let host = host.trim_end_matches('.');
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return String::new();
    }

    let tld = labels[labels.len() - 1];
    let second = labels[labels.len() - 2];
    let keep = if labels.len() >= 3 && tld.len() == 2 && REGISTRY_SECOND_LEVELS.contains(&second)
    {
        3
    } else {
        2
    };

    labels[labels.len() - keep..].join(".")
}

fn is_private(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_private() || v4.is_loopback() || v4.is_link_local(),
        IpAddr::V6(v6) => v6.is_loopback() || (v6.segments()[0] & 0xfe00) == 0xfc00,
    }
}

/// Whether `name` still carries a `:port` suffix.
pub fn has_port(name: &str) -> bool {
    if let Some(rest) = name.strip_prefix('[') {
        return rest.contains("]:");
    }
    name.matches(':').count() == 1
}
