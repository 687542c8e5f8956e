use std::net::IpAddr;
use url::{Host, Url};

pub const MAX_URL_LEN: usize = 2048;

const PRIVATE_HOSTS: [&str; 4] = ["localhost", "127.0.0.1", "0.0.0.0", "::1"];

/// Purely syntactic check of a user-supplied page URL.
///
/// Rejects anything that is not `http(s)://`, is longer than [`MAX_URL_LEN`]
/// characters, fails to parse, or names an internal host. No DNS lookups are
/// done, so a public name that resolves or redirects to an internal address
/// still passes.
pub fn is_valid_http_url(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.chars().count() > MAX_URL_LEN {
        return false;
    }

    if !has_http_scheme(candidate) {
        return false;
    }

    let Ok(parsed) = Url::parse(candidate) else {
        return false;
    };

    match parsed.host() {
        Some(Host::Domain(domain)) => !is_private_domain(domain),
        Some(Host::Ipv4(addr)) => !is_internal_ip(IpAddr::V4(addr)),
        Some(Host::Ipv6(addr)) => !is_internal_ip(IpAddr::V6(addr)),
        None => false,
    }
}

/// Case-insensitive `http://` / `https://` prefix check.
pub fn has_http_scheme(candidate: &str) -> bool {
    let prefix = candidate.get(..8).unwrap_or(candidate).to_ascii_lowercase();
    prefix.starts_with("http://") || prefix.starts_with("https://")
}

fn is_private_domain(domain: &str) -> bool {
    let domain = domain.trim_end_matches('.').to_ascii_lowercase();
    PRIVATE_HOSTS.contains(&domain.as_str()) || domain.ends_with(".local")
}

fn is_internal_ip(addr: IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => {
            v4.is_loopback()
                || v4.is_unspecified()
                || v4.is_private()
                || v4.is_link_local()
                || v4.is_broadcast()
        }
        IpAddr::V6(v6) => {
            if let Some(mapped) = v6.to_ipv4_mapped() {
                return is_internal_ip(IpAddr::V4(mapped));
            }
            let first = v6.segments()[0];
            v6.is_loopback()
                || v6.is_unspecified()
                // fc00::/7 unique local
                || (first & 0xfe00) == 0xfc00
                // fe80::/10 link local
                || (first & 0xffc0) == 0xfe80
        }
    }
}
