//! Hostname helpers.

/// Extracts the lower-cased hostname from a network location
/// (`user:pass@host:port`, `[v6]:port`).
///
/// Returns `None` for an empty host or unbalanced IPv6 brackets.
pub fn authority_host(netloc: &str) -> Option<String> {
    if netloc.contains('[') != netloc.contains(']') {
        return None;
    }
    let hostinfo = netloc.rsplit_once('@').map_or(netloc, |(_, h)| h);
    let host = match hostinfo.split_once('[') {
        Some((_, bracketed)) => bracketed.split_once(']').map_or(bracketed, |(h, _)| h),
        None => hostinfo.split_once(':').map_or(hostinfo, |(h, _)| h),
    };
    if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    }
}

/// Registrable domain heuristic: the last two dot-separated labels.
///
/// Not public-suffix aware (`a.b.co.uk` yields `co.uk`). `None` for a
/// single-label hostname.
pub fn base_domain(hostname: &str) -> Option<String> {
    let mut labels = hostname.rsplit('.');
    let tld = labels.next()?;
    let sld = labels.next()?;
    Some(format!("{sld}.{tld}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_host_variants() {
        assert_eq!(authority_host("Example.COM").as_deref(), Some("example.com"));
        assert_eq!(authority_host("a@b.com").as_deref(), Some("b.com"));
        assert_eq!(authority_host("u@x@b.com:81").as_deref(), Some("b.com"));
        assert_eq!(authority_host("[::1]:8080").as_deref(), Some("::1"));
        assert_eq!(authority_host(""), None);
        assert_eq!(authority_host(":80"), None);
        assert_eq!(authority_host("[::1"), None);
    }

    #[test]
    fn base_domain_last_two_labels() {
        assert_eq!(base_domain("a.b.example.com").as_deref(), Some("example.com"));
        assert_eq!(base_domain("example.com").as_deref(), Some("example.com"));
        assert_eq!(base_domain("localhost"), None);
    }
}
