//! URL decomposition for feature extraction.
//!
//! Splits a raw URL into scheme, hostname, path and query without ever
//! failing. Pieces that cannot be recognised are left empty (or absent, for
//! the hostname) so that indicators built on top of them fall back to zero.

mod host;
mod query;
mod split;

pub use host::{authority_host, base_domain};
pub use query::parse_query;

use std::collections::BTreeMap;

/// A URL broken into the components the indicators consume.
///
/// Built once per input by [`parse`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    scheme: String,
    hostname: Option<String>,
    path: String,
    query: String,
    query_params: BTreeMap<String, Vec<String>>,
}

impl ParsedUrl {
    /// Lower-cased scheme, or `""` when the input has none.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Lower-cased hostname. `None` when the URL has no network location,
    /// the host part is empty, or its IPv6 brackets are unbalanced.
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query string without the leading `?`.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Decoded query parameters; keys with only blank values are omitted.
    pub fn query_params(&self) -> &BTreeMap<String, Vec<String>> {
        &self.query_params
    }
}

/// Parses `url` leniently. Never fails: malformed input yields empty fields.
///
/// # Examples
///
/// - `parse("http://Example.com/a?x=1")` → host `example.com`, path `/a`, query `x=1`
/// - `parse("example.com/login")` → no host, path `example.com/login`
pub fn parse(url: &str) -> ParsedUrl {
    let parts = split::split(url);
    let hostname = authority_host(&parts.netloc);
    let query_params = parse_query(&parts.query);

    ParsedUrl {
        scheme: parts.scheme,
        hostname,
        path: parts.path,
        query: parts.query,
        query_params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_url() {
        let p = parse("http://example.com/path/to/page?x=1&y=2");
        assert_eq!(p.scheme(), "http");
        assert_eq!(p.hostname(), Some("example.com"));
        assert_eq!(p.path(), "/path/to/page");
        assert_eq!(p.query(), "x=1&y=2");
        assert_eq!(p.query_params().len(), 2);
    }

    #[test]
    fn parse_lowercases_scheme_and_host() {
        let p = parse("HTTPS://WWW.Example.COM/Login");
        assert_eq!(p.scheme(), "https");
        assert_eq!(p.hostname(), Some("www.example.com"));
        assert_eq!(p.path(), "/Login");
    }

    #[test]
    fn parse_without_scheme_has_no_host() {
        let p = parse("example.com/login");
        assert_eq!(p.scheme(), "");
        assert_eq!(p.hostname(), None);
        assert_eq!(p.path(), "example.com/login");
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(parse(""), ParsedUrl::default());
    }

    #[test]
    fn parse_userinfo_and_port() {
        let p = parse("http://user:pw@Host.example.org:8080/x");
        assert_eq!(p.hostname(), Some("host.example.org"));
        assert_eq!(p.path(), "/x");
    }

    #[test]
    fn parse_fragment_is_dropped() {
        let p = parse("http://a.com/p?q=1#frag?x");
        assert_eq!(p.path(), "/p");
        assert_eq!(p.query(), "q=1");
    }

    #[test]
    fn parse_unbalanced_ipv6_degrades() {
        let p = parse("http://[::1/path?a=b");
        assert_eq!(p.hostname(), None);
        assert_eq!(p.query(), "a=b");
    }

    #[test]
    fn parse_path_params_removed() {
        let p = parse("http://a.com/dir;v=1/file;type=a?q=1");
        assert_eq!(p.path(), "/dir;v=1/file");
    }
}
