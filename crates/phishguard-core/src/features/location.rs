//! Indicators over parsed URL components.
//!
//! Every hostname-derived check returns zero when the hostname is absent.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::url_model::{base_domain, ParsedUrl};

static DOTTED_QUAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("hardcoded regex pattern is valid")
});

fn labels(hostname: &str) -> Vec<&str> {
    hostname.split('.').collect()
}

/// Labels beyond the two-label base domain. One-label hosts yield 0.
pub fn subdomain_level(parsed: &ParsedUrl) -> usize {
    parsed
        .hostname()
        .map_or(0, |host| labels(host).len().saturating_sub(2))
}

/// Number of segments in the path once leading/trailing slashes are trimmed.
pub fn path_level(parsed: &ParsedUrl) -> usize {
    let trimmed = parsed.path().trim_matches('/');
    if trimmed.is_empty() {
        0
    } else {
        trimmed.matches('/').count() + 1
    }
}

pub fn num_dash_in_hostname(parsed: &ParsedUrl) -> usize {
    parsed.hostname().map_or(0, |host| host.matches('-').count())
}

pub fn num_query_components(parsed: &ParsedUrl) -> usize {
    parsed.query_params().len()
}

pub fn ip_address(parsed: &ParsedUrl) -> bool {
    parsed
        .hostname()
        .is_some_and(|host| DOTTED_QUAD.is_match(host))
}

/// Subdomain labels that differ from the base domain string.
pub fn domain_in_subdomains(parsed: &ParsedUrl) -> usize {
    let Some(host) = parsed.hostname() else {
        return 0;
    };
    let Some(base) = base_domain(host) else {
        return 0;
    };
    let labels = labels(host);
    labels[..labels.len() - 2]
        .iter()
        .filter(|label| **label != base)
        .count()
}

/// Base domain repeated inside the path, e.g. `evil.net/paypal.com/login`.
pub fn domain_in_paths(parsed: &ParsedUrl) -> bool {
    parsed
        .hostname()
        .and_then(base_domain)
        .is_some_and(|base| parsed.path().contains(&base))
}

pub fn https_in_hostname(parsed: &ParsedUrl) -> bool {
    parsed.hostname().is_some_and(|host| host.contains("https"))
}

pub fn hostname_length(parsed: &ParsedUrl) -> usize {
    parsed.hostname().map_or(0, |host| host.chars().count())
}

pub fn path_length(parsed: &ParsedUrl) -> usize {
    parsed.path().chars().count()
}

pub fn query_length(parsed: &ParsedUrl) -> usize {
    parsed.query().chars().count()
}

pub fn double_slash_in_path(parsed: &ParsedUrl) -> bool {
    parsed.path().contains("//")
}
