//! Lenient generic-URL splitting (`scheme://netloc/path;params?query#fragment`).

/// Schemes whose last path segment may carry `;params`.
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Raw URL components before hostname and query decoding.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct RawParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub query: String,
}

/// Splits `url` into its components. Leading control characters and spaces
/// are stripped and embedded tabs/newlines removed before splitting.
pub(super) fn split(url: &str) -> RawParts {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    let mut rest = cleaned.as_str();

    let mut scheme = String::new();
    if let Some(i) = rest.find(':') {
        let candidate = &rest[..i];
        if is_scheme(candidate) {
            scheme = candidate.to_ascii_lowercase();
            rest = &rest[i + 1..];
        }
    }

    let mut netloc = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after
            .find(|c| matches!(c, '/' | '?' | '#'))
            .unwrap_or(after.len());
        netloc = &after[..end];
        rest = &after[end..];
    }

    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    let path = if PARAM_SCHEMES.contains(&scheme.as_str()) {
        strip_params(path)
    } else {
        path
    };

    RawParts {
        scheme,
        netloc: netloc.to_string(),
        path: path.to_string(),
        query: query.to_string(),
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Drops `;params` from the last path segment.
fn strip_params(path: &str) -> &str {
    let last_segment = path.rfind('/').unwrap_or(0);
    match path[last_segment..].find(';') {
        Some(i) => &path[..last_segment + i],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_strips_leading_whitespace_and_tabs() {
        let p = split("  \thttp://a.com/p\tath\n");
        assert_eq!(p.scheme, "http");
        assert_eq!(p.netloc, "a.com");
        assert_eq!(p.path, "/path");
    }

    #[test]
    fn split_rejects_invalid_scheme() {
        let p = split("1http://a.com");
        assert_eq!(p.scheme, "");
        assert_eq!(p.path, "1http://a.com");

        let p = split("ma il:x");
        assert_eq!(p.scheme, "");
    }

    #[test]
    fn split_host_port_without_slashes() {
        let p = split("localhost:8080");
        assert_eq!(p.scheme, "localhost");
        assert_eq!(p.netloc, "");
        assert_eq!(p.path, "8080");
    }

    #[test]
    fn split_netloc_ends_at_query() {
        let p = split("http://a.com?x=1");
        assert_eq!(p.netloc, "a.com");
        assert_eq!(p.path, "");
        assert_eq!(p.query, "x=1");
    }

    #[test]
    fn split_keeps_params_for_unknown_scheme() {
        let p = split("data:text/plain;base64,AAAA");
        assert_eq!(p.scheme, "data");
        assert_eq!(p.path, "text/plain;base64,AAAA");
    }

    #[test]
    fn strip_params_only_last_segment() {
        assert_eq!(strip_params("/a;x/b;y"), "/a;x/b");
        assert_eq!(strip_params("a;b"), "a");
        assert_eq!(strip_params("/plain"), "/plain");
    }
}
