//! Query-string decoding.

use std::collections::BTreeMap;

/// Decodes an `&`-separated query string into a multi-valued map.
///
/// Percent escapes and `+` are decoded. Pairs with an empty value (including
/// bare keys without `=`) are dropped.
pub fn parse_query(query: &str) -> BTreeMap<String, Vec<String>> {
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_collapse() {
        let p = parse_query("a=1&b=2&a=3");
        assert_eq!(p.len(), 2);
        assert_eq!(p["a"], vec!["1", "3"]);
    }

    #[test]
    fn blank_values_dropped() {
        let p = parse_query("a=&b&c=1");
        assert_eq!(p.len(), 1);
        assert!(p.contains_key("c"));
    }

    #[test]
    fn decodes_escapes() {
        let p = parse_query("q=hello+world&k%20ey=%41");
        assert_eq!(p["q"], vec!["hello world"]);
        assert_eq!(p["k ey"], vec!["A"]);
    }

    #[test]
    fn empty_query() {
        assert!(parse_query("").is_empty());
    }
}
