//! Indicators over the raw URL string.
//!
//! These read the URL exactly as submitted; nothing here is normalised
//! except where a check lower-cases for itself.

/// Words that tend to appear in credential-harvesting URLs.
pub const SENSITIVE_WORDS: [&str; 6] = ["password", "secret", "admin", "login", "bank", "credit"];

/// Frequently impersonated brands.
pub const BRAND_NAMES: [&str; 5] = ["google", "facebook", "twitter", "amazon", "apple"];

fn count_char(url: &str, needle: char) -> usize {
    url.chars().filter(|&c| c == needle).count()
}

pub fn num_dots(url: &str) -> usize {
    count_char(url, '.')
}

/// Length in characters, not bytes.
pub fn url_length(url: &str) -> usize {
    url.chars().count()
}

pub fn num_dash(url: &str) -> usize {
    count_char(url, '-')
}

pub fn at_symbol(url: &str) -> bool {
    url.contains('@')
}

pub fn tilde_symbol(url: &str) -> bool {
    url.contains('~')
}

pub fn num_underscore(url: &str) -> usize {
    count_char(url, '_')
}

pub fn num_percent(url: &str) -> usize {
    count_char(url, '%')
}

pub fn num_ampersand(url: &str) -> usize {
    count_char(url, '&')
}

pub fn num_hash(url: &str) -> usize {
    count_char(url, '#')
}

pub fn num_numeric_chars(url: &str) -> usize {
    url.chars().filter(char::is_ascii_digit).count()
}

/// True when the literal `https://` appears nowhere in the URL.
pub fn no_https(url: &str) -> bool {
    !url.contains("https://")
}

/// Characters outside `[A-Za-z0-9]`; a crude randomness proxy.
pub fn random_string(url: &str) -> usize {
    url.chars().filter(|c| !c.is_ascii_alphanumeric()).count()
}

/// Number of distinct sensitive words found, case-insensitively.
pub fn num_sensitive_words(url: &str) -> usize {
    let lower = url.to_lowercase();
    SENSITIVE_WORDS
        .iter()
        .filter(|word| lower.contains(*word))
        .count()
}

pub fn embedded_brand_name(url: &str) -> bool {
    let lower = url.to_lowercase();
    BRAND_NAMES.iter().any(|brand| lower.contains(*brand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_all_zero() {
        assert_eq!(num_dots(""), 0);
        assert_eq!(url_length(""), 0);
        assert_eq!(random_string(""), 0);
        assert_eq!(num_sensitive_words(""), 0);
        assert!(!at_symbol(""));
        assert!(no_https(""));
    }

    #[test]
    fn character_counts() {
        let url = "http://my-site_x.example.com/a%20b?x=1&y=2#top";
        assert_eq!(num_dots(url), 2);
        assert_eq!(num_dash(url), 1);
        assert_eq!(num_underscore(url), 1);
        assert_eq!(num_percent(url), 1);
        assert_eq!(num_ampersand(url), 1);
        assert_eq!(num_hash(url), 1);
        assert_eq!(num_numeric_chars(url), 4);
    }

    #[test]
    fn symbols() {
        assert!(at_symbol("http://a@b.com"));
        assert!(!at_symbol("http://b.com"));
        assert!(tilde_symbol("http://b.com/~user"));
    }

    #[test]
    fn https_literal() {
        assert!(!no_https("https://bank.com"));
        assert!(no_https("http://bank.com"));
        assert!(no_https("HTTPS://bank.com"));
        assert!(!no_https("http://evil.com/?next=https://bank.com"));
    }

    #[test]
    fn random_string_counts_non_alphanumerics() {
        assert_eq!(random_string("http://a.b"), 4);
        assert_eq!(random_string("abc123"), 0);
        assert_eq!(random_string("é"), 1);
    }

    #[test]
    fn url_length_counts_chars() {
        assert_eq!(url_length("http://ü.de"), 11);
    }

    #[test]
    fn sensitive_words_counted_once_each() {
        assert_eq!(num_sensitive_words("http://secure-login-admin.example.com"), 2);
        assert_eq!(num_sensitive_words("http://LOGIN.example.com/login"), 1);
        assert_eq!(num_sensitive_words("http://bank.com/credit/password"), 3);
    }

    #[test]
    fn brand_names() {
        assert!(embedded_brand_name("http://PayPal-Apple-id.com"));
        assert!(!embedded_brand_name("http://example.com"));
    }
}
