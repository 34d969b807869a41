//! Host/scheme and character-class extractors.
//!
//! All extractors are total: a URL that fails to parse contributes 0 rather
//! than an error, so the pipeline never fails on syntactically unusual input.

/// 1 if the parsed host is non-empty and occurs verbatim as a substring of
/// the full URL string, else 0. Parse failure → 0.
///
/// `url::Url` lowercases registered-domain hosts, so an upper-cased host in
/// the raw string does not match — that is the behavior the model was
/// trained against and is kept as-is.
pub fn abnormal_url(url: &str) -> u64 {
    match url::Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() && url.contains(host) => 1,
            _ => 0,
        },
        Err(_) => 0,
    }
}

/// 1 if the parsed scheme is exactly `https`, else 0. Parse failure → 0.
pub fn https_secure(url: &str) -> u64 {
    match url::Url::parse(url) {
        Ok(parsed) if parsed.scheme() == "https" => 1,
        _ => 0,
    }
}

/// Count of numeric characters (Unicode-aware, like the training pipeline).
pub fn digit_count(url: &str) -> u64 {
    url.chars().filter(|c| c.is_numeric()).count() as u64
}

/// Count of alphabetic characters (Unicode-aware).
pub fn letter_count(url: &str) -> u64 {
    url.chars().filter(|c| c.is_alphabetic()).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abnormal_url_host_present_in_string() {
        assert_eq!(abnormal_url("http://example.com/page"), 1);
        assert_eq!(abnormal_url("https://sub.example.com/a/b"), 1);
    }

    #[test]
    fn abnormal_url_uppercase_host_does_not_match() {
        // Parsed host is lowercased; the raw string keeps its case.
        assert_eq!(abnormal_url("http://EXAMPLE.COM/page"), 0);
    }

    #[test]
    fn abnormal_url_unparseable_is_zero() {
        assert_eq!(abnormal_url("not a url at all"), 0);
        assert_eq!(abnormal_url(""), 0);
    }

    #[test]
    fn https_secure_scheme_exact() {
        assert_eq!(https_secure("https://example.com"), 1);
        assert_eq!(https_secure("http://example.com"), 0);
        assert_eq!(https_secure("garbage"), 0);
    }

    #[test]
    fn digit_and_letter_counts() {
        assert_eq!(digit_count("http://a1b2.c/3"), 3);
        assert_eq!(letter_count("http://a1b2.c/3"), 7);
        assert_eq!(digit_count("no-digits-here"), 0);
    }
}
