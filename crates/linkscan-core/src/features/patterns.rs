//! Regex-backed heuristics: shortener allowlist and dotted-quad IP match.

use std::sync::OnceLock;

use regex::Regex;

/// Known URL-shortener domains, matched case-sensitively anywhere in the
/// full URL string (not just the host). The list — duplicates included — is
/// what the classifier was trained against; do not dedupe or extend it.
const SHORTENER_PATTERN: &str = concat!(
    r"(bit\.ly|goo\.gl|shorte\.st|go2l\.ink|x\.co|ow\.ly|t\.co|tinyurl|tr\.im|is\.gd|cli\.gs|",
    r"yfrog\.com|migre\.me|ff\.im|tiny\.cc|url4\.eu|twit\.ac|su\.pr|twurl\.nl|snipurl\.com|",
    r"short\.to|BudURL\.com|ping\.fm|post\.ly|Just\.as|bkite\.com|snipr\.com|fic\.kr|loopt\.us|",
    r"doiop\.com|short\.ie|kl\.am|wp\.me|rubyurl\.com|om\.ly|to\.ly|bit\.do|t\.co|lnkd\.in|",
    r"db\.tt|qr\.ae|adf\.ly|goo\.gl|bitly\.com|cur\.lv|tinyurl\.com|ow\.ly|bit\.ly|ity\.im|",
    r"q\.gs|is\.gd|po\.st|bc\.vc|twitthis\.com|u\.to|j\.mp|buzurl\.com|cutt\.us|u\.bb|yourls\.org|",
    r"x\.co|prettylinkpro\.com|scrnch\.me|filoops\.info|vzturl\.com|qr\.net|1url\.com|tweez\.me|v\.gd|",
    r"tr\.im|link\.zip\.net)",
);

/// Dotted-quad pattern. Octet ranges are deliberately NOT validated
/// (999.999.999.999 matches): the artifact was trained with this exact
/// leniency and tightening it would shift the feature distribution.
const IP_PATTERN: &str = r"(?:\d{1,3}\.){3}\d{1,3}";

fn shortener_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SHORTENER_PATTERN).ok()).as_ref()
}

fn ip_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(IP_PATTERN).ok()).as_ref()
}

/// 1 if the URL matches any known shortener domain, else 0.
pub fn shortening_service(url: &str) -> u64 {
    match shortener_regex() {
        Some(re) if re.is_match(url) => 1,
        _ => 0,
    }
}

/// 1 if the URL contains a dotted-quad anywhere, else 0.
pub fn having_ip_address(url: &str) -> u64 {
    match ip_regex() {
        Some(re) if re.is_match(url) => 1,
        _ => 0,
    }
}
