//! Feature extraction: URL string → fixed-order numeric vector.
//!
//! Column order is a hard contract with the trained artifact (the predictor
//! is positional over feature columns), and the individual heuristics must
//! keep the exact matching semantics the model was trained against —
//! loosening or "fixing" one silently shifts the feature distribution.

mod extract;
mod patterns;

pub use extract::{abnormal_url, digit_count, https_secure, letter_count};
pub use patterns::{having_ip_address, shortening_service};

/// Number of feature columns.
pub const FEATURE_COUNT: usize = 20;

/// Special tokens counted as substring occurrences, in column order.
/// All are single characters except `//`, which is a 2-char substring
/// (non-overlapping count).
pub const SPECIAL_TOKENS: [&str; 13] = [
    "@", "?", "-", "=", ".", "#", "%", "+", "$", "!", "*", ",", "//",
];

/// Canonical feature column names, in the order the predictor expects.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "url_len",
    "@",
    "?",
    "-",
    "=",
    ".",
    "#",
    "%",
    "+",
    "$",
    "!",
    "*",
    ",",
    "//",
    "abnormal_url",
    "https",
    "digits",
    "letters",
    "shortening_service",
    "having_ip_address",
];

/// One URL's feature record: every column present, values non-negative by
/// construction, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    values: [u64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Builds the full feature record for an already-normalized URL.
    /// Pure function of its input; total (extractors degrade to 0 on any
    /// internal failure rather than erroring).
    pub fn from_url(url: &str) -> Self {
        let mut values = [0u64; FEATURE_COUNT];
        values[0] = url.chars().count() as u64;
        for (i, token) in SPECIAL_TOKENS.iter().enumerate() {
            values[1 + i] = url.matches(*token).count() as u64;
        }
        values[14] = abnormal_url(url);
        values[15] = https_secure(url);
        values[16] = digit_count(url);
        values[17] = letter_count(url);
        values[18] = shortening_service(url);
        values[19] = having_ip_address(url);
        Self { values }
    }

    /// Column values in canonical order.
    pub fn values(&self) -> &[u64; FEATURE_COUNT] {
        &self.values
    }

    /// Looks up a single column by name.
    pub fn get(&self, name: &str) -> Option<u64> {
        let idx = FEATURE_NAMES.iter().position(|n| *n == name)?;
        Some(self.values[idx])
    }

    /// Iterates `(name, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }
}
