//! URL normalization: scheme prefixing before any feature is computed.

/// Prepends `http://` when the input carries neither an `http://` nor an
/// `https://` prefix. Idempotent after one application; the classifier was
/// trained on normalized inputs, so every pipeline entry point goes through
/// this first.
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    }
}
