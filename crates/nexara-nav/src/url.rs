//! URL bar input handling: normalization and display names.

use nexara_types::is_home;

/// Normalize raw URL bar input into a navigable URL.
///
/// Surrounding whitespace is trimmed and empty input yields `None`. The
/// home sentinel passes through untouched; anything else without an
/// `http://` or `https://` prefix gets `https://` prepended.
pub fn normalize(raw: &str) -> Option<String> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }
    if is_home(input) || has_scheme(input) {
        Some(input.to_string())
    } else {
        Some(format!("https://{input}"))
    }
}

fn has_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Display name for a URL: the host segment, i.e. the text between the
/// scheme and the first `/`.
pub fn host_label(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.split('/').next().unwrap_or(rest)
}
