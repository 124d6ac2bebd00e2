use std::sync::LazyLock;

use regex::Regex;

// Optional http(s) scheme, dot-separated labels, alphabetic final label of at
// least two letters, optional path.
static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(/\S*)?$").expect("valid URL pattern")
});

/// Strips surrounding whitespace, including a stray byte-order mark.
pub fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Permissive check that `text` looks like a URL. Surrounding whitespace is
/// ignored. This is a heuristic, not a full URL parse.
pub fn is_valid_url(text: &str) -> bool {
    URL_SHAPE.is_match(trim_input(text))
}
