//! Style tag label cleanup.

use once_cell::sync::Lazy;
use regex::Regex;

static NEW_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(new\)\s*").expect("new-marker regex"));

/// Clean a bilingual tag label down to its Latin-script part.
/// `"(New) Active Wear 액티브웨어"` → `"Active Wear"`.
pub fn clean_tag_name(tag: &str) -> String {
    let without_marker = NEW_MARKER_RE.replace_all(tag, "");

    without_marker
        .split_whitespace()
        .filter(|word| word.chars().any(|c| c.is_ascii_alphabetic()))
        .collect::<Vec<_>>()
        .join(" ")
}
