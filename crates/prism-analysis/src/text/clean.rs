//! Text cleaning for vocabulary analysis.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bhttps?://\S+|\bwww\.\S+").expect("url regex")
});

// \w is Unicode-aware here, so Hangul survives the sweep.
static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("non-word regex"));

/// Clean a text field: strip URLs, replace punctuation and symbols with
/// spaces, collapse runs of whitespace.
pub fn clean_text(text: &str) -> String {
    let without_urls = URL_RE.replace_all(text, " ");
    let without_symbols = NON_WORD_RE.replace_all(&without_urls, " ");
    without_symbols
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
