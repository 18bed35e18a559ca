//! Tokenization and stopword-aware keyword extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use prism_core::types::collections::FxHashSet;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("token regex"));

/// English function words plus Korean particles that carry no signal.
static STOPWORDS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        // English
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
        "by", "from", "as", "is", "was", "are", "were", "be", "been", "being", "have",
        "has", "had", "do", "does", "did", "will", "would", "should", "could", "may",
        "might", "can", "this", "that", "these", "those", "i", "you", "he", "she", "it",
        "we", "they", "them", "their", "my", "your", "very", "too", "also", "just", "so",
        "than", "such",
        // Korean particles and fillers
        "이", "그", "저", "것", "수", "등", "및", "를", "을", "가", "에", "의", "은", "는",
        "와", "과", "도", "로", "으로",
    ]
    .into_iter()
    .collect()
});

/// Split text into word tokens (Latin, Hangul, digits).
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns true for tokens carrying no signal.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token.to_lowercase().as_str())
}

/// Tokens of at least `min_len` characters that are not stopwords.
pub fn extract_keywords(text: &str, min_len: usize) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.chars().count() >= min_len && !is_stopword(t))
        .collect()
}
