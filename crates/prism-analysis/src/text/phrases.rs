//! N-gram phrase extraction.
//!
//! Bigrams need at least 4 characters and trigrams at least 6 — shorter
//! combinations are almost always particle noise in either language.

use super::tokenize::{is_stopword, tokenize};

const MIN_BIGRAM_CHARS: usize = 4;
const MIN_TRIGRAM_CHARS: usize = 6;

/// Extract 2- and 3-word phrases from the token stream.
pub fn extract_phrases(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let mut phrases = Vec::new();

    for window in tokens.windows(2) {
        let phrase = window.join(" ");
        if phrase.chars().count() >= MIN_BIGRAM_CHARS {
            phrases.push(phrase);
        }
    }

    for window in tokens.windows(3) {
        let phrase = window.join(" ");
        if phrase.chars().count() >= MIN_TRIGRAM_CHARS {
            phrases.push(phrase);
        }
    }

    phrases
}

/// English-side phrase extraction: lowercased Latin tokens with stopword
/// pruning. A bigram survives when either token is a content word; a trigram
/// when any of the three is.
pub fn extract_english_phrases(text: &str) -> Vec<String> {
    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|t| t.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|t| t.to_lowercase())
        .collect();

    let mut phrases = Vec::new();

    for window in tokens.windows(2) {
        if !is_stopword(&window[0]) || !is_stopword(&window[1]) {
            phrases.push(window.join(" "));
        }
    }

    for window in tokens.windows(3) {
        if window.iter().any(|t| !is_stopword(t)) {
            phrases.push(window.join(" "));
        }
    }

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bigrams_and_trigrams() {
        let phrases = extract_phrases("봄 화보 촬영 문의");
        assert!(phrases.contains(&"화보 촬영".to_string()));
        assert!(phrases.contains(&"봄 화보 촬영".to_string()));
        assert!(phrases.contains(&"화보 촬영 문의".to_string()));
    }

    #[test]
    fn short_bigrams_skipped() {
        // "봄 꿈" is 3 chars with the space — under the bigram floor.
        let phrases = extract_phrases("봄 꿈");
        assert!(phrases.is_empty());
    }

    #[test]
    fn english_phrases_prune_stopword_pairs() {
        let phrases = extract_english_phrases("the price is so transparent");
        assert!(phrases.contains(&"the price".to_string()));
        assert!(phrases.contains(&"so transparent".to_string()));
        // all-stopword bigram dropped
        assert!(!phrases.contains(&"is so".to_string()));
    }

    #[test]
    fn english_phrases_ignore_digits_and_hangul() {
        let phrases = extract_english_phrases("easy booking 2024 예약");
        assert_eq!(phrases, vec!["easy booking".to_string()]);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(extract_phrases("").is_empty());
        assert!(extract_english_phrases("").is_empty());
    }
}
