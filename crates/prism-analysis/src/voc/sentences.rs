//! Sentence splitting for feedback text.

/// Split feedback text into trimmed, non-empty sentences.
/// Splits on `.`, `!`, `?`, their fullwidth forms, and newlines.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?', '。', '！', '？', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
