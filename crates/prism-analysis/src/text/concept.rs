//! Concept-word scan over the English side of inquiry texts.

use crate::counts::{CountEntry, Counter};

/// The fixed concept vocabulary clients use to describe a shoot's direction.
pub const CONCEPT_WORDS: &[&str] = &[
    "concept",
    "style",
    "vibe",
    "mood",
    "theme",
    "feel",
    "aesthetic",
    "casual",
    "formal",
    "minimal",
    "modern",
    "vintage",
    "natural",
    "professional",
    "lifestyle",
    "commercial",
    "editorial",
];

/// Count, per concept word, how many texts mention it (substring match on
/// the lowercased text). Words with no mentions are omitted.
pub fn scan<'a, I: IntoIterator<Item = &'a str>>(texts: I) -> Vec<CountEntry> {
    let lowered: Vec<String> = texts.into_iter().map(|t| t.to_lowercase()).collect();

    let mut counter = Counter::new();
    for word in CONCEPT_WORDS {
        for text in &lowered {
            if text.contains(word) {
                counter.add(*word);
            }
        }
    }

    counter.ranked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_texts_mentioning_each_word() {
        let texts = [
            "Minimal concept with natural light",
            "minimal lookbook",
            "studio shoot",
        ];
        let mentions = scan(texts);

        let minimal = mentions.iter().find(|e| e.value == "minimal").unwrap();
        assert_eq!(minimal.count, 2);
        let natural = mentions.iter().find(|e| e.value == "natural").unwrap();
        assert_eq!(natural.count, 1);
        assert!(mentions.iter().all(|e| e.count > 0));
    }

    #[test]
    fn no_mentions_yields_empty() {
        assert!(scan(["완전 다른 내용"]).is_empty());
    }
}
