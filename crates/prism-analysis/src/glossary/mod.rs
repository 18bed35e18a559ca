//! Korean→English marketplace term glossary.
//!
//! Replaces the online translation step: booking inquiries draw on a small,
//! stable vocabulary of shoot, style, and product terms, so a fixed lexicon
//! scanned with Aho-Corasick renders the English side of job names and
//! phrases without any network surface. A Korean term may map to several
//! English keywords ("웨딩" → bridal, wedding).

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

use prism_core::types::collections::FxHashSet;

/// Term table: Korean surface form → comma-joined English keywords.
const TERMS: &[(&str, &str)] = &[
    // Shoot types
    ("룩북", "lookbook"),
    ("화보", "editorial"),
    ("캠페인", "campaign"),
    ("광고", "advertisement"),
    ("영상", "video"),
    ("필름", "film"),
    ("촬영", "photoshoot"),
    ("웨딩", "bridal, wedding"),
    ("뷰티", "beauty"),
    ("코스메틱", "cosmetic"),
    ("패션", "fashion"),
    ("스킨케어", "skincare"),
    ("메이크업", "makeup"),
    ("향수", "perfume, fragrance"),
    ("주얼리", "jewelry"),
    ("액세서리", "accessory"),
    ("의류", "apparel, clothing"),
    ("신발", "footwear, shoes"),
    ("가방", "bag"),
    ("시계", "watch"),
    // Styles
    ("미니멀", "minimal, minimalist"),
    ("심플", "simple, clean"),
    ("모던", "modern"),
    ("빈티지", "vintage"),
    ("레트로", "retro"),
    ("클래식", "classic"),
    ("캐주얼", "casual"),
    ("스트릿", "street, streetwear"),
    ("럭셔리", "luxury"),
    ("프리미엄", "premium"),
    ("엘레강스", "elegant, elegance"),
    ("시크", "chic"),
    ("내추럴", "natural"),
    ("유니크", "unique"),
    // Concepts
    ("봄", "spring"),
    ("여름", "summer"),
    ("가을", "fall, autumn"),
    ("겨울", "winter"),
    ("신제품", "new product, launch"),
    ("런칭", "launch"),
    ("글로벌", "global"),
    ("샘플", "sample"),
    ("스튜디오", "studio"),
    ("야외", "outdoor"),
    ("실내", "indoor"),
    // Product types
    ("립밤", "lip balm"),
    ("립스틱", "lipstick"),
    ("립", "lip"),
    ("파운데이션", "foundation"),
    ("크림", "cream"),
    ("세럼", "serum"),
    ("마스크", "mask"),
    ("니트", "knit, knitwear"),
    ("티셔츠", "tshirt"),
    ("원피스", "dress"),
    ("자켓", "jacket"),
    ("코트", "coat"),
    ("팬츠", "pants"),
    ("스커트", "skirt"),
];

/// Glossary matcher over the term table.
pub struct Glossary {
    automaton: AhoCorasick,
}

static SHARED: Lazy<Glossary> = Lazy::new(Glossary::new);

impl Glossary {
    fn new() -> Self {
        let patterns: Vec<&str> = TERMS.iter().map(|(korean, _)| *korean).collect();
        // Leftmost-longest so 립스틱 wins over 립 at the same position.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(patterns)
            .expect("glossary automaton builds from a fixed term table");
        Self { automaton }
    }

    /// The process-wide glossary instance.
    pub fn shared() -> &'static Glossary {
        &SHARED
    }

    /// English keywords for every glossary term found in `text`,
    /// deduplicated in match order.
    pub fn keywords_in(&self, text: &str) -> Vec<String> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut keywords = Vec::new();

        for m in self.automaton.find_iter(text) {
            let (_, english) = TERMS[m.pattern().as_usize()];
            for keyword in english.split(',') {
                let keyword = keyword.trim();
                if !keyword.is_empty() && seen.insert(keyword) {
                    keywords.push(keyword.to_string());
                }
            }
        }

        keywords
    }

    /// Render a Korean phrase into its glossary keywords, when any match.
    pub fn gloss(&self, text: &str) -> Option<String> {
        let keywords = self.keywords_in(text);
        if keywords.is_empty() {
            None
        } else {
            Some(keywords.join(", "))
        }
    }

    pub fn term_count(&self) -> usize {
        TERMS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_terms_and_expands_multi_keyword_entries() {
        let glossary = Glossary::shared();
        let keywords = glossary.keywords_in("봄 웨딩 화보 촬영");
        assert_eq!(
            keywords,
            vec!["spring", "bridal", "wedding", "editorial", "photoshoot"]
        );
    }

    #[test]
    fn longest_match_wins() {
        let glossary = Glossary::shared();
        let keywords = glossary.keywords_in("립스틱 광고");
        assert_eq!(keywords, vec!["lipstick", "advertisement"]);
    }

    #[test]
    fn duplicate_terms_dedupe() {
        let glossary = Glossary::shared();
        let keywords = glossary.keywords_in("촬영 촬영 촬영");
        assert_eq!(keywords, vec!["photoshoot"]);
    }

    #[test]
    fn gloss_of_unmatched_text_is_none() {
        let glossary = Glossary::shared();
        assert_eq!(glossary.gloss("hello world"), None);
        assert_eq!(glossary.gloss("미니멀 룩북"), Some("minimal, minimalist, lookbook".into()));
    }
}
