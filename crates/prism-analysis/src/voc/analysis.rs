//! VOC analysis: theme assignment, phrase counts, and per-theme summaries.

use serde::{Deserialize, Serialize};

use prism_core::config::AnalysisConfig;
use prism_core::types::VocRecord;

use crate::counts::{percentage, CountEntry, Counter};
use crate::text::phrases::{extract_english_phrases, extract_phrases};

use super::sentences::split_sentences;
use super::themes::{Theme, ThemeMatcher};

/// A representative sentence for a theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSample {
    pub category: String,
    pub user_type: String,
    pub sentence: String,
}

/// Summary of one theme across all feedback entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSummary {
    pub theme: String,
    /// Entries assigned to the theme.
    pub entry_count: u64,
    /// Share of all entries, in percent.
    pub share_pct: f64,
    /// Individual sentences matching the theme.
    pub sentence_count: u64,
    /// Most frequent English phrases among the theme's entries.
    pub top_phrases: Vec<CountEntry>,
    /// First-seen matching sentences, up to the configured cap.
    pub samples: Vec<ThemeSample>,
}

/// Result of the VOC analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocAnalysis {
    pub entry_count: u64,
    pub theme_summaries: Vec<ThemeSummary>,
    pub korean_phrases: Vec<CountEntry>,
    pub english_phrases: Vec<CountEntry>,
}

/// Run the VOC analysis over all feedback entries.
pub fn analyze(entries: &[VocRecord], config: &AnalysisConfig) -> VocAnalysis {
    let matcher = ThemeMatcher::shared();
    let sample_cap = config.effective_representative_sentences();
    let phrase_cap = config.effective_top_voc_phrases();

    let mut korean_phrases = Counter::new();
    let mut english_phrases = Counter::new();

    let themes: Vec<Theme> = Theme::all()
        .iter()
        .copied()
        .chain(std::iter::once(Theme::Other))
        .collect();

    let mut entry_counts = vec![0u64; themes.len()];
    let mut sentence_counts = vec![0u64; themes.len()];
    let mut samples: Vec<Vec<ThemeSample>> = vec![Vec::new(); themes.len()];
    let mut phrase_counters: Vec<Counter> = themes.iter().map(|_| Counter::new()).collect();

    for entry in entries {
        korean_phrases.extend(extract_phrases(&entry.korean));
        english_phrases.extend(extract_english_phrases(&entry.english));

        // Entry-level themes.
        let entry_themes = matcher.assign(&entry.korean, &entry.english);
        for theme in &entry_themes {
            let i = slot(&themes, *theme);
            entry_counts[i] += 1;
            phrase_counters[i].extend(extract_english_phrases(&entry.english));
        }

        // Sentence-level: each sentence is matched on its own, so one entry
        // can contribute sentences to several themes.
        for text in [&entry.korean, &entry.english] {
            for sentence in split_sentences(text) {
                for theme in matcher.assign(&sentence, "") {
                    if theme == Theme::Other {
                        continue;
                    }
                    let i = slot(&themes, theme);
                    sentence_counts[i] += 1;
                    if samples[i].len() < sample_cap {
                        samples[i].push(ThemeSample {
                            category: entry.category.clone(),
                            user_type: entry.user_type.clone(),
                            sentence: sentence.clone(),
                        });
                    }
                }
            }
        }
    }

    let total = entries.len() as u64;
    let theme_summaries = themes
        .iter()
        .enumerate()
        .filter(|(i, _)| entry_counts[*i] > 0)
        .map(|(i, theme)| ThemeSummary {
            theme: theme.name().to_string(),
            entry_count: entry_counts[i],
            share_pct: percentage(entry_counts[i], total),
            sentence_count: sentence_counts[i],
            top_phrases: phrase_counters[i].top(5),
            samples: std::mem::take(&mut samples[i]),
        })
        .collect();

    VocAnalysis {
        entry_count: total,
        theme_summaries,
        korean_phrases: korean_phrases.top(phrase_cap),
        english_phrases: english_phrases.top(phrase_cap),
    }
}

fn slot(themes: &[Theme], theme: Theme) -> usize {
    themes
        .iter()
        .position(|t| *t == theme)
        .unwrap_or(themes.len() - 1) // Other is always last
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, korean: &str, english: &str) -> VocRecord {
        VocRecord {
            category: category.to_string(),
            user_type: "client".to_string(),
            korean: korean.to_string(),
            english: english.to_string(),
        }
    }

    #[test]
    fn themes_are_summarized_with_shares() {
        let entries = vec![
            entry("praise", "가격이 투명해요", "The pricing is transparent."),
            entry("praise", "검색이 편리해요", "Search is convenient."),
            entry("noise", "전혀 다른 이야기", "something unrelated entirely"),
        ];

        let analysis = analyze(&entries, &AnalysisConfig::default());
        assert_eq!(analysis.entry_count, 3);

        let pricing = analysis
            .theme_summaries
            .iter()
            .find(|s| s.theme == "Pricing & Transparency")
            .unwrap();
        assert_eq!(pricing.entry_count, 1);
        assert!((pricing.share_pct - 100.0 / 3.0).abs() < 1e-9);

        let other = analysis
            .theme_summaries
            .iter()
            .find(|s| s.theme == "Other")
            .unwrap();
        assert_eq!(other.entry_count, 1);
    }

    #[test]
    fn sentence_samples_collected() {
        let entries = vec![entry(
            "praise",
            "",
            "Booking was easy. The models were great.",
        )];

        let analysis = analyze(&entries, &AnalysisConfig::default());
        let booking = analysis
            .theme_summaries
            .iter()
            .find(|s| s.theme == "Booking Process")
            .unwrap();
        assert!(booking.sentence_count >= 1);
        assert!(booking
            .samples
            .iter()
            .any(|s| s.sentence == "Booking was easy"));
    }

    #[test]
    fn empty_entries_give_empty_analysis() {
        let analysis = analyze(&[], &AnalysisConfig::default());
        assert_eq!(analysis.entry_count, 0);
        assert!(analysis.theme_summaries.is_empty());
    }
}
