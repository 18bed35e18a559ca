//! Job-level keyword extraction from free text and structured fields.

use prism_core::types::collections::FxHashSet;
use prism_core::types::BookingRecord;

use crate::glossary::Glossary;

/// Extract English keywords for a job from its name, inquiry text, and
/// structured fields. Order-preserving, deduplicated.
pub fn job_keywords(booking: &BookingRecord, glossary: &Glossary) -> Vec<String> {
    let combined = format!("{} {}", booking.job_name, booking.inquiry_text).to_lowercase();

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut keywords = Vec::new();
    let mut push = |keyword: String| {
        if !keyword.is_empty() && seen.insert(keyword.clone()) {
            keywords.push(keyword);
        }
    };

    for keyword in glossary.keywords_in(&combined) {
        push(keyword);
    }

    for shoot_type in &booking.shoot_types {
        match shoot_type.as_str() {
            "photo" => push("photography".to_string()),
            "video" => push("video".to_string()),
            _ => {}
        }
    }

    for location in &booking.shoot_locations {
        if matches!(location.as_str(), "indoor" | "outdoor" | "studio") {
            push(location.clone());
        }
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_glossary_and_structured_keywords() {
        let booking = BookingRecord {
            job_name: "봄 룩북".to_string(),
            inquiry_text: "미니멀 촬영 문의".to_string(),
            shoot_types: vec!["photo".to_string()],
            shoot_locations: vec!["studio".to_string(), "rooftop".to_string()],
            ..Default::default()
        };

        let keywords = job_keywords(&booking, Glossary::shared());
        assert_eq!(
            keywords,
            vec![
                "spring",
                "lookbook",
                "minimal",
                "minimalist",
                "photoshoot",
                "photography",
                "studio"
            ]
        );
    }

    #[test]
    fn no_signal_yields_empty() {
        let booking = BookingRecord::default();
        assert!(job_keywords(&booking, Glossary::shared()).is_empty());
    }
}
