//! Model-level keywords from style tags and profile attributes.

use prism_core::types::collections::{FxHashMap, FxHashSet};
use prism_core::types::{ModelProfileRecord, StyleTagRecord};

use super::tags::clean_tag_name;

/// Indexed tag and profile lookups for keyword extraction.
pub struct ModelIndex {
    tags_by_talent: FxHashMap<i64, Vec<String>>,
    profiles_by_id: FxHashMap<i64, ModelProfileRecord>,
}

impl ModelIndex {
    pub fn build(style_tags: &[StyleTagRecord], profiles: &[ModelProfileRecord]) -> Self {
        let mut tags_by_talent: FxHashMap<i64, Vec<String>> = FxHashMap::default();
        for tag in style_tags {
            tags_by_talent
                .entry(tag.talent_id)
                .or_default()
                .push(tag.tag_name.clone());
        }

        let profiles_by_id = profiles.iter().map(|p| (p.id, p.clone())).collect();

        Self {
            tags_by_talent,
            profiles_by_id,
        }
    }

    /// Keywords for one model: cleaned style tags plus profile attributes.
    /// Sorted for deterministic output.
    pub fn model_keywords(&self, talent_id: i64) -> Vec<String> {
        let mut seen: FxHashSet<String> = FxHashSet::default();

        if let Some(tags) = self.tags_by_talent.get(&talent_id) {
            for tag in tags {
                let cleaned = clean_tag_name(tag).to_lowercase();
                if !cleaned.is_empty() {
                    seen.insert(cleaned);
                }
            }
        }

        if let Some(profile) = self.profiles_by_id.get(&talent_id) {
            if !profile.hair.is_empty() {
                seen.insert(format!("{} hair", profile.hair.replace('_', " ")));
            }
            if !profile.eyes.is_empty() {
                seen.insert(format!("{} eyes", profile.eyes));
            }
            if !profile.gender.is_empty() {
                seen.insert(profile.gender.clone());
            }
            if let Some(category) = height_category(profile) {
                seen.insert(category.to_string());
            }
        }

        let mut keywords: Vec<String> = seen.into_iter().collect();
        keywords.sort();
        keywords
    }
}

/// Height buckets differ by gender: editorial height norms do.
fn height_category(profile: &ModelProfileRecord) -> Option<&'static str> {
    let height = profile.height?;
    match profile.gender.as_str() {
        "female" if height >= 175.0 => Some("tall"),
        "female" if height <= 165.0 => Some("petite"),
        "male" if height >= 185.0 => Some("tall"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(talent_id: i64, name: &str) -> StyleTagRecord {
        StyleTagRecord {
            talent_id,
            tag_name: name.to_string(),
        }
    }

    #[test]
    fn combines_tags_and_profile() {
        let tags = vec![
            tag(1, "(New) Active Wear 액티브웨어"),
            tag(1, "Street Casual"),
        ];
        let profiles = vec![ModelProfileRecord {
            id: 1,
            gender: "female".to_string(),
            hair: "dark_brown".to_string(),
            eyes: "brown".to_string(),
            height: Some(177.0),
        }];

        let index = ModelIndex::build(&tags, &profiles);
        let keywords = index.model_keywords(1);
        assert_eq!(
            keywords,
            vec![
                "active wear",
                "brown eyes",
                "dark brown hair",
                "female",
                "street casual",
                "tall"
            ]
        );
    }

    #[test]
    fn height_buckets_by_gender() {
        let short_female = ModelProfileRecord {
            id: 2,
            gender: "female".into(),
            height: Some(160.0),
            ..Default::default()
        };
        assert_eq!(height_category(&short_female), Some("petite"));

        let male = ModelProfileRecord {
            id: 3,
            gender: "male".into(),
            height: Some(180.0),
            ..Default::default()
        };
        assert_eq!(height_category(&male), None);
    }

    #[test]
    fn unknown_talent_has_no_keywords() {
        let index = ModelIndex::build(&[], &[]);
        assert!(index.model_keywords(42).is_empty());
    }
}
