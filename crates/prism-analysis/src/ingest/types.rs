//! The loaded dataset handed to the analyzers.

use prism_core::types::{BookingRecord, Job, ModelProfileRecord, StyleTagRecord, VocRecord};

/// Everything the analyzers consume, loaded and shaped.
///
/// `voc`, `style_tags`, and `profiles` may be empty when the optional
/// exports are absent; the corresponding analysis stages are then skipped.
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    pub bookings: Vec<BookingRecord>,
    pub jobs: Vec<Job>,
    pub voc: Vec<VocRecord>,
    pub style_tags: Vec<StyleTagRecord>,
    pub profiles: Vec<ModelProfileRecord>,
}

impl Dataset {
    pub fn has_voc(&self) -> bool {
        !self.voc.is_empty()
    }

    pub fn has_model_data(&self) -> bool {
        !self.style_tags.is_empty() || !self.profiles.is_empty()
    }
}
