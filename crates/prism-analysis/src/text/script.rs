//! Script-based language classification.
//!
//! The corpus is a two-language marketplace (Korean clients, English-facing
//! platform), so language detection reduces to script detection: Hangul
//! versus Latin letter ratios.

use serde::{Deserialize, Serialize};

/// Detected script of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Korean,
    English,
    Other,
    Unknown,
}

impl Script {
    pub fn name(&self) -> &'static str {
        match self {
            Script::Korean => "korean",
            Script::English => "english",
            Script::Other => "other",
            Script::Unknown => "unknown",
        }
    }
}

/// Classify a text by letter-script ratios.
///
/// Empty or letterless text is Unknown. Any meaningful Hangul presence
/// (≥ 20% of letters) classifies as Korean — mixed inquiries usually carry
/// a Latin brand name alongside Korean prose.
pub fn detect_script(text: &str) -> Script {
    let mut hangul = 0usize;
    let mut latin = 0usize;
    let mut other = 0usize;

    for ch in text.chars() {
        if is_hangul(ch) {
            hangul += 1;
        } else if ch.is_ascii_alphabetic() {
            latin += 1;
        } else if ch.is_alphabetic() {
            other += 1;
        }
    }

    let letters = hangul + latin + other;
    if letters == 0 {
        return Script::Unknown;
    }

    let hangul_ratio = hangul as f64 / letters as f64;
    let latin_ratio = latin as f64 / letters as f64;

    if hangul_ratio >= 0.2 {
        Script::Korean
    } else if latin_ratio >= 0.6 {
        Script::English
    } else {
        Script::Other
    }
}

fn is_hangul(ch: char) -> bool {
    matches!(ch,
        '\u{AC00}'..='\u{D7A3}'   // syllables
        | '\u{1100}'..='\u{11FF}' // jamo
        | '\u{3130}'..='\u{318F}' // compatibility jamo
    )
}
