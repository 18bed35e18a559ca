//! Text analysis: cleaning, script detection, tokenization, phrase
//! extraction, and the vocabulary analysis over job names and inquiries.

pub mod clean;
pub mod concept;
pub mod phrases;
pub mod script;
pub mod tokenize;
pub mod vocabulary;

pub use clean::clean_text;
pub use phrases::{extract_english_phrases, extract_phrases};
pub use script::{detect_script, Script};
pub use tokenize::{extract_keywords, tokenize};
pub use vocabulary::{analyze as analyze_vocabulary, VocabularyAnalysis};
