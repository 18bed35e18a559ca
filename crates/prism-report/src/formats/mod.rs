//! Reporters — single-document output formats for an analysis bundle.

pub mod json;

use prism_analysis::pipeline::AnalysisBundle;
use prism_core::errors::ReportError;

use crate::html::pages;
use crate::markdown;

/// Trait for single-document report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    /// The file name the document is written under.
    fn file_name(&self) -> &'static str;
    fn generate(&self, bundle: &AnalysisBundle) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, title: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "html" => Some(Box::new(HtmlReporter {
            title: title.to_string(),
        })),
        "markdown" | "md" => Some(Box::new(MarkdownReporter {
            title: title.to_string(),
        })),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["html", "markdown", "json"]
}

/// Consolidated report as a self-contained HTML page.
pub struct HtmlReporter {
    pub title: String,
}

impl Reporter for HtmlReporter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn file_name(&self) -> &'static str {
        "consolidated.html"
    }

    fn generate(&self, bundle: &AnalysisBundle) -> Result<String, ReportError> {
        Ok(pages::consolidated_page(bundle, &self.title))
    }
}

/// Consolidated report as Markdown.
pub struct MarkdownReporter {
    pub title: String,
}

impl Reporter for MarkdownReporter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn file_name(&self) -> &'static str {
        "consolidated.md"
    }

    fn generate(&self, bundle: &AnalysisBundle) -> Result<String, ReportError> {
        Ok(markdown::consolidated_markdown(bundle, &self.title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_knows_every_listed_format() {
        for format in available_formats() {
            assert!(create_reporter(format, "t").is_some(), "missing {format}");
        }
        assert!(create_reporter("pdf", "t").is_none());
    }

    #[test]
    fn md_alias_resolves() {
        let reporter = create_reporter("md", "t").unwrap();
        assert_eq!(reporter.name(), "markdown");
    }
}
