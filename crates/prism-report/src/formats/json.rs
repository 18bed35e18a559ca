//! JSON reporter — the full bundle, pretty-printed.

use prism_analysis::pipeline::AnalysisBundle;
use prism_core::errors::ReportError;

use super::Reporter;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn file_name(&self) -> &'static str {
        "bundle.json"
    }

    fn generate(&self, bundle: &AnalysisBundle) -> Result<String, ReportError> {
        serde_json::to_string_pretty(bundle).map_err(|e| ReportError::Render {
            format: "json".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_serializes_to_json() {
        let bundle = AnalysisBundle::default();
        let json = JsonReporter.generate(&bundle).unwrap();
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"vocabulary\""));
    }
}
