//! Compliance analysis: one formatted request per user action.

use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::pipeline::prompts;
use crate::traits::GenerativeModel;

/// Composes the fixed instruction template, the resolved reference text,
/// and the submitted copy into a single generative-model request.
pub struct ComplianceAnalyzer<M: GenerativeModel> {
    model: M,
}

impl<M: GenerativeModel> ComplianceAnalyzer<M> {
    /// Create an analyzer over the given model.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Produce a markdown compliance report for `copy` against `reference`.
    ///
    /// Empty copy or reference is rejected before any network call. The raw
    /// model response is returned verbatim; no retries, no streaming.
    pub async fn analyze(&self, copy: &str, reference: &str) -> AnalysisResult<String> {
        if copy.trim().is_empty() {
            return Err(AnalysisError::EmptyInput { which: "copy" });
        }
        if reference.trim().is_empty() {
            return Err(AnalysisError::EmptyInput { which: "reference" });
        }

        debug!(
            model = self.model.name(),
            copy_chars = copy.len(),
            reference_chars = reference.len(),
            "compliance analysis starting"
        );

        let prompt = prompts::format_analysis_prompt(reference, copy);
        self.model
            .generate(prompts::SYSTEM_INSTRUCTION, &prompt)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;

    #[tokio::test]
    async fn test_analyze_sends_reference_and_copy() {
        let model = MockModel::new().with_response("## Risk rating: low");
        let analyzer = ComplianceAnalyzer::new(model);

        let report = analyzer
            .analyze("Buy our tonic!", "No health claims allowed")
            .await
            .unwrap();
        assert_eq!(report, "## Risk rating: low");

        let calls = analyzer.model.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.contains("Buy our tonic!"));
        assert!(calls[0].prompt.contains("No health claims allowed"));
        assert!(calls[0].system.contains("compliance"));
    }

    #[tokio::test]
    async fn test_empty_copy_rejected_before_model_call() {
        let model = MockModel::new();
        let analyzer = ComplianceAnalyzer::new(model);

        let result = analyzer.analyze("   ", "reference text").await;
        assert!(matches!(
            result,
            Err(AnalysisError::EmptyInput { which: "copy" })
        ));
        assert!(analyzer.model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_reference_rejected() {
        let model = MockModel::new();
        let analyzer = ComplianceAnalyzer::new(model);

        let result = analyzer.analyze("some copy", "").await;
        assert!(matches!(
            result,
            Err(AnalysisError::EmptyInput { which: "reference" })
        ));
    }

    #[tokio::test]
    async fn test_service_error_propagates() {
        let model = MockModel::new().failing("quota exceeded");
        let analyzer = ComplianceAnalyzer::new(model);

        let result = analyzer.analyze("copy", "reference").await;
        assert!(matches!(result, Err(AnalysisError::Service(_))));
    }
}
