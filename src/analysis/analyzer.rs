use super::types::AnalysisResponse;
use crate::Result;

/// Produces the three derived strings for a piece of text.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<AnalysisResponse>;
}

/// Wraps the input in fixed templates. No analysis is performed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalyzer;

impl Analyzer for PlaceholderAnalyzer {
    fn analyze(&self, text: &str) -> Result<AnalysisResponse> {
        // TODO: call the Anthropic messages API once the prompt format is settled
        Ok(AnalysisResponse {
            interpretation: format!("Backend received: {}", text),
            preview: format!("Preview would show: {}", text),
            suggestion: format!("Suggestion based on: {}", text),
        })
    }
}
