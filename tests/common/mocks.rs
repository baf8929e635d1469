use interpret_backend::{
    Error, Result,
    analysis::{AnalysisResponse, Analyzer},
};
use std::sync::{Arc, Mutex};

/// Mock analyzer that records every text it is asked about
#[derive(Debug, Clone, Default)]
pub struct MockAnalyzer {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
    pub panic: Option<String>,
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_panic(mut self, message: impl Into<String>) -> Self {
        self.panic = Some(message.into());
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Analyzer for MockAnalyzer {
    fn analyze(&self, text: &str) -> Result<AnalysisResponse> {
        self.calls.lock().unwrap().push(text.to_string());

        if let Some(message) = &self.panic {
            panic!("{}", message);
        }

        if let Some(error) = &self.error {
            return Err(Error::analysis(error.clone()));
        }

        Ok(AnalysisResponse {
            interpretation: format!("mock interpretation of {}", text),
            preview: format!("mock preview of {}", text),
            suggestion: format!("mock suggestion for {}", text),
        })
    }
}
