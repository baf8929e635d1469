mod analyzer;
mod handler;
mod types;

pub use analyzer::{Analyzer, PlaceholderAnalyzer};
pub use handler::{AnalysisHandler, HandlerResponse, parse_payload};
pub use types::{AnalysisRequest, AnalysisResponse, ErrorResponse};

/// The single endpoint served by both the HTTP server and the Lambda adapter.
pub const ANALYZE_PATH: &str = "/analyze";
pub const ANALYZE_METHOD: &str = "POST";
