use super::{
    ANALYZE_PATH,
    analyzer::{Analyzer, PlaceholderAnalyzer},
    types::{AnalysisRequest, AnalysisResponse, ErrorResponse},
};
use crate::{Error, Result};
use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};
use tracing::{error, info};

const LOGGED_TEXT_CHARS: usize = 100;

/// Framework-neutral result of handling one request.
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl HandlerResponse {
    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<Self> {
        Ok(Self {
            status,
            headers: json_headers(),
            body: serde_json::to_value(body)?,
        })
    }

    pub fn from_error(err: &Error) -> Self {
        Self {
            status: err.status_code(),
            headers: json_headers(),
            body: serde_json::json!(ErrorResponse::new(err.public_message())),
        }
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, Json(self.body)).into_response()
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Parses a raw body as JSON, yielding `None` instead of an error.
///
/// A literal `null` counts as no value.
pub fn parse_payload(raw: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Null) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

#[derive(Clone)]
pub struct AnalysisHandler {
    analyzer: Arc<dyn Analyzer>,
}

impl Default for AnalysisHandler {
    fn default() -> Self {
        Self::new(Arc::new(PlaceholderAnalyzer))
    }
}

impl AnalysisHandler {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }

    /// Handles one request. Never fails: every error becomes a JSON error
    /// response with the matching status.
    pub fn handle(&self, payload: Option<&Value>) -> HandlerResponse {
        info!("Received request at {}", ANALYZE_PATH);
        self.respond(payload)
    }

    /// [`AnalysisHandler::handle`] for callers that already logged receipt.
    pub fn respond(&self, payload: Option<&Value>) -> HandlerResponse {
        let result = self
            .analyze(payload)
            .and_then(|analysis| HandlerResponse::json(StatusCode::OK, &analysis));

        match result {
            Ok(response) => response,
            Err(e @ Error::Validation(_)) => {
                error!("Invalid request body: {}", e);
                HandlerResponse::from_error(&e)
            }
            Err(e) => {
                error!(error = ?e, "Error processing request: {}", e);
                HandlerResponse::from_error(&e)
            }
        }
    }

    pub fn analyze(&self, payload: Option<&Value>) -> Result<AnalysisResponse> {
        let request = AnalysisRequest::from_payload(payload)?;
        info!(
            "Text received for analysis: {}...",
            request.excerpt(LOGGED_TEXT_CHARS)
        );

        let analysis = panic::catch_unwind(AssertUnwindSafe(|| {
            self.analyzer.analyze(&request.text)
        }))
        .map_err(Error::from_panic)??;

        info!("Returning analysis");
        Ok(analysis)
    }
}
