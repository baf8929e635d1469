use crate::{
    Error, Result,
    error::MISSING_TEXT_MESSAGE,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Extracts the request from a parsed JSON payload.
    ///
    /// An absent payload, a non-object payload, or an object without `text`
    /// is a validation failure. A `text` that is present but not a string is
    /// an internal failure: the key check passed, processing did not.
    pub fn from_payload(payload: Option<&Value>) -> Result<Self> {
        let text = payload
            .and_then(Value::as_object)
            .and_then(|fields| fields.get("text"))
            .ok_or_else(|| Error::validation(MISSING_TEXT_MESSAGE))?;

        match text {
            Value::String(text) => Ok(Self::new(text.as_str())),
            other => Err(Error::internal(format!(
                "'text' field must be a string, got {}",
                json_kind(other)
            ))),
        }
    }

    /// First `max_chars` characters of the text, for logging.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub interpretation: String,
    pub preview: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
