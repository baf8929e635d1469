use axum::http::StatusCode;
use std::any::Any;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub const MISSING_TEXT_MESSAGE: &str = "Missing 'text' field in request body";
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON in request body";
pub const NOT_FOUND_MESSAGE: &str = "Not Found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No route for {method} {path}")]
    Routing { method: String, path: String },

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("UTF-8 decode error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Header value error: {0}")]
    HeaderValue(#[from] axum::http::header::ToStrError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn routing(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Routing {
            method: method.into(),
            path: path.into(),
        }
    }

    pub fn analysis(msg: impl Into<String>) -> Self {
        Self::Analysis(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Wraps a caught panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self::Internal(format!("panic: {}", detail))
    }

    /// HTTP status reported to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Routing { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to expose to the caller.
    ///
    /// Validation messages only name the offending condition, so they are
    /// passed through. Everything else collapses to a generic message; the
    /// detail stays in the server log.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Routing { .. } => NOT_FOUND_MESSAGE.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}
