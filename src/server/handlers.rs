use crate::{
    Error,
    analysis::{ANALYZE_PATH, AnalysisHandler, HandlerResponse, parse_payload},
    error::INVALID_JSON_MESSAGE,
};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use std::{any::Any, sync::Arc};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<AnalysisHandler>,
}

impl AppState {
    pub fn new(handler: AnalysisHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

pub async fn analyze(State(state): State<AppState>, body: Bytes) -> HandlerResponse {
    info!("Received request at {}", ANALYZE_PATH);

    if body.iter().all(u8::is_ascii_whitespace) {
        return state.handler.respond(None);
    }

    let payload = std::str::from_utf8(&body).ok().and_then(parse_payload);
    match payload {
        Some(payload) => state.handler.respond(Some(&payload)),
        None => {
            error!("Failed to parse JSON from request body");
            HandlerResponse::from_error(&Error::validation(INVALID_JSON_MESSAGE))
        }
    }
}

pub async fn not_found(method: Method, uri: Uri) -> HandlerResponse {
    warn!("Unhandled path/method: {} {}", uri.path(), method);
    let err = Error::routing(method.as_str(), uri.path());
    HandlerResponse::from_error(&err)
}

/// Response for a panic that escaped a handler.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let err = Error::from_panic(payload);
    error!(error = ?err, "Request handler panicked: {}", err);
    HandlerResponse::from_error(&err).into_response()
}
