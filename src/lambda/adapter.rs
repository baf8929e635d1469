use super::event::{InvocationEvent, InvocationResult};
use crate::{
    Error, Result,
    analysis::{ANALYZE_METHOD, ANALYZE_PATH, AnalysisHandler, parse_payload},
    error::{INVALID_JSON_MESSAGE, NOT_FOUND_MESSAGE},
};
use lambda_runtime::LambdaEvent;
use serde_json::Value;
use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};
use tracing::{error, info, warn};

pub const LAMBDA_INTERNAL_ERROR_MESSAGE: &str = "Internal server error during Lambda execution";

/// Maps API Gateway proxy events onto [`AnalysisHandler`].
#[derive(Clone)]
pub struct InvocationAdapter {
    handler: Arc<AnalysisHandler>,
}

impl InvocationAdapter {
    pub fn new(handler: AnalysisHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Handles one event. Every failure is turned into a result; nothing
    /// propagates to the runtime.
    pub fn invoke(&self, event: Value) -> InvocationResult {
        info!("Lambda event received: {}", event);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.dispatch(event)))
            .unwrap_or_else(|payload| Err(Error::from_panic(payload)));

        match outcome {
            Ok(result) => result,
            Err(e) => {
                error!(error = ?e, "Error invoking handler via Lambda: {}", e);
                InvocationResult::error(500, LAMBDA_INTERNAL_ERROR_MESSAGE)
            }
        }
    }

    fn dispatch(&self, event: Value) -> Result<InvocationResult> {
        let event: InvocationEvent = serde_json::from_value(event)?;

        if !is_analyze_route(&event) {
            warn!(
                "Unhandled path/method: {} {}",
                event.path.as_deref().unwrap_or("<none>"),
                event.http_method.as_deref().unwrap_or("<none>")
            );
            return Ok(InvocationResult::error(404, NOT_FOUND_MESSAGE));
        }

        let body = event.body.into_text_lossy();
        let Some(payload) = parse_payload(&body) else {
            error!("Failed to parse JSON from event body string");
            return Ok(InvocationResult::error(400, INVALID_JSON_MESSAGE));
        };

        let response = self.handler.handle(Some(&payload));
        InvocationResult::from_handler_response(response)
    }
}

fn is_analyze_route(event: &InvocationEvent) -> bool {
    event.path.as_deref() == Some(ANALYZE_PATH)
        && event.http_method.as_deref() == Some(ANALYZE_METHOD)
}

/// `lambda_runtime` entry point. The context only contributes its request id.
#[tracing::instrument(
    level = "info",
    skip(adapter, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler(
    adapter: &InvocationAdapter,
    event: LambdaEvent<Value>,
) -> std::result::Result<InvocationResult, lambda_runtime::Error> {
    Ok(adapter.invoke(event.payload))
}
