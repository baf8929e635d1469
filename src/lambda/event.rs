use crate::{Result, analysis::HandlerResponse};
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{error, warn};

const EMPTY_OBJECT: &str = "{}";

/// API Gateway proxy event, reduced to the fields the adapter reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEvent")]
pub struct InvocationEvent {
    pub path: Option<String>,
    pub http_method: Option<String>,
    pub body: EventBody,
}

/// Request body as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventBody {
    Text(String),
    Bytes(Vec<u8>),
    Missing,
}

impl EventBody {
    /// Text to parse as JSON. A missing body is an empty object.
    pub fn into_text(self) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
            Self::Missing => Ok(EMPTY_OBJECT.to_string()),
        }
    }

    /// Like [`EventBody::into_text`], but an undecodable body is logged and
    /// replaced by an empty object.
    pub fn into_text_lossy(self) -> String {
        self.into_text().unwrap_or_else(|e| {
            error!("Failed to decode/convert body: {}", e);
            EMPTY_OBJECT.to_string()
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvent {
    #[serde(default, deserialize_with = "lenient_string")]
    path: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    http_method: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    is_base64_encoded: bool,
    #[serde(default)]
    body: Option<Value>,
}

impl From<RawEvent> for InvocationEvent {
    fn from(raw: RawEvent) -> Self {
        Self {
            path: raw.path,
            http_method: raw.http_method,
            body: resolve_body(raw.body, raw.is_base64_encoded),
        }
    }
}

fn resolve_body(body: Option<Value>, base64: bool) -> EventBody {
    match body {
        None | Some(Value::Null) => EventBody::Missing,
        Some(Value::String(encoded)) if base64 => match decode_base64(&encoded) {
            Ok(bytes) => EventBody::Bytes(bytes),
            Err(e) => {
                // same outcome as an undecodable byte body
                error!("Failed to decode base64 body: {}", e);
                EventBody::Missing
            }
        },
        Some(Value::String(text)) => EventBody::Text(text),
        Some(other) => {
            warn!("Event body is not a string, attempting conversion");
            match byte_array(&other) {
                Some(bytes) => EventBody::Bytes(bytes),
                None => EventBody::Text(other.to_string()),
            }
        }
    }
}

fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    Ok(general_purpose::STANDARD.decode(encoded)?)
}

fn byte_array(value: &Value) -> Option<Vec<u8>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
        .collect()
}

/// Non-string values read as absent, so they fail the route check instead of
/// failing deserialization.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_owned)))
}

/// Anything but a JSON boolean reads as `false`.
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
}

/// Response shape expected by API Gateway proxy integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl InvocationResult {
    /// Header-less error result with an `{"error": ...}` body.
    pub fn error(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }

    pub fn from_handler_response(response: HandlerResponse) -> Result<Self> {
        let mut headers = BTreeMap::new();
        for (name, value) in &response.headers {
            headers.insert(name.as_str().to_string(), value.to_str()?.to_string());
        }

        Ok(Self {
            status_code: response.status.as_u16(),
            headers,
            body: serde_json::to_string(&response.body)?,
        })
    }
}
