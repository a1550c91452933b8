//! Classification of raw feed responses.

use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;

/// Error code a REST endpoint returns for an unregistered route.
const NO_ROUTE_CODE: &str = "rest_no_route";

/// Records decoded from a successful feed response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPayload {
    records: Vec<Value>,
}

impl RawPayload {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Value> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Classifies an HTTP status and body.
///
/// | input | result |
/// |---|---|
/// | 404 | `EmptyBody` |
/// | other non-2xx | `HttpStatus(code)` |
/// | blank body or `null` | `EmptyBody` |
/// | `{"code": "rest_no_route", ..}` | `EmptyBody` |
/// | invalid JSON or any other non-array | `Malformed` |
/// | JSON array | `Ok` (possibly empty) |
pub fn classify(status: u16, body: &[u8]) -> Result<RawPayload, FetchError> {
    if status == 404 {
        return Err(FetchError::EmptyBody);
    }
    if !(200..300).contains(&status) {
        return Err(FetchError::HttpStatus(status));
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::EmptyBody);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| FetchError::malformed(e.to_string()))?;

    match value {
        Value::Array(records) => {
            debug!(records = records.len(), "Feed payload decoded");
            Ok(RawPayload::new(records))
        }
        Value::Null => Err(FetchError::EmptyBody),
        Value::Object(ref obj)
            if obj.get("code").and_then(Value::as_str) == Some(NO_ROUTE_CODE) =>
        {
            Err(FetchError::EmptyBody)
        }
        other => Err(FetchError::malformed(format!(
            "expected an array, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
