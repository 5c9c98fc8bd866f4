//! The `{ "data": ... }` wrapper used by every request and response body.

use super::error::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Response body wrapper.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Extracts the draft from a request body.
///
/// Anything that is not an object holding an object `data` (an empty body, a JSON array, a
/// missing or `null` or scalar `data`) yields `D::default()`, so the actor reports NotFound or
/// the first missing field. Only a body that does not parse as JSON is rejected here.
pub fn submitted<D>(body: &[u8]) -> Result<D, ApiError>
where
    D: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(D::default());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::Validation(format!("Malformed JSON body: {e}")))?;

    match value {
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(data @ Value::Object(_)) => serde_json::from_value(data)
                .map_err(|e| ApiError::Validation(format!("Malformed request data: {e}"))),
            _ => Ok(D::default()),
        },
        _ => Ok(D::default()),
    }
}
