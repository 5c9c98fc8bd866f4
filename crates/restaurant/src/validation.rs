//! Field readers shared by the dish and order pipelines.
//!
//! Payload fields arrive as loose JSON values. These helpers decide whether a value counts as
//! present and well-formed; the per-resource pipelines decide which error to report.

use serde_json::Value;

/// A non-empty string, or `None`.
pub fn required_text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.as_str()),
        _ => None,
    }
}

/// An integer strictly greater than zero, or `None`.
///
/// Numbers with a zero fractional part (`5.0`) are integers; strings never are. Integral
/// values above `u64::MAX` (such as `1e20`) are rejected.
pub fn positive_integer(value: Option<&Value>) -> Option<u64> {
    let number = match value {
        Some(Value::Number(number)) => number,
        _ => return None,
    };
    if let Some(n) = number.as_u64() {
        return (n > 0).then_some(n);
    }
    let float = number.as_f64()?;
    let integral = float.fract() == 0.0 && float >= 1.0 && float <= u64::MAX as f64;
    integral.then_some(float as u64)
}

/// Whether a client-supplied identifier counts as "given".
///
/// `null`, `false`, `0` and `""` mean the identifier was left out.
pub fn is_given(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A body identifier that conflicts with the route identifier, rendered for the error message.
pub fn conflicting_id(body: Option<&Value>, route: &str) -> Option<String> {
    let body = body.filter(|v| is_given(v))?;
    match body {
        Value::String(s) if s == route => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
