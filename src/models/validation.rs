//! Field-level validation of request bodies.
//!
//! Bodies are read as raw JSON so that a missing or mistyped field produces a
//! per-field message instead of a single deserialization failure.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use utoipa::ToSchema;
use validator::ValidationErrors;

pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_NULL: &str = "This field may not be null.";
pub const MSG_BLANK: &str = "This field may not be blank.";
pub const MSG_INVALID_STRING: &str = "Not a valid string.";
pub const MSG_INVALID_NUMBER: &str = "A valid number is required.";

/// Whether absent fields are an error (create, full update) or keep their
/// previous value (partial update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Full,
    Partial,
}

/// Field name to error messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

/// Reads a request body as JSON. An empty body counts as an empty object.
pub fn parse_json_body(body: &[u8]) -> Result<Value, FieldErrors> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| {
        let mut errors = FieldErrors::default();
        errors.add(NON_FIELD_ERRORS, format!("JSON parse error - {e}"));
        errors
    })
}

/// Borrows the body as an object, recording a non-field error otherwise.
pub fn expect_object<'a>(value: &'a Value, errors: &mut FieldErrors) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        other => {
            errors.add(
                NON_FIELD_ERRORS,
                format!(
                    "Invalid data. Expected a dictionary, but got {}.",
                    json_kind(other)
                ),
            );
            None
        }
    }
}

/// Extracts a string field. Numbers are accepted and stringified; surrounding
/// whitespace is trimmed and an empty result is rejected.
pub fn string_field(
    data: &Map<String, Value>,
    field: &str,
    mode: ValidationMode,
    errors: &mut FieldErrors,
) -> Option<String> {
    let raw = match data.get(field) {
        None => {
            if mode == ValidationMode::Full {
                errors.add(field, MSG_REQUIRED);
            }
            return None;
        }
        Some(Value::Null) => {
            errors.add(field, MSG_NULL);
            return None;
        }
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => {
            errors.add(field, MSG_INVALID_STRING);
            return None;
        }
    };
    if raw.is_empty() {
        errors.add(field, MSG_BLANK);
        return None;
    }
    Some(raw)
}

/// Extracts a finite float field given either as a JSON number or a numeric string.
pub fn number_field(
    data: &Map<String, Value>,
    field: &str,
    mode: ValidationMode,
    errors: &mut FieldErrors,
) -> Option<f64> {
    let parsed = match data.get(field) {
        None => {
            if mode == ValidationMode::Full {
                errors.add(field, MSG_REQUIRED);
            }
            return None;
        }
        Some(Value::Null) => {
            errors.add(field, MSG_NULL);
            return None;
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Some(v),
        _ => {
            errors.add(field, MSG_INVALID_NUMBER);
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
