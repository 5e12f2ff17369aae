//! Field rules and coercions shared by every schema record.
//!
//! Each function checks one field and reports a [`FieldError`] naming it.
//! Records call these per field and collect the failures.

use serde_json::{Map, Value};

use crate::core::error::{ErrorKind, FieldError, ValidationError, ROOT};

/// Reject negative measurements. Zero is allowed.
pub fn require_non_negative(field: &str, value: f64) -> Result<f64, FieldError> {
    if !value.is_finite() {
        return Err(FieldError::new(field, ErrorKind::NotAFloat));
    }
    if value < 0.0 {
        return Err(FieldError::new(field, ErrorKind::Negative));
    }
    Ok(value)
}

/// Require the input to be a JSON object
pub fn require_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::single(ROOT, ErrorKind::NotAnObject))
}

/// Fetch a required key; JSON `null` counts as missing
///
/// An explicit `null` is reported as `Missing`, not as a separate
/// "none is not an allowed value" kind.
pub fn require_field<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value, FieldError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(FieldError::new(field, ErrorKind::Missing)),
        Some(value) => Ok(value),
    }
}

/// Coerce a JSON number or numeric string into a finite float
pub fn coerce_float(field: &str, value: &Value) -> Result<f64, FieldError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(FieldError::new(field, ErrorKind::NotAFloat)),
    }
}

/// Coerce a JSON integer, integral float or integer string into an `i64`
pub fn coerce_int(field: &str, value: &Value) -> Result<i64, FieldError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| FieldError::new(field, ErrorKind::NotAnInteger))
}

/// Require a JSON string
pub fn coerce_str(field: &str, value: &Value) -> Result<String, FieldError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| FieldError::new(field, ErrorKind::NotAString))
}

/// Optional key: absent or `null` maps to `None`, otherwise `coerce` decides
pub fn optional<T>(
    obj: &Map<String, Value>,
    field: &str,
    coerce: impl Fn(&str, &Value) -> Result<T, FieldError>,
) -> Result<Option<T>, FieldError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce(field, value).map(Some),
    }
}

/// Required float measurement: present, numeric, non-negative
pub fn measurement(obj: &Map<String, Value>, field: &str) -> Result<f64, FieldError> {
    let raw = require_field(obj, field)?;
    let value = coerce_float(field, raw)?;
    require_non_negative(field, value)
}
