use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Reason a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    #[serde(rename = "value_error.missing")]
    Missing,
    #[serde(rename = "type_error.float")]
    NotAFloat,
    #[serde(rename = "type_error.integer")]
    NotAnInteger,
    #[serde(rename = "type_error.str")]
    NotAString,
    #[serde(rename = "type_error.dict")]
    NotAnObject,
    #[serde(rename = "value_error.negative")]
    Negative,
}

impl ErrorKind {
    /// Human-readable reason reported to callers
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::Missing => "field required",
            ErrorKind::NotAFloat => "value is not a valid float",
            ErrorKind::NotAnInteger => "value is not a valid integer",
            ErrorKind::NotAString => "str type expected",
            ErrorKind::NotAnObject => "value is not a valid dict",
            ErrorKind::Negative => "must be positive",
        }
    }
}

/// One rejected field, located by a dotted path (`features.sepal_length`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
            message: kind.message().to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation failure for a whole record
///
/// Always carries at least one [`FieldError`]. Every field of a record is
/// checked, so all failures are reported together in field declaration order.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} validation error(s): {}", .errors.len(), join_errors(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn single(field: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            errors: vec![FieldError::new(field, kind)],
        }
    }

    /// Build from collected field errors, `None` when nothing failed
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// True if any error is located at `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn kind_of(&self, field: &str) -> Option<ErrorKind> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.kind)
    }

    /// Re-root every location under `prefix`, for records embedded in another
    pub fn nested(self, prefix: &str) -> Self {
        let errors = self
            .errors
            .into_iter()
            .map(|mut e| {
                e.field = if e.field == ROOT {
                    prefix.to_string()
                } else {
                    format!("{}.{}", prefix, e.field)
                };
                e
            })
            .collect();
        Self { errors }
    }
}

/// Location used when the input as a whole has the wrong shape
pub const ROOT: &str = "__root__";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_field() {
        let err = ValidationError::from_errors(vec![
            FieldError::new("sepal_length", ErrorKind::Negative),
            FieldError::new("petal_width", ErrorKind::Missing),
        ])
        .unwrap();

        let text = err.to_string();
        assert!(text.starts_with("2 validation error(s)"));
        assert!(text.contains("sepal_length: must be positive"));
        assert!(text.contains("petal_width: field required"));
    }

    #[test]
    fn test_empty_errors_is_none() {
        assert!(ValidationError::from_errors(vec![]).is_none());
    }

    #[test]
    fn test_nested_prefixes_locations() {
        let err = ValidationError::single("sepal_width", ErrorKind::NotAFloat).nested("features");
        assert!(err.has_field("features.sepal_width"));

        let root = ValidationError::single(ROOT, ErrorKind::NotAnObject).nested("features");
        assert_eq!(root.kind_of("features"), Some(ErrorKind::NotAnObject));
    }

    #[test]
    fn test_kind_serializes_as_code() {
        let json = serde_json::to_value(FieldError::new("x", ErrorKind::Negative)).unwrap();
        assert_eq!(json["kind"], "value_error.negative");
        assert_eq!(json["message"], "must be positive");
    }
}
