//! Error types for the CZML library.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Main error type for CZML construction and serialization.
#[derive(Error, Debug)]
pub enum Error {
    /// A numeric list does not have a recognized constant or sampled length
    #[error("{value_type}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        value_type: &'static str,
        expected: String,
        actual: usize,
    },

    /// Input for a field matches neither the canonical form nor a shorthand
    #[error("Field '{field}': expected {expected}, got {found}")]
    TypeCoercion {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Zero or several members of a mutually exclusive group were given
    #[error("{object}: only one of {fields} must be given ({provided} provided)")]
    ExactlyOneOf {
        object: &'static str,
        fields: String,
        provided: usize,
    },

    /// None of a group of alternatives was given
    #[error("{object}: one of {fields} must be given")]
    MissingAlternative { object: &'static str, fields: String },

    /// Reference count does not match the paired coordinate count
    #[error(
        "{object}: number of references must equal number of coordinates{} (expected {expected}, got {actual})",
        ring_suffix(.ring)
    )]
    ReferenceCountMismatch {
        object: &'static str,
        ring: Option<usize>,
        expected: usize,
        actual: usize,
    },

    /// Document preamble is malformed
    #[error("{}", join_violations(.0))]
    Preamble(Vec<PreambleViolation>),

    /// Unknown member supplied to a strict constructor
    #[error("{object}: unknown field '{field}'")]
    SchemaViolation { object: &'static str, field: String },

    /// Required member absent
    #[error("{object}: field '{field}' is required")]
    MissingField {
        object: &'static str,
        field: &'static str,
    },

    /// Reference string is not of the form `id#property`
    #[error("Invalid reference '{0}': must be of the form id#property")]
    InvalidReference(String),

    /// URI is neither a network locator nor a data URI
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// Timestamp or interval text is not ISO 8601
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// Value outside its permitted domain
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 conversion error
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A single structural problem with the first packet of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreambleViolation {
    /// The document has no packets at all.
    Empty,
    /// `version` or `name` is missing.
    MissingVersionOrName,
    /// The id is not `document`.
    WrongId(String),
    /// A member that only object packets may carry is present.
    ForbiddenField(&'static str),
}

impl fmt::Display for PreambleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "A document must contain at least one packet."),
            Self::MissingVersionOrName => write!(
                f,
                "The first packet must be a preamble and include 'version' and 'name' properties."
            ),
            Self::WrongId(_) => write!(f, "The first packet must have an ID of 'document'."),
            Self::ForbiddenField(name) => {
                write!(f, "The first packet must not include the '{name}' property")
            }
        }
    }
}

fn join_violations(violations: &[PreambleViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn ring_suffix(ring: &Option<usize>) -> String {
    ring.map(|i| format!(" in list {i}")).unwrap_or_default()
}

/// Short name of a JSON value's kind, for diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Error {
    /// Create a type coercion error describing the rejected JSON input.
    pub fn type_coercion(field: &'static str, expected: &'static str, found: &Value) -> Self {
        Self::TypeCoercion {
            field,
            expected,
            found: json_kind(found),
        }
    }

    /// Create a shape mismatch error.
    pub fn shape(value_type: &'static str, expected: impl Into<String>, actual: usize) -> Self {
        Self::ShapeMismatch {
            value_type,
            expected: expected.into(),
            actual,
        }
    }

    /// Create an invalid value error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Preamble violations carried by this error, empty for other kinds.
    pub fn preamble_violations(&self) -> &[PreambleViolation] {
        match self {
            Self::Preamble(v) => v,
            _ => &[],
        }
    }
}

/// Result type alias for CZML operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::shape("Cartesian3Value", "3 or N * 4", 5);
        assert!(e.to_string().contains("3 or N * 4"));
        assert!(e.to_string().contains('5'));

        let e = Error::ExactlyOneOf {
            object: "Color",
            fields: "rgba, rgbaf or reference".into(),
            provided: 2,
        };
        assert_eq!(
            e.to_string(),
            "Color: only one of rgba, rgbaf or reference must be given (2 provided)"
        );
    }

    #[test]
    fn test_reference_count_display() {
        let e = Error::ReferenceCountMismatch {
            object: "PositionListOfLists",
            ring: Some(1),
            expected: 2,
            actual: 3,
        };
        assert!(e.to_string().contains("in list 1"));

        let e = Error::ReferenceCountMismatch {
            object: "PositionList",
            ring: None,
            expected: 2,
            actual: 1,
        };
        assert!(!e.to_string().contains("in list"));
    }

    #[test]
    fn test_preamble_display() {
        let e = Error::Preamble(vec![
            PreambleViolation::ForbiddenField("polyline"),
            PreambleViolation::ForbiddenField("wall"),
        ]);
        assert_eq!(
            e.to_string(),
            "The first packet must not include the 'polyline' property; \
             The first packet must not include the 'wall' property"
        );
        assert_eq!(e.preamble_violations().len(), 2);
    }

    #[test]
    fn test_type_coercion_kind() {
        let e = Error::type_coercion("show", "boolean", &Value::from(3));
        assert!(matches!(e, Error::TypeCoercion { found: "number", .. }));
    }

    #[test]
    fn test_error_from_json() {
        let err: Error = serde_json::from_str::<Value>("[1,").unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
    }
}
