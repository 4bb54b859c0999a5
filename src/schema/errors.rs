//! Schema error types
//!
//! A `SchemaError` carries a one-line summary plus every field-level
//! violation found, so a caller can fix a payload in a single round trip.

use std::fmt;

use serde::Serialize;

/// Validation failure details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetails {
    /// Field name, or `$root` for the payload itself
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(field, expected, actual)
    }

    pub fn null_value(field: impl Into<String>) -> Self {
        Self::new(field, "non-null value", "null")
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': expected {}, got {}", self.field, self.expected, self.actual)
    }
}

/// Schema error type with full context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    message: String,
    details: Vec<ValidationDetails>,
}

impl SchemaError {
    /// Document or parameters violate the named schema
    pub fn validation_failed(schema: &str, details: Vec<ValidationDetails>) -> Self {
        let message = match details.as_slice() {
            [single] => format!("{} validation failed: {}", schema, single),
            many => format!("{} validation failed: {} violations", schema, many.len()),
        };
        Self { message, details }
    }

    /// Body could not be parsed as JSON at all
    pub fn malformed_json(reason: impl fmt::Display) -> Self {
        Self {
            message: format!("Malformed JSON body: {}", reason),
            details: vec![ValidationDetails::new("$root", "valid JSON", "unparseable body")],
        }
    }

    /// A path segment did not parse as the declared type
    pub fn invalid_path_param(name: &str, expected: &str, raw: &str) -> Self {
        let details = ValidationDetails::type_mismatch(name, expected, format!("'{}'", raw));
        Self {
            message: format!("Invalid path parameter: {}", details),
            details: vec![details],
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &[ValidationDetails] {
        &self.details
    }

    pub fn into_details(self) -> Vec<ValidationDetails> {
        self.details
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_details_display() {
        let details = ValidationDetails::type_mismatch("idade", "integer", "string");
        let display = format!("{}", details);
        assert!(display.contains("idade"));
        assert!(display.contains("integer"));
        assert!(display.contains("string"));
    }

    #[test]
    fn test_single_violation_is_inlined_in_message() {
        let err = SchemaError::validation_failed("Pessoa", vec![ValidationDetails::missing_field("nome")]);
        assert!(err.message().contains("field 'nome'"));
        assert_eq!(err.details().len(), 1);
    }

    #[test]
    fn test_multiple_violations_are_counted() {
        let err = SchemaError::validation_failed(
            "Pessoa",
            vec![
                ValidationDetails::missing_field("nome"),
                ValidationDetails::missing_field("idade"),
            ],
        );
        assert_eq!(err.to_string(), "Pessoa validation failed: 2 violations");
    }
}
