//! Schema validator for request payloads
//!
//! Validation semantics:
//! - Document must be a JSON object
//! - Required fields are present and non-null
//! - Optional fields may be absent or null
//! - Field types match exactly, no coercion
//! - Undeclared fields are ignored
//!
//! All violations are collected before failing, in schema field order.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::types::Schema;

/// Validator bound to one schema. Does not mutate its input.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a JSON body against the schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` listing every violated field.
    pub fn validate_document(&self, document: &Value) -> SchemaResult<()> {
        let obj = document.as_object().ok_or_else(|| {
            SchemaError::validation_failed(
                self.schema.name,
                vec![ValidationDetails::type_mismatch("$root", "object", json_type_name(document))],
            )
        })?;

        let mut violations = Vec::new();
        for field in &self.schema.fields {
            match obj.get(field.name) {
                None if field.required => {
                    violations.push(ValidationDetails::missing_field(field.name));
                }
                None => {}
                Some(Value::Null) if field.required => {
                    violations.push(ValidationDetails::null_value(field.name));
                }
                Some(Value::Null) => {}
                Some(value) if !field.field_type.accepts(value) => {
                    violations.push(ValidationDetails::type_mismatch(
                        field.name,
                        field.field_type.type_name(),
                        json_type_name(value),
                    ));
                }
                Some(_) => {}
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::validation_failed(self.schema.name, violations))
        }
    }

    /// Validates raw query-string parameters, returning the declared ones as
    /// typed JSON values. Undeclared parameters are dropped.
    pub fn validate_params(&self, params: &HashMap<String, String>) -> SchemaResult<Map<String, Value>> {
        let mut typed = Map::new();
        let mut violations = Vec::new();

        for field in &self.schema.fields {
            match params.get(field.name) {
                Some(raw) => match field.field_type.parse_param(raw) {
                    Some(value) => {
                        typed.insert(field.name.to_string(), value);
                    }
                    None => violations.push(ValidationDetails::type_mismatch(
                        field.name,
                        field.field_type.type_name(),
                        format!("'{}'", raw),
                    )),
                },
                None if field.required => {
                    violations.push(ValidationDetails::missing_field(field.name));
                }
                None => {}
            }
        }

        if violations.is_empty() {
            Ok(typed)
        } else {
            Err(SchemaError::validation_failed(self.schema.name, violations))
        }
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() {
                "integer"
            } else if n.is_u64() {
                "integer out of range"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
