//! Schema type definitions
//!
//! Supported types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer

use serde_json::{json, Map, Value};

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "integer",
        }
    }

    /// Whether a JSON value has exactly this type (no coercion)
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Int => value.is_i64(),
        }
    }

    /// Parse a raw query-string value into a typed JSON value
    pub fn parse_param(&self, raw: &str) -> Option<Value> {
        match self {
            FieldType::String => Some(Value::String(raw.to_string())),
            FieldType::Int => raw.parse::<i64>().ok().map(Value::from),
        }
    }

    fn json_schema(&self) -> Value {
        match self {
            FieldType::String => json!({"type": "string"}),
            FieldType::Int => json!({"type": "integer", "format": "int64"}),
        }
    }
}

/// Field definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub field_type: FieldType,
    /// Whether field must be present and non-null
    pub required: bool,
}

impl FieldDef {
    pub fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
        }
    }

    pub fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
        }
    }
}

/// Named, ordered set of field definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: Vec<FieldDef>,
}

impl Schema {
    /// Create/replace payload: `id` optional, `nome` and `idade` required
    pub fn pessoa() -> Self {
        Self {
            name: "Pessoa",
            fields: vec![
                FieldDef::optional("id", FieldType::Int),
                FieldDef::required("nome", FieldType::String),
                FieldDef::required("idade", FieldType::Int),
            ],
        }
    }

    /// List query: every field optional
    pub fn pessoa_query() -> Self {
        Self {
            name: "QueryPessoa",
            fields: vec![
                FieldDef::optional("id", FieldType::Int),
                FieldDef::optional("nome", FieldType::String),
                FieldDef::optional("idade", FieldType::Int),
            ],
        }
    }

    /// Render as a JSON Schema object for the API document
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            properties.insert(field.name.to_string(), field.field_type.json_schema());
        }
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();

        let mut schema = json!({
            "title": self.name,
            "type": "object",
            "properties": properties,
        });
        if !required.is_empty() {
            schema["required"] = json!(required);
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_rejects_float_and_string() {
        assert!(FieldType::Int.accepts(&json!(30)));
        assert!(FieldType::Int.accepts(&json!(-4)));
        assert!(!FieldType::Int.accepts(&json!(30.5)));
        assert!(!FieldType::Int.accepts(&json!("30")));
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(FieldType::Int.parse_param("42"), Some(json!(42)));
        assert_eq!(FieldType::Int.parse_param("abc"), None);
        assert_eq!(FieldType::String.parse_param("42"), Some(json!("42")));
    }

    #[test]
    fn test_pessoa_json_schema_lists_required_fields() {
        let schema = Schema::pessoa().to_json_schema();
        assert_eq!(schema["required"], json!(["nome", "idade"]));
        assert_eq!(schema["properties"]["idade"]["type"], "integer");
    }

    #[test]
    fn test_query_schema_has_no_required_fields() {
        let schema = Schema::pessoa_query().to_json_schema();
        assert!(schema.get("required").is_none());
    }
}
