//! Argument validation against a [`SchemaNode`].
//!
//! Checks run in a fixed order so the reported failure is deterministic:
//! the value's own type, its enum membership, then for objects every
//! `required` name in declared order followed by each declared property in
//! key order. Undeclared properties are accepted as-is.

use serde_json::Value;

use super::node::{SchemaNode, SchemaType};

/// The first constraint a value violated.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("missing required field `{path}`")]
    MissingField { path: String },

    #[error("`{path}` must be of type {expected}, got {found}")]
    WrongType {
        path: String,
        expected: SchemaType,
        found: &'static str,
    },

    #[error("`{path}` must be one of [{}], got \"{value}\"", .allowed.join(", "))]
    NotInEnum {
        path: String,
        value: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    pub fn path(&self) -> &str {
        match self {
            ValidationError::MissingField { path }
            | ValidationError::WrongType { path, .. }
            | ValidationError::NotInEnum { path, .. } => path,
        }
    }
}

/// Validate `value` against `schema`. Never modifies the value.
pub fn validate(schema: &SchemaNode, value: &Value) -> Result<(), ValidationError> {
    validate_at(schema, value, "$")
}

fn validate_at(schema: &SchemaNode, value: &Value, path: &str) -> Result<(), ValidationError> {
    if !schema.kind.matches(value) {
        return Err(ValidationError::WrongType {
            path: path.to_string(),
            expected: schema.kind,
            found: json_type_name(value),
        });
    }

    if let (Some(allowed), Some(s)) = (&schema.allowed, value.as_str()) {
        if !allowed.iter().any(|a| a == s) {
            return Err(ValidationError::NotInEnum {
                path: path.to_string(),
                value: s.to_string(),
                allowed: allowed.clone(),
            });
        }
    }

    match value {
        Value::Object(map) => {
            for name in &schema.required {
                if !map.contains_key(name) {
                    return Err(ValidationError::MissingField {
                        path: format!("{path}.{name}"),
                    });
                }
            }
            for (name, node) in &schema.properties {
                if let Some(child) = map.get(name) {
                    validate_at(node, child, &format!("{path}.{name}"))?;
                }
            }
        }
        Value::Array(items) => {
            if let Some(node) = &schema.items {
                for (i, item) in items.iter().enumerate() {
                    validate_at(node, item, &format!("{path}[{i}]"))?;
                }
            }
        }
        _ => {}
    }

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
