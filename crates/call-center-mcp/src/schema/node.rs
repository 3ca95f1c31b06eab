//! Schema descriptor tree advertised in `tools/list`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive kinds a schema node can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    String,
    Integer,
    Number,
    Boolean,
    Array,
}

impl SchemaType {
    /// Whether a JSON value has this kind. Integers count as numbers, but
    /// fractional numbers do not count as integers.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            SchemaType::Object => value.is_object(),
            SchemaType::String => value.is_string(),
            SchemaType::Integer => value.is_i64() || value.is_u64(),
            SchemaType::Number => value.is_number(),
            SchemaType::Boolean => value.is_boolean(),
            SchemaType::Array => value.is_array(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::Object => "object",
            SchemaType::String => "string",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
        }
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in a tool's input schema.
///
/// `default` is advertised to clients only; it is never substituted into
/// arguments during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, SchemaNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
}

impl SchemaNode {
    pub fn new(kind: SchemaType) -> Self {
        Self {
            kind,
            description: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            allowed: None,
            default: None,
            items: None,
        }
    }

    pub fn object() -> Self {
        Self::new(SchemaType::Object)
    }

    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    pub fn integer() -> Self {
        Self::new(SchemaType::Integer)
    }

    pub fn number() -> Self {
        Self::new(SchemaType::Number)
    }

    pub fn boolean() -> Self {
        Self::new(SchemaType::Boolean)
    }

    pub fn array(items: SchemaNode) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(SchemaType::Array)
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.properties.insert(name.into(), node);
        self
    }

    /// Mark properties as required, in the order they will be checked.
    pub fn require(mut self, names: &[&str]) -> Self {
        self.required.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn one_of(mut self, values: &[&str]) -> Self {
        self.allowed = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_as_json_schema() {
        let schema = SchemaNode::object()
            .property(
                "priority",
                SchemaNode::string()
                    .describe("Ticket priority")
                    .one_of(&["low", "high"]),
            )
            .property("limit", SchemaNode::integer().default_value(json!(10)))
            .require(&["priority"]);

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "limit": { "type": "integer", "default": 10 },
                    "priority": {
                        "type": "string",
                        "description": "Ticket priority",
                        "enum": ["low", "high"]
                    }
                },
                "required": ["priority"]
            })
        );
    }

    #[test]
    fn test_deserializes_from_json_schema() {
        let schema: SchemaNode = serde_json::from_value(json!({
            "type": "object",
            "properties": { "tags": { "type": "array", "items": { "type": "string" } } }
        }))
        .unwrap();

        let tags = &schema.properties["tags"];
        assert_eq!(tags.kind, SchemaType::Array);
        assert_eq!(tags.items.as_deref().map(|i| i.kind), Some(SchemaType::String));
    }

    #[test]
    fn test_integer_does_not_accept_fraction() {
        assert!(SchemaType::Integer.matches(&json!(3)));
        assert!(!SchemaType::Integer.matches(&json!(3.5)));
        assert!(SchemaType::Number.matches(&json!(3)));
    }
}
