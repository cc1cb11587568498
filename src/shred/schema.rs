//! Typed view over a JSON Schema fragment
//!
//! The insert schemas arrive as untyped `serde_json::Value` trees. This
//! module classifies each property once into a discriminated union so the
//! translator and expander can match exhaustively instead of re-probing
//! type tags at every call site.

use serde_json::{Map, Value};
use std::collections::HashSet;

/// Classification of a single schema property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind<'a> {
    String {
        format: Option<&'a str>,
        max_length: Option<u64>,
    },
    Integer,
    Number,
    Boolean,
    Array {
        items: Option<&'a Value>,
    },
    Object {
        properties: Option<&'a Map<String, Value>>,
        required: HashSet<&'a str>,
    },
    /// Missing or unrecognized `type` tag; the property contributes nothing
    Skip,
}

impl<'a> PropertyKind<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value.get("type").and_then(Value::as_str) {
            Some("string") => PropertyKind::String {
                format: value.get("format").and_then(Value::as_str),
                max_length: value.get("maxLength").and_then(Value::as_u64),
            },
            Some("integer") => PropertyKind::Integer,
            Some("number") => PropertyKind::Number,
            Some("boolean") => PropertyKind::Boolean,
            Some("array") => PropertyKind::Array {
                items: value.get("items"),
            },
            Some("object") => PropertyKind::Object {
                properties: properties(value),
                required: required_properties(value),
            },
            _ => PropertyKind::Skip,
        }
    }
}

/// The `properties` map of an object schema, if declared.
pub fn properties(schema: &Value) -> Option<&Map<String, Value>> {
    schema.get("properties").and_then(Value::as_object)
}

/// The `required` array of an object schema as a set of property names.
/// Missing or malformed `required` yields the empty set.
pub fn required_properties(schema: &Value) -> HashSet<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}
