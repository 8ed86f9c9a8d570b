//! Dictionaries and the platform execution context.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, TokmapError};

use super::fields::RecognizedFields;
use super::node::{Node, NodeMap};

/// Execution context for a selection pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Every field name that can hold a value variant on this platform.
    pub value_transform_fields: RecognizedFields,
}

impl Platform {
    /// Create a platform with the given value-field vocabulary.
    pub fn new(value_transform_fields: RecognizedFields) -> Self {
        Self {
            value_transform_fields,
        }
    }
}

/// A token dictionary: two views over the same logical properties.
///
/// `all_properties` is a flat ordered list of property nodes and `properties`
/// is the canonical nested tree. The two views are transformed independently;
/// this crate does not verify that they alias the same leaves, so callers
/// that build them inconsistently get inconsistent output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    /// Flat ordered view of the property leaves.
    pub all_properties: Vec<Arc<Node>>,
    /// Canonical nested tree of groups and properties.
    pub properties: NodeMap,
    /// Any other top-level keys, passed through transforms unchanged.
    pub metadata: NodeMap,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary from its JSON wire shape.
    ///
    /// `allProperties` must be an array and `properties` an object when
    /// present; both default to empty. Every other top-level key lands in
    /// `metadata` untouched.
    pub fn from_value(value: Value) -> Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(TokmapError::MalformedDictionary {
                    message: format!("dictionary must be an object, got {}", json_type(&other)),
                    help: None,
                });
            }
        };

        let mut dictionary = Dictionary::new();
        for (key, value) in map {
            match key.as_str() {
                "allProperties" => match value {
                    Value::Array(items) => {
                        dictionary.all_properties = items
                            .into_iter()
                            .map(|item| Arc::new(Node::from(item)))
                            .collect();
                    }
                    other => {
                        return Err(TokmapError::MalformedDictionary {
                            message: format!(
                                "`allProperties` must be an array, got {}",
                                json_type(&other)
                            ),
                            help: Some("pass the flat property list as a JSON array".to_string()),
                        });
                    }
                },
                "properties" => match Node::from(value) {
                    Node::Object(children) => dictionary.properties = children,
                    Node::Value(other) => {
                        return Err(TokmapError::MalformedDictionary {
                            message: format!(
                                "`properties` must be an object, got {}",
                                json_type(&other)
                            ),
                            help: Some("pass the token tree as a JSON object".to_string()),
                        });
                    }
                },
                _ => {
                    dictionary.metadata.insert(key, Arc::new(Node::from(value)));
                }
            }
        }

        Ok(dictionary)
    }

    /// Parse a dictionary from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| TokmapError::MalformedDictionary {
                message: format!("invalid JSON: {}", e),
                help: None,
            })?;
        Self::from_value(value)
    }

    /// Serialize back to the JSON wire shape.
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert(
            "allProperties".to_string(),
            Value::Array(
                self.all_properties
                    .iter()
                    .map(|property| Value::from(property.as_ref()))
                    .collect(),
            ),
        );
        map.insert(
            "properties".to_string(),
            Value::Object(
                self.properties
                    .iter()
                    .map(|(key, node)| (key.clone(), Value::from(node.as_ref())))
                    .collect(),
            ),
        );
        for (key, node) in &self.metadata {
            map.insert(key.clone(), Value::from(node.as_ref()));
        }
        Value::Object(map)
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Dictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Dictionary::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Human-readable JSON type name for error messages.
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
