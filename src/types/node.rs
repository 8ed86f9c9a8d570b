//! Token tree nodes.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Children of an object node, keyed by field or group name.
pub type NodeMap = BTreeMap<String, Arc<Node>>;

/// A node in a token tree.
///
/// An `Object` may act as a property (a leaf carrying value fields) or as a
/// group of further nodes. Which one it is gets decided at walk time against
/// a field-name collection, never stored on the node itself; see
/// [`is_property`](crate::transform::is_property).
///
/// Children are `Arc`-shared so the transform can distinguish carrying a
/// field by reference from deep-copying it.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An object with named children: a property or a group.
    Object(NodeMap),
    /// A bare payload: string, number, boolean, null, or array.
    Value(Value),
}

impl Node {
    /// Borrow the children if this node is an object.
    pub fn as_object(&self) -> Option<&NodeMap> {
        match self {
            Node::Object(children) => Some(children),
            Node::Value(_) => None,
        }
    }

    /// Structurally copy this node, allocating fresh `Arc`s at every level.
    ///
    /// The result never shares storage with the source, so mutating one side
    /// (e.g. after an `Arc::make_mut`) is never observable in the other.
    pub fn deep_copy(&self) -> Arc<Node> {
        match self {
            Node::Object(children) => Arc::new(Node::Object(
                children
                    .iter()
                    .map(|(key, child)| (key.clone(), child.deep_copy()))
                    .collect(),
            )),
            Node::Value(value) => Arc::new(Node::Value(value.clone())),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Object(
                map.into_iter()
                    .map(|(key, child)| (key, Arc::new(Node::from(child))))
                    .collect(),
            ),
            other => Node::Value(other),
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Object(children) => Value::Object(
                children
                    .iter()
                    .map(|(key, child)| (key.clone(), Value::from(child.as_ref())))
                    .collect(),
            ),
            Node::Value(value) => value.clone(),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Value::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}
