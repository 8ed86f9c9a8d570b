//! Recursive tree mapping with pruning.

use std::sync::Arc;

use crate::error::{Result, TokmapError};
use crate::types::{Node, NodeMap, RecognizedFields};

use super::classify::is_property;

/// Maximum nesting depth accepted by [`map_tree`].
///
/// Token trees are shallow in practice; the guard turns pathological input
/// into an error instead of a stack overflow.
pub const MAX_DEPTH: usize = 128;

/// Rebuild a group map, transforming every property through `mapper`.
///
/// Each child is classified against `recognized`: properties go through
/// `mapper` (which receives the node, its key, and the parent map, and drops
/// the key by returning `None`), non-property objects recurse as groups, and
/// bare payloads are dropped. A subtree pruned to empty is dropped with it;
/// a subtree that was already empty in the input is kept as-is, so
/// intentionally empty groups round-trip.
pub fn map_tree<F>(group: &NodeMap, recognized: &RecognizedFields, mapper: &F) -> Result<NodeMap>
where
    F: Fn(&Arc<Node>, &str, &NodeMap) -> Option<Arc<Node>>,
{
    map_tree_at(group, recognized, mapper, 0)
}

fn map_tree_at<F>(
    group: &NodeMap,
    recognized: &RecognizedFields,
    mapper: &F,
    depth: usize,
) -> Result<NodeMap>
where
    F: Fn(&Arc<Node>, &str, &NodeMap) -> Option<Arc<Node>>,
{
    if depth >= MAX_DEPTH {
        return Err(TokmapError::DepthExceeded { max: MAX_DEPTH });
    }

    let mut rebuilt = NodeMap::new();
    for (key, child) in group {
        if is_property(child, recognized) {
            if let Some(mapped) = mapper(child, key, group) {
                rebuilt.insert(key.clone(), mapped);
            }
        } else if let Some(children) = child.as_object() {
            let subtree = map_tree_at(children, recognized, mapper, depth + 1)?;
            if !subtree.is_empty() || children.is_empty() {
                rebuilt.insert(key.clone(), Arc::new(Node::Object(subtree)));
            }
        }
        // Bare payloads outside any property are not token data.
    }

    Ok(rebuilt)
}
