//! Value selection and the per-key copy policy.

use std::sync::Arc;

use crate::types::{FieldPriority, Node, NodeMap, RecognizedFields};

/// Canonical value field exposed on every transformed property.
pub const VALUE_FIELD: &str = "value";

/// Reserved provenance field: carried by reference, never selected.
pub const ORIGINAL_FIELD: &str = "original";

/// How a property field is carried into the transformed leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPolicy {
    /// Structural copy with fresh allocations.
    Deep,
    /// Shared `Arc`, preserving node identity.
    ByReference,
}

/// Copy policy for a property field.
///
/// Only `original` is carried by reference: it is provenance, not token
/// data, and downstream consumers compare it by identity.
pub fn copy_policy(key: &str) -> CopyPolicy {
    if key == ORIGINAL_FIELD {
        CopyPolicy::ByReference
    } else {
        CopyPolicy::Deep
    }
}

/// Rewrite a property so that it exposes a single `value` field.
///
/// The first name in `priority` present among the property's keys wins, and
/// its node becomes `value`, shared with the input. Every field named in
/// `recognized` is stripped, chosen or not; each remaining field is carried
/// per [`copy_policy`].
///
/// Returns `None` when the node is not an object or carries no candidate
/// field; callers filter with
/// [`has_candidate`](crate::transform::has_candidate) first.
pub fn select_value(
    property: &Arc<Node>,
    priority: &FieldPriority,
    recognized: &RecognizedFields,
) -> Option<Arc<Node>> {
    let fields = property.as_object()?;
    let winner = priority.iter().find(|name| fields.contains_key(*name))?;

    let mut mapped = NodeMap::new();
    mapped.insert(VALUE_FIELD.to_string(), Arc::clone(&fields[winner]));

    for (key, field) in fields {
        if recognized.contains(key) {
            continue;
        }
        let carried = match copy_policy(key) {
            CopyPolicy::Deep => field.deep_copy(),
            CopyPolicy::ByReference => Arc::clone(field),
        };
        mapped.insert(key.clone(), carried);
    }

    Some(Arc::new(Node::Object(mapped)))
}
