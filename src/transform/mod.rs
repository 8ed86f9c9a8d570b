//! The value-selection transform.
//!
//! Rewrites a token dictionary so that every property exposes one canonical
//! `value` field, chosen from mode-specific alternates by a caller-supplied
//! priority order. Properties that carry none of the candidate fields are
//! pruned from both dictionary views, which lets a format export only the
//! diff between its general case and an edge case (e.g. a high-contrast
//! colors file that redefines just the tokens that change).

mod classify;
mod select;
mod tree;

pub use classify::{has_candidate, is_property};
pub use select::{copy_policy, select_value, CopyPolicy, ORIGINAL_FIELD, VALUE_FIELD};
pub use tree::{map_tree, MAX_DEPTH};

use std::sync::Arc;

use crate::error::{Result, TokmapError};
use crate::types::{Dictionary, FieldPriority, Node, NodeMap, Platform};

/// Rewrite a dictionary so that every property exposes a single `value`
/// field, chosen by the `value_field` priority order.
///
/// Both views are transformed consistently: survivors of the flat
/// `all_properties` list keep their relative order, and groups in the
/// `properties` tree that prune to empty disappear, while groups that were
/// already empty in the input are preserved. Top-level `metadata` passes
/// through untouched.
///
/// An empty `value_field` disables the transform: the result is a clone that
/// shares every node with the input, so per-node identity is preserved.
///
/// # Errors
///
/// Returns [`TokmapError::MissingRecognizedFields`] when a non-empty
/// selector meets a platform with an empty value-field vocabulary, and
/// [`TokmapError::DepthExceeded`] on pathologically deep trees.
pub fn map_dictionary_value(
    dictionary: &Dictionary,
    value_field: &FieldPriority,
    platform: &Platform,
) -> Result<Dictionary> {
    if value_field.is_empty() {
        return Ok(dictionary.clone());
    }

    let recognized = &platform.value_transform_fields;
    if recognized.is_empty() {
        return Err(TokmapError::MissingRecognizedFields);
    }

    let all_properties: Vec<Arc<Node>> = dictionary
        .all_properties
        .iter()
        .filter(|property| has_candidate(property, value_field))
        .filter_map(|property| select_value(property, value_field, recognized))
        .collect();

    let mapper = |property: &Arc<Node>, key: &str, _parent: &NodeMap| -> Option<Arc<Node>> {
        // `original` is provenance: pass it through untouched even when it
        // looks like a property.
        if key == ORIGINAL_FIELD {
            return Some(Arc::clone(property));
        }
        if !has_candidate(property, value_field) {
            return None;
        }
        select_value(property, value_field, recognized)
    };

    let properties = map_tree(&dictionary.properties, recognized, &mapper)?;

    Ok(Dictionary {
        all_properties,
        properties,
        metadata: dictionary.metadata.clone(),
    })
}
