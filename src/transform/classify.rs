//! Property vs group classification.

use crate::types::{FieldPriority, Node, RecognizedFields};

/// Check whether a node directly carries one of the platform's recognized
/// value fields, making it a property rather than a group.
///
/// This drives the structural walk in
/// [`map_tree`](crate::transform::map_tree). Deciding which properties a
/// selection pass can actually use is a different question answered by
/// [`has_candidate`] with the pass's priority list. The two checks have the
/// same shape but take different field collections; keeping them as separate
/// functions prevents the roles from being swapped.
pub fn is_property(node: &Node, recognized: &RecognizedFields) -> bool {
    match node.as_object() {
        Some(children) => children.keys().any(|key| recognized.contains(key)),
        None => false,
    }
}

/// Check whether a property carries a field the current selection pass can
/// read.
pub fn has_candidate(node: &Node, priority: &FieldPriority) -> bool {
    match node.as_object() {
        Some(children) => children.keys().any(|key| priority.contains(key)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recognized() -> RecognizedFields {
        RecognizedFields::new(["value", "value_darkMode", "value_hiContrast"])
    }

    #[test]
    fn test_property_with_base_value() {
        let node = Node::from(json!({"name": "textColor", "value": "#222"}));
        assert!(is_property(&node, &recognized()));
    }

    #[test]
    fn test_property_with_alternate_only() {
        let node = Node::from(json!({"value_darkMode": "#ddd"}));
        assert!(is_property(&node, &recognized()));
    }

    #[test]
    fn test_group_is_not_property() {
        let node = Node::from(json!({"text": {"value": "#222"}}));
        assert!(!is_property(&node, &recognized()));
    }

    #[test]
    fn test_bare_payload_is_neither() {
        let node = Node::from(json!("#fff"));
        assert!(!is_property(&node, &recognized()));
        assert!(!has_candidate(&node, &FieldPriority::from("value")));
    }

    #[test]
    fn test_candidate_check_uses_priority_not_vocabulary() {
        let node = Node::from(json!({"name": "textColor", "value": "#222"}));

        // A property in the platform's eyes, but useless to a pass that
        // only reads the dark mode field.
        assert!(is_property(&node, &recognized()));
        assert!(!has_candidate(&node, &FieldPriority::from("value_darkMode")));
    }
}
