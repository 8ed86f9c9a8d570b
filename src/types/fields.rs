//! Field-name collections used to classify nodes and select values.
//!
//! Two collections drive the transform and must never be swapped: the
//! platform-wide [`RecognizedFields`] vocabulary decides which nodes are
//! properties at all, while a per-pass [`FieldPriority`] decides which of a
//! property's fields becomes its `value`. They are distinct types so the
//! roles stay apart at every call site.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The full vocabulary of field names that can hold a value variant on the
/// current platform (e.g. `value`, `value_darkMode`, `value_hiContrast`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognizedFields(HashSet<String>);

impl RecognizedFields {
    /// Create the vocabulary from any collection of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Check whether a field name is part of the vocabulary.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of recognized names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the recognized names (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for RecognizedFields {
    fn from_iter<I: IntoIterator<Item = S>>(names: I) -> Self {
        Self::new(names)
    }
}

/// An ordered list of candidate field names expressing priority for one
/// selection pass: the first name a property actually carries wins.
///
/// An empty priority disables the transform. The `From` conversions accept
/// either a single name or a list of names, normalizing both to one flat
/// ordered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldPriority(Vec<String>);

impl FieldPriority {
    /// Create a priority from an ordered collection of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Check whether the priority holds no names (transform disabled).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of candidate names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether a field name is one of the candidates.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|candidate| candidate == name)
    }

    /// Iterate over the candidate names in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for FieldPriority {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for FieldPriority {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<Vec<String>> for FieldPriority {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<&[&str]> for FieldPriority {
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_contains() {
        let recognized = RecognizedFields::new(["value", "value_darkMode"]);

        assert!(recognized.contains("value"));
        assert!(recognized.contains("value_darkMode"));
        assert!(!recognized.contains("value_hiContrast"));
        assert_eq!(recognized.len(), 2);
    }

    #[test]
    fn test_recognized_default_is_empty() {
        let recognized = RecognizedFields::default();
        assert!(recognized.is_empty());
    }

    #[test]
    fn test_priority_from_single_name() {
        let priority = FieldPriority::from("value_darkMode");

        assert_eq!(priority.len(), 1);
        assert!(priority.contains("value_darkMode"));
        assert!(!priority.is_empty());
    }

    #[test]
    fn test_priority_keeps_order() {
        let priority = FieldPriority::new(["value_hiContrast", "value"]);

        let names: Vec<&str> = priority.iter().collect();
        assert_eq!(names, vec!["value_hiContrast", "value"]);
    }

    #[test]
    fn test_priority_from_owned_list() {
        let priority = FieldPriority::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(priority.len(), 2);
    }

    #[test]
    fn test_priority_default_disables() {
        assert!(FieldPriority::default().is_empty());
    }
}
