//! tokmap - value-field selection for design token dictionaries
//!
//! A library for rewriting nested token dictionaries so that each property
//! exposes a single canonical `value` field, chosen from mode-specific
//! alternates (dark mode, high contrast, ...) by a caller-supplied priority
//! order. Properties without a usable field are pruned from the output,
//! groups pruned to empty disappear with them, and intentionally empty
//! groups are preserved.
//!
//! The transform is pure: it builds a new dictionary and never mutates its
//! input. The reserved `original` field on a property is provenance and is
//! carried through by reference rather than copied.

pub mod error;
pub mod transform;
pub mod types;

pub use error::{Result, TokmapError};
pub use transform::{
    copy_policy, has_candidate, is_property, map_dictionary_value, map_tree, select_value,
    CopyPolicy, MAX_DEPTH, ORIGINAL_FIELD, VALUE_FIELD,
};
pub use types::{Dictionary, FieldPriority, Node, NodeMap, Platform, RecognizedFields};
