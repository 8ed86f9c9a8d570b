//! Core domain types for tokmap.
//!
//! This module contains the fundamental types used throughout the transform:
//! - `Node` - the token tree union of objects and bare payloads
//! - `Dictionary` - the two views over one set of token properties
//! - `RecognizedFields` / `FieldPriority` - the two field-name collections
//! - `Platform` - execution context supplying the value-field vocabulary

mod dictionary;
mod fields;
mod node;

pub use dictionary::{Dictionary, Platform};
pub use fields::{FieldPriority, RecognizedFields};
pub use node::{Node, NodeMap};
