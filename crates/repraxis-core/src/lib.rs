//! Core data structures for Repraxis: node values, cardinality, and
//! the comparison semantics that the query engine builds on.
//!
//! This crate contains:
//! - `Cardinality` - the per-edge child-count constraint (NONE/ONE/MANY)
//! - `NodeValue` / `NodeType` - the typed payload carried by a trie node or token
//! - `Value` - the caller-facing, node-free form of a bound variable
//! - `CoreError` - ordering/comparison failures shared by the query layer

mod cardinality;
mod compare;
mod error;
mod value;

pub use cardinality::Cardinality;
pub use compare::{
    equal_to, greater_than, greater_than_or_equal, less_than, less_than_or_equal, not_equal_to,
    try_compare,
};
pub use error::CoreError;
pub use value::{canonical_float, NodeType, NodeValue, Value};
