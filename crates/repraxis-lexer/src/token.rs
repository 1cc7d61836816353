use repraxis_core::{Cardinality, NodeValue};

/// One segment of a parsed sentence: its classified value, and the
/// cardinality of the edge that follows it (`Many` for the final token,
/// regardless of whether a trailing delimiter was present).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: NodeValue,
    pub cardinality: Cardinality,
}
