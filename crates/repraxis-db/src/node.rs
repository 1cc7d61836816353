use indexmap::IndexMap;
use repraxis_core::{Cardinality, NodeValue};

/// An arena handle for a node. `Copy` and non-owning: dropping every
/// `NodeId` that points at a node does not free it, only [`Database::delete`]
/// and [`Database::clear`] do that by removing the entry from the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u64);

/// A node's data as stored in the arena: its typed value, the cardinality
/// constraint on its own children, the child map keyed by canonical symbol,
/// and a back-reference to its parent (`None` only for the root).
#[derive(Debug, Clone)]
pub(crate) struct NodeEntry {
    pub value: NodeValue,
    pub cardinality: Cardinality,
    pub children: IndexMap<String, NodeId>,
    pub parent: Option<NodeId>,
}

impl NodeEntry {
    pub fn root() -> Self {
        NodeEntry {
            value: NodeValue::Symbol("root".to_string()),
            cardinality: Cardinality::Many,
            children: IndexMap::new(),
            parent: None,
        }
    }
}
