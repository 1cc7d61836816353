use std::collections::HashMap;

use repraxis_core::{NodeValue, Value};

use super::result::QueryResult;

/// Intermediate state threaded through clause evaluation: whether the query
/// is still alive, and the binding rows that survive so far.
///
/// `bindings` being empty is ambiguous on its own — it means either "no
/// variables have been bound yet" (the initial, successful state) or
/// "every binding was eliminated" (also successful, vacuously, for a
/// no-variable clause) — which is why `success` is tracked separately
/// rather than inferred from an empty binding list.
#[derive(Debug, Clone)]
pub struct QueryState {
    pub success: bool,
    pub bindings: Vec<HashMap<String, NodeValue>>,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState { success: true, bindings: Vec::new() }
    }
}

impl QueryState {
    pub fn ok(bindings: Vec<HashMap<String, NodeValue>>) -> Self {
        QueryState { success: true, bindings }
    }

    pub fn failed() -> Self {
        QueryState { success: false, bindings: Vec::new() }
    }

    pub fn to_result(&self) -> QueryResult {
        if !self.success {
            return QueryResult { success: false, bindings: Vec::new() };
        }
        let bindings = self
            .bindings
            .iter()
            .map(|row| row.iter().map(|(name, value)| (name.clone(), to_value(value))).collect())
            .collect();
        QueryResult { success: true, bindings }
    }
}

/// Converts a fully-bound node value into its caller-facing form. A binding
/// produced by unification is always concrete — the trie never stores a
/// `Variable` node — so the `Variable` arm is unreachable in practice; it
/// degrades to a symbol rather than panicking.
fn to_value(value: &NodeValue) -> Value {
    match value {
        NodeValue::Symbol(s) => Value::Symbol(s.clone()),
        NodeValue::Int(i) => Value::Int(*i),
        NodeValue::Float(f) => Value::Float(*f),
        NodeValue::Variable(name) => Value::Symbol(name.clone()),
    }
}
