use std::collections::HashMap;

use repraxis_core::Value;
use serde::Serialize;

/// The public outcome of running a [`super::DBQuery`].
///
/// `success = false` always carries an empty `bindings` list — the two are
/// never reported inconsistently, so callers can branch on either field.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub success: bool,
    pub bindings: Vec<HashMap<String, Value>>,
}

impl QueryResult {
    /// Restricts each binding row to the listed variable names. Filtering is
    /// not deduplicated: if restricting collapses two distinct rows into an
    /// identical one, both are kept.
    pub fn limit_to_vars(&self, names: &[&str]) -> QueryResult {
        if !self.success {
            return QueryResult { success: false, bindings: Vec::new() };
        }
        if names.is_empty() {
            return QueryResult { success: true, bindings: Vec::new() };
        }
        let bindings = self
            .bindings
            .iter()
            .map(|row| {
                names
                    .iter()
                    .filter_map(|name| row.get(*name).map(|value| (name.to_string(), value.clone())))
                    .collect()
            })
            .collect();
        QueryResult { success: true, bindings }
    }
}
