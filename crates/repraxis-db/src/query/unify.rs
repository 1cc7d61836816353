use std::collections::HashMap;

use repraxis_core::NodeValue;

use crate::db::Database;
use crate::limits::Limits;
use crate::node::NodeId;
use crate::trace::Tracer;

use super::driver::QueryError;
use super::state::QueryState;

type Bindings = HashMap<String, NodeValue>;

/// Enumerates every binding map that makes `sentence` a legal path in `db`.
///
/// Maintains a working set of `(subtree, bindings)` contexts, starting at
/// the root with no bindings, and replaces it token by token: a variable
/// token fans out over every child of the current subtree, binding its
/// name to whichever child is visited; a concrete token only survives into
/// children whose symbol matches it exactly.
pub fn unify(
    db: &Database,
    tracer: &dyn Tracer,
    limits: &Limits,
    sentence: &str,
) -> Result<Vec<Bindings>, QueryError> {
    let tokens = repraxis_lexer::parse(sentence)?;
    let mut contexts: Vec<(NodeId, Bindings)> = vec![(db.root(), HashMap::new())];

    for (index, token) in tokens.iter().enumerate() {
        let mut next = Vec::new();
        for (subtree, bindings) in &contexts {
            for (symbol, child) in db.children(*subtree) {
                match &token.value {
                    NodeValue::Variable(name) => {
                        let mut extended = bindings.clone();
                        extended.insert(name.clone(), db.value(child).clone());
                        next.push((child, extended));
                    }
                    concrete if symbol == concrete.canonical_symbol() => {
                        next.push((child, bindings.clone()));
                    }
                    _ => {}
                }
            }
        }
        if next.len() > limits.max_contexts {
            return Err(QueryError::LimitExceeded { limit: "max_contexts" });
        }
        tracer.context_expanded(index, next.len());
        contexts = next;
    }

    Ok(contexts.into_iter().map(|(_, bindings)| bindings).filter(|b| !b.is_empty()).collect())
}

/// Folds `unify` over a list of sentences, joining on shared variables and
/// cross-producting on disjoint ones, starting from `state.bindings`.
///
/// For each pair `(old, new)` of a running binding and a fresh one, the
/// pair survives iff every variable shared between them agrees
/// (`equal_to`); surviving pairs merge by extending `old` with whatever
/// `new` contributes beyond the shared keys.
pub fn unify_all(
    db: &Database,
    tracer: &dyn Tracer,
    limits: &Limits,
    state: &QueryState,
    sentences: &[&str],
) -> Result<Vec<Bindings>, QueryError> {
    let mut running: Vec<Bindings> = state.bindings.clone();
    for sentence in sentences {
        let fresh = unify(db, tracer, limits, sentence)?;
        running = if running.is_empty() {
            fresh
        } else {
            let mut accumulated = Vec::new();
            for old in &running {
                for new in &fresh {
                    if compatible(old, new) {
                        let mut merged = old.clone();
                        for (name, value) in new {
                            merged.entry(name.clone()).or_insert_with(|| value.clone());
                        }
                        accumulated.push(merged);
                    }
                }
            }
            accumulated
        };
    }
    Ok(running.into_iter().filter(|b| !b.is_empty()).collect())
}

fn compatible(old: &Bindings, new: &Bindings) -> bool {
    new.iter().all(|(name, value)| match old.get(name) {
        Some(existing) => repraxis_core::equal_to(existing, value),
        None => true,
    })
}

#[cfg(test)]
mod unify_tests;
