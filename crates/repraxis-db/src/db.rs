use std::collections::HashMap;

use repraxis_core::{Cardinality, NodeValue};

use crate::error::DbError;
use crate::node::{NodeEntry, NodeId};

/// The trie itself: a single-owner arena of [`NodeEntry`] values rooted at
/// a distinguished `"root"` symbol node.
///
/// `Database` is not `Sync` by construction of its arena (a plain
/// `HashMap`, not behind any lock) — callers are expected to serialize
/// their own access per the single-threaded cooperative model this crate
/// targets.
pub struct Database {
    arena: HashMap<u64, NodeEntry>,
    next_id: u64,
    root: NodeId,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    pub fn new() -> Self {
        let mut arena = HashMap::new();
        arena.insert(0, NodeEntry::root());
        Database { arena, next_id: 1, root: NodeId(0) }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn entry(&self, id: NodeId) -> &NodeEntry {
        self.arena.get(&id.0).expect("NodeId always refers to a live arena entry")
    }

    fn entry_mut(&mut self, id: NodeId) -> &mut NodeEntry {
        self.arena.get_mut(&id.0).expect("NodeId always refers to a live arena entry")
    }

    /// The value stored at `id`.
    pub fn value(&self, id: NodeId) -> &NodeValue {
        &self.entry(id).value
    }

    /// The cardinality constraint on `id`'s own children.
    pub fn cardinality(&self, id: NodeId) -> Cardinality {
        self.entry(id).cardinality
    }

    /// Looks up a child of `id` by canonical symbol.
    pub fn child(&self, id: NodeId, symbol: &str) -> Option<NodeId> {
        self.entry(id).children.get(symbol).copied()
    }

    /// Iterates `(symbol, child)` pairs of `id`, in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (&str, NodeId)> {
        self.entry(id).children.iter().map(|(symbol, child)| (symbol.as_str(), *child))
    }

    fn create_node(&mut self, value: NodeValue, cardinality: Cardinality, parent: NodeId) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.arena.insert(id.0, NodeEntry { value, cardinality, children: Default::default(), parent: Some(parent) });
        id
    }

    /// Removes `id` and every descendant from the arena. Does not unlink
    /// `id` from its parent's child map — the caller does that.
    fn drop_subtree(&mut self, id: NodeId) {
        let children: Vec<NodeId> = self.entry(id).children.values().copied().collect();
        for child in children {
            self.drop_subtree(child);
        }
        self.arena.remove(&id.0);
    }

    /// Parses `sentence` and walks/extends the trie, reusing an existing
    /// child whose cardinality matches and creating new nodes otherwise.
    pub fn insert(&mut self, sentence: &str) -> Result<(), DbError> {
        let tokens = repraxis_lexer::parse(sentence)?;
        let mut current = self.root;
        for token in tokens {
            if matches!(token.value, NodeValue::Variable(_)) {
                return Err(DbError::VariableInInsert { sentence: sentence.to_string() });
            }
            let symbol = token.value.canonical_symbol();
            match self.child(current, &symbol) {
                Some(existing) => {
                    if self.cardinality(existing) != token.cardinality {
                        return Err(DbError::CardinalityMismatch { sentence: sentence.to_string(), symbol });
                    }
                    current = existing;
                }
                None => {
                    if self.cardinality(current) == Cardinality::One && !self.entry(current).children.is_empty() {
                        let stale: Vec<NodeId> = self.entry(current).children.values().copied().collect();
                        for child in stale {
                            self.drop_subtree(child);
                        }
                        self.entry_mut(current).children.clear();
                    }
                    let new_id = self.create_node(token.value, token.cardinality, current);
                    self.entry_mut(current).children.insert(symbol, new_id);
                    current = new_id;
                }
            }
        }
        Ok(())
    }

    /// Returns whether `sentence` names a path that is present in the trie.
    ///
    /// The terminal token's cardinality is never checked against the
    /// matching child — only the cardinality of every intermediate step is.
    pub fn assert_statement(&self, sentence: &str) -> Result<bool, DbError> {
        let tokens = repraxis_lexer::parse(sentence)?;
        let last = tokens.len() - 1;
        let mut current = self.root;
        for (i, token) in tokens.into_iter().enumerate() {
            if matches!(token.value, NodeValue::Variable(_)) {
                return Err(DbError::VariableInAssert { sentence: sentence.to_string() });
            }
            let symbol = token.value.canonical_symbol();
            let Some(child) = self.child(current, &symbol) else {
                return Ok(false);
            };
            if i != last && self.cardinality(child) != token.cardinality {
                return Ok(false);
            }
            current = child;
        }
        Ok(true)
    }

    /// Alias of [`Database::assert_statement`].
    pub fn contains(&self, sentence: &str) -> Result<bool, DbError> {
        self.assert_statement(sentence)
    }

    /// Removes the path named by `sentence`, if present. Returns whether a
    /// removal actually occurred. A sentence that fails to lex, or whose
    /// intermediate path is missing, returns `false` rather than erroring.
    pub fn delete(&mut self, sentence: &str) -> bool {
        let Ok(tokens) = repraxis_lexer::parse(sentence) else {
            return false;
        };
        let last = tokens.len() - 1;
        let mut current = self.root;
        for token in &tokens[..last] {
            let symbol = token.value.canonical_symbol();
            match self.child(current, &symbol) {
                Some(child) => current = child,
                None => return false,
            }
        }
        let final_symbol = tokens[last].value.canonical_symbol();
        match self.entry_mut(current).children.shift_remove(&final_symbol) {
            Some(removed) => {
                self.drop_subtree(removed);
                true
            }
            None => false,
        }
    }

    /// Removes every child of the root, recursively.
    pub fn clear(&mut self) {
        let root = self.root;
        let children: Vec<NodeId> = self.entry(root).children.values().copied().collect();
        for child in children {
            self.drop_subtree(child);
        }
        self.entry_mut(root).children.clear();
    }
}

#[cfg(test)]
mod db_tests;
