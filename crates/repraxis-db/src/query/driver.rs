use std::collections::HashMap;

use repraxis_core::Value;

use crate::db::Database;
use crate::error::DbError;
use crate::limits::Limits;
use crate::trace::{NoopTracer, Tracer};

use super::expr::Expression;
use super::result::QueryResult;
use super::state::QueryState;

/// Structural failures raised during query evaluation — distinct from a
/// logical `success = false` result, which `run` returns as `Ok`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A comparator operand lexed to more than one token.
    #[error("comparator operand is not a single token: {sentence:?}")]
    MalformedComparand { sentence: String },

    /// A clause matched none of the recognized dispatch shapes.
    #[error("clause does not match any recognized expression shape: {clause:?}")]
    UnrecognizedExpression { clause: String },

    /// `Limits::max_contexts` or `Limits::max_clauses` was exceeded.
    #[error("{limit} exceeded")]
    LimitExceeded { limit: &'static str },

    #[error(transparent)]
    Core(#[from] repraxis_core::CoreError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Lex(#[from] repraxis_lexer::LexError),
}

/// An immutable list of raw clause strings, folded left-to-right over an
/// initial [`QueryState`] by [`DBQuery::run`].
#[derive(Debug, Clone, Default)]
pub struct DBQuery {
    clauses: Vec<String>,
}

impl DBQuery {
    pub fn new() -> Self {
        DBQuery::default()
    }

    pub fn from_clauses(clauses: Vec<String>) -> Self {
        DBQuery { clauses }
    }

    /// Returns a new query with `clause` appended. Named `where_clause`
    /// rather than `where` to avoid the reserved keyword.
    pub fn where_clause(&self, clause: impl Into<String>) -> Self {
        let mut clauses = self.clauses.clone();
        clauses.push(clause.into());
        DBQuery { clauses }
    }

    pub fn run(&self, db: &Database, seed_bindings: HashMap<String, Value>) -> Result<QueryResult, QueryError> {
        self.run_with(db, seed_bindings, &NoopTracer, &Limits::default())
    }

    /// Like [`DBQuery::run`], but with an explicit [`Tracer`] and [`Limits`]
    /// instead of the no-op/default pair.
    pub fn run_with(
        &self,
        db: &Database,
        seed_bindings: HashMap<String, Value>,
        tracer: &dyn Tracer,
        limits: &Limits,
    ) -> Result<QueryResult, QueryError> {
        if self.clauses.len() > limits.max_clauses {
            return Err(QueryError::LimitExceeded { limit: "max_clauses" });
        }

        let mut state = if seed_bindings.is_empty() {
            QueryState::default()
        } else {
            let converted = seed_bindings.into_iter().map(|(name, value)| (name, value.into_node_value())).collect();
            QueryState::ok(vec![converted])
        };

        for (index, clause) in self.clauses.iter().enumerate() {
            if !state.success {
                break;
            }
            tracer.clause_started(index, clause);
            let expression = Expression::parse(clause)?;
            state = expression.evaluate(db, tracer, limits, &state)?;
            tracer.clause_finished(index, state.bindings.len());
        }

        Ok(state.to_result())
    }
}

#[cfg(test)]
mod driver_tests;
