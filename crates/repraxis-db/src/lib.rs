//! The Repraxis trie and exclusion-logic query engine.
//!
//! - [`Database`] owns the cardinality-constrained trie and exposes
//!   `insert`/`assert_statement`/`delete`/`clear`/`contains`.
//! - [`query`] builds on it: [`query::DBQuery`] folds clause strings over a
//!   [`query::QueryState`], producing a [`query::QueryResult`].
//! - [`Tracer`] is the engine's instrumentation hook; [`Limits`] bounds
//!   unification fan-out and clause count.

mod db;
mod error;
mod limits;
mod node;
pub mod query;
mod trace;

pub use db::Database;
pub use error::DbError;
pub use limits::Limits;
pub use node::NodeId;
pub use trace::{NoopTracer, PrintTracer, Tracer};
