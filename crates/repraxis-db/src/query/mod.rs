//! The query engine: binding maps, unification, expressions, and the
//! clause-folding driver that ties them together.

mod driver;
mod expr;
mod result;
mod state;
mod unify;

pub use driver::{DBQuery, QueryError};
pub use expr::{CompareOp, Expression};
pub use result::QueryResult;
pub use state::QueryState;
pub use unify::{unify, unify_all};
