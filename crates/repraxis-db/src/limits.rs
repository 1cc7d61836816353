/// Execution-limit guard consulted by the query engine.
///
/// `max_contexts` bounds the width of the unification working set after
/// expanding a single token; `max_clauses` bounds how many clauses a single
/// [`crate::query::DBQuery`] may fold. Both exist purely so an embedding
/// host can clamp a hostile or buggy query before it runs away — the
/// defaults are generous enough that no scenario in the test suite comes
/// close to tripping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_contexts: usize,
    pub max_clauses: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits { max_contexts: 10_000, max_clauses: 256 }
    }
}
