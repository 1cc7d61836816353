/// Errors shared by the comparison layer (`equal_to`/`<`/`<=`/`>`/`>=`).
///
/// These are structural failures: a comparator was asked to order two
/// node types that have no defined relation. They propagate up through the
/// query engine as a hard failure of the whole query, not a logical `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Attempted `<`/`<=`/`>`/`>=` between a pair of node types with no
    /// defined ordering (e.g. a symbol against an integer, or either side
    /// still a variable).
    #[error("no ordering defined between {left} and {right}")]
    UndefinedOrdering { left: &'static str, right: &'static str },
}
