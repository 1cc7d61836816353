/// Per-edge constraint on how many children a node may have.
///
/// `Cardinality` is a property of the *outgoing* edges of a node, not of the
/// node itself: `None` means the node must stay a leaf, `One` means at most
/// one child may ever be attached, `Many` means the child set is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Leaf-only: no children permitted.
    None,
    /// At most one child; inserting a differently-symboled child clears the
    /// existing child set first.
    One,
    /// Unbounded children.
    Many,
}

impl Cardinality {
    /// Cardinality implied by the delimiter that precedes a token: `.` is
    /// `Many`, `!` is `One`.
    pub fn from_delimiter(delimiter: char) -> Option<Self> {
        match delimiter {
            '.' => Some(Self::Many),
            '!' => Some(Self::One),
            _ => None,
        }
    }
}
