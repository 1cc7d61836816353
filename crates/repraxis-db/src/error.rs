/// Structural failures raised by [`crate::Database`] mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DbError {
    /// `insert` encountered a VARIABLE token; only concrete facts may be stored.
    #[error("cannot insert a sentence containing a variable: {sentence}")]
    VariableInInsert { sentence: String },

    /// `assert_statement` (or `contains`) encountered a VARIABLE token.
    #[error("cannot assert a sentence containing a variable: {sentence}")]
    VariableInAssert { sentence: String },

    /// `insert` would attach a child whose cardinality disagrees with an
    /// existing child of the same symbol.
    #[error("cardinality mismatch inserting {sentence:?} at {symbol:?}")]
    CardinalityMismatch { sentence: String, symbol: String },

    /// The sentence failed to lex (empty token).
    #[error(transparent)]
    Lex(#[from] repraxis_lexer::LexError),
}
