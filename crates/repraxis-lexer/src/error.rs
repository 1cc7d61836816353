/// Failures raised while splitting a sentence string into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A token would be the empty string: the sentence was empty, began or
    /// ended with a delimiter, or contained two adjacent delimiters.
    #[error("sentence contains an empty token")]
    EmptyToken,
}
