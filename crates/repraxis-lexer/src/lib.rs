//! Tokenizes Repraxis sentence strings (`astrid.relationships.britt.reputation!30`)
//! into an ordered list of [`Token`]s, and re-emits a sentence with variables
//! substituted by bound values (`bind`).

mod error;
mod scanner;
mod token;

pub use error::LexError;
pub use token::Token;

use repraxis_core::{Cardinality, NodeValue};
use scanner::{Delimiter, scan};

/// Splits `sentence` on `.`/`!` and classifies each segment into a [`Token`].
///
/// A sentence beginning or ending with a delimiter, containing a run of two
/// delimiters, or empty outright, is rejected with [`LexError::EmptyToken`]
/// rather than silently dropped.
pub fn parse(sentence: &str) -> Result<Vec<Token>, LexError> {
    if sentence.is_empty() {
        return Err(LexError::EmptyToken);
    }

    let segments = scan(sentence)?;
    let last = segments.len() - 1;
    segments
        .into_iter()
        .enumerate()
        .map(|(i, (text, delimiter))| {
            let cardinality = if i == last {
                Cardinality::Many
            } else {
                match delimiter {
                    Some(Delimiter::Dot) => Cardinality::Many,
                    Some(Delimiter::Bang) => Cardinality::One,
                    None => unreachable!("scan() only omits a delimiter on the last segment"),
                }
            };
            Ok(Token { value: classify(text), cardinality })
        })
        .collect()
}

/// Classifies a single token's text: `?`-prefixed is a variable, else an
/// integer parse is tried before a float parse, else it's a plain symbol.
fn classify(text: &str) -> NodeValue {
    if let Some(name) = text.strip_prefix('?') {
        return NodeValue::Variable(name.to_string());
    }
    if let Ok(i) = text.parse::<i64>() {
        return NodeValue::Int(i);
    }
    if let Ok(f) = text.parse::<f64>() {
        return NodeValue::Float(f);
    }
    NodeValue::Symbol(text.to_string())
}

/// Re-emits `sentence`, substituting any VARIABLE token whose name is a key
/// in `bindings` with that binding's canonical symbol. Delimiters and
/// non-matching tokens are preserved verbatim.
pub fn bind(sentence: &str, bindings: &std::collections::HashMap<String, NodeValue>) -> Result<String, LexError> {
    let tokens = parse(sentence)?;
    let mut out = String::with_capacity(sentence.len());
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            let prior_cardinality = tokens[i - 1].cardinality;
            out.push(if prior_cardinality == Cardinality::One { '!' } else { '.' });
        }
        match token.value.as_variable_name().and_then(|name| bindings.get(name)) {
            Some(bound) => out.push_str(&bound.canonical_symbol()),
            None => out.push_str(&token.value.canonical_symbol()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod lib_tests;
