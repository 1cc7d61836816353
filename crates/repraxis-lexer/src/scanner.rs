use crate::error::LexError;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Raw {
    #[regex(r"[^.!]+")]
    Text,
    #[token(".")]
    Dot,
    #[token("!")]
    Bang,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    Dot,
    Bang,
}

/// Splits `sentence` into `(token_text, delimiter_that_follows)` pairs. The
/// final pair always carries `None` — there is no delimiter after the last
/// token. Two adjacent delimiters, or a delimiter at either end of the
/// string, produce [`LexError::EmptyToken`] since there would be nothing
/// between them to classify.
pub(crate) fn scan(sentence: &str) -> Result<Vec<(&str, Option<Delimiter>)>, LexError> {
    let mut lexer = Raw::lexer(sentence);
    let mut segments = Vec::new();
    let mut expecting_text = true;

    while let Some(result) = lexer.next() {
        let raw = result.map_err(|_| LexError::EmptyToken)?;
        match raw {
            Raw::Text => {
                if !expecting_text {
                    return Err(LexError::EmptyToken);
                }
                segments.push((lexer.slice(), None));
                expecting_text = false;
            }
            Raw::Dot | Raw::Bang => {
                if expecting_text {
                    // a delimiter where a token was expected: either the
                    // sentence starts with one, or two delimiters are adjacent.
                    return Err(LexError::EmptyToken);
                }
                let delimiter = if raw == Raw::Dot { Delimiter::Dot } else { Delimiter::Bang };
                segments.last_mut().unwrap().1 = Some(delimiter);
                expecting_text = true;
            }
        }
    }

    if expecting_text {
        // the sentence ended on a delimiter (or was empty, handled by the caller).
        return Err(LexError::EmptyToken);
    }

    Ok(segments)
}
