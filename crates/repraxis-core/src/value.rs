use serde::{Serialize, Serializer};
use std::fmt;

/// The classification of a token/node, inferred at lex time.
///
/// Stored separately from [`NodeValue`] (even though the two are almost
/// always redundant) because call sites that only care about the shape of a
/// node — e.g. "is this concrete data or a placeholder" — read better
/// against the tag than against a `matches!` on the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Symbol,
    Int,
    Float,
    Variable,
}

impl NodeType {
    pub fn name(self) -> &'static str {
        match self {
            NodeType::Symbol => "SYMBOL",
            NodeType::Int => "INT",
            NodeType::Float => "FLOAT",
            NodeType::Variable => "VARIABLE",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The typed payload carried by a trie node or a parsed token.
///
/// `Symbol` covers both ordinary data symbols and the literal `"root"`
/// sentinel; `Variable` only ever appears on tokens produced by the lexer
/// (the trie itself never stores a `Variable` node — `insert`/`assert`
/// reject them).
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Symbol(String),
    Int(i64),
    Float(f64),
    Variable(String),
}

impl NodeValue {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeValue::Symbol(_) => NodeType::Symbol,
            NodeValue::Int(_) => NodeType::Int,
            NodeValue::Float(_) => NodeType::Float,
            NodeValue::Variable(_) => NodeType::Variable,
        }
    }

    /// The canonical string form used as the trie's child-map key.
    ///
    /// Integers use their decimal form, floats a fixed `%.3E`-equivalent
    /// exponential form (see [`canonical_float`]), symbols and variables
    /// their original token text.
    pub fn canonical_symbol(&self) -> String {
        match self {
            NodeValue::Symbol(s) => s.clone(),
            NodeValue::Int(i) => i.to_string(),
            NodeValue::Float(f) => canonical_float(*f),
            NodeValue::Variable(name) => name.clone(),
        }
    }

    /// The variable name (without the leading `?`) if this is a `Variable`.
    pub fn as_variable_name(&self) -> Option<&str> {
        match self {
            NodeValue::Variable(name) => Some(name),
            _ => None,
        }
    }
}

/// Formats a float the way the original source's `f"{value:.3E}"` does:
/// three mantissa digits after the point, an uppercase `E`, an explicit
/// exponent sign, and at least two exponent digits.
///
/// Rust's built-in `{:.3e}` formatter gets us the mantissa but leaves the
/// exponent unsigned and unpadded, so the exponent is reformatted by hand.
pub fn canonical_float(value: f64) -> String {
    let lower = format!("{value:.3e}");
    let (mantissa, exp) = lower
        .split_once('e')
        .expect("exponential formatting always contains 'e'");
    let exp: i32 = exp.parse().expect("exponent is always a valid integer");
    format!("{mantissa}E{exp:+03}")
}

/// A bound value handed back to the caller: the node-free counterpart of
/// [`NodeValue`] with the `Variable` case removed, since a fully bound
/// variable always resolves to concrete data.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Symbol(String),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Converts a bound value back into the [`NodeValue`] form the trie
    /// understands, with cardinality left for the caller to attach.
    pub fn into_node_value(self) -> NodeValue {
        match self {
            Value::Symbol(s) => NodeValue::Symbol(s),
            Value::Int(i) => NodeValue::Int(i),
            Value::Float(f) => NodeValue::Float(f),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Symbol(s) => serializer.serialize_str(s),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}
