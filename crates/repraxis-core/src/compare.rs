use crate::error::CoreError;
use crate::value::NodeValue;
use std::cmp::Ordering;

/// `equal_to`: nodes of different types are never equal (no error raised).
/// Float equality is bitwise (`f64`'s `==`), matching the source's lack of
/// an epsilon tolerance.
pub fn equal_to(left: &NodeValue, right: &NodeValue) -> bool {
    match (left, right) {
        (NodeValue::Symbol(a), NodeValue::Symbol(b)) => a == b,
        (NodeValue::Int(a), NodeValue::Int(b)) => a == b,
        (NodeValue::Float(a), NodeValue::Float(b)) => a == b,
        (NodeValue::Variable(a), NodeValue::Variable(b)) => a == b,
        _ => false,
    }
}

/// `not_equal_to`: the logical negation of [`equal_to`], including across
/// mismatched node types (where it is unconditionally `true`).
pub fn not_equal_to(left: &NodeValue, right: &NodeValue) -> bool {
    !equal_to(left, right)
}

/// Orders two node values, widening INT/FLOAT mixes to float and comparing
/// SYMBOL/SYMBOL lexicographically. Any other pairing (including either side
/// still being a VARIABLE) has no defined ordering.
pub fn try_compare(left: &NodeValue, right: &NodeValue) -> Result<Ordering, CoreError> {
    match (left, right) {
        (NodeValue::Int(a), NodeValue::Int(b)) => Ok(a.cmp(b)),
        (NodeValue::Float(a), NodeValue::Float(b)) => Ok(a.total_cmp(b)),
        (NodeValue::Int(a), NodeValue::Float(b)) => Ok((*a as f64).total_cmp(b)),
        (NodeValue::Float(a), NodeValue::Int(b)) => Ok(a.total_cmp(&(*b as f64))),
        (NodeValue::Symbol(a), NodeValue::Symbol(b)) => Ok(a.cmp(b)),
        _ => Err(CoreError::UndefinedOrdering {
            left: left.node_type().name(),
            right: right.node_type().name(),
        }),
    }
}

pub fn less_than(left: &NodeValue, right: &NodeValue) -> Result<bool, CoreError> {
    Ok(try_compare(left, right)? == Ordering::Less)
}

pub fn less_than_or_equal(left: &NodeValue, right: &NodeValue) -> Result<bool, CoreError> {
    Ok(try_compare(left, right)? != Ordering::Greater)
}

pub fn greater_than(left: &NodeValue, right: &NodeValue) -> Result<bool, CoreError> {
    Ok(try_compare(left, right)? == Ordering::Greater)
}

pub fn greater_than_or_equal(left: &NodeValue, right: &NodeValue) -> Result<bool, CoreError> {
    Ok(try_compare(left, right)? != Ordering::Less)
}
