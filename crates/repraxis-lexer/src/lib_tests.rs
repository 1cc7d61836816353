use super::*;
use std::collections::HashMap;

#[test]
fn parses_mixed_sentence() {
    let tokens = parse("astrid.relationships.britt.reputation!30").unwrap();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].value, NodeValue::Symbol("astrid".into()));
    assert_eq!(tokens[0].cardinality, Cardinality::Many);
    assert_eq!(tokens[3].cardinality, Cardinality::One);
    assert_eq!(tokens[4].value, NodeValue::Int(30));
    assert_eq!(tokens[4].cardinality, Cardinality::Many);
}

#[test]
fn classifies_variables_ints_floats_and_symbols() {
    // a literal decimal point can never reach `classify` — `.` is the field
    // delimiter, so a float token only survives in exponential form.
    let tokens = parse("?x.-3.1e5.root").unwrap();
    assert_eq!(tokens[0].value, NodeValue::Variable("x".into()));
    assert_eq!(tokens[1].value, NodeValue::Int(-3));
    assert_eq!(tokens[2].value, NodeValue::Float(1e5));
    assert_eq!(tokens[3].value, NodeValue::Symbol("root".into()));
}

#[test]
fn integer_parse_is_tried_before_float() {
    let tokens = parse("42").unwrap();
    assert_eq!(tokens[0].value, NodeValue::Int(42));
}

#[test]
fn rejects_empty_tokens() {
    for bad in ["a..b", ".a", "a.", ""] {
        assert_eq!(parse(bad), Err(LexError::EmptyToken), "sentence {bad:?} should be rejected");
    }
}

#[test]
fn bind_substitutes_only_bound_variables() {
    let mut bindings = HashMap::new();
    bindings.insert("other".to_string(), NodeValue::Symbol("lee".into()));
    let out = bind("astrid.relationships.?other.reputation!?r", &bindings).unwrap();
    assert_eq!(out, "astrid.relationships.lee.reputation!?r");
}

#[test]
fn bind_preserves_delimiters() {
    let mut bindings = HashMap::new();
    bindings.insert("x".to_string(), NodeValue::Int(30));
    let out = bind("a.b!?x", &bindings).unwrap();
    assert_eq!(out, "a.b!30");
}
