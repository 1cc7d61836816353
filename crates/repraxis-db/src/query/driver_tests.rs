use super::*;
use crate::db::Database;
use crate::limits::Limits;
use crate::trace::NoopTracer;
use std::collections::HashMap;

#[test]
fn s1_assert_with_no_variables_succeeds_with_no_bindings() {
    let mut db = Database::new();
    db.insert("astrid.relationships.britt.reputation!-10").unwrap();
    let query = DBQuery::new().where_clause("astrid.relationships.britt");
    let result = query.run(&db, HashMap::new()).unwrap();
    assert!(result.success);
    assert!(result.bindings.is_empty());
}

#[test]
fn s2_assert_with_no_variables_fails_when_missing() {
    let db = Database::new();
    let query = DBQuery::new().where_clause("astrid.relationships.haley");
    let result = query.run(&db, HashMap::new()).unwrap();
    assert!(!result.success);
}

#[test]
fn s3_comparator_with_variable_and_seed() {
    let mut db = Database::new();
    db.insert("astrid.relationships.jordan.reputation!30").unwrap();
    db.insert("astrid.relationships.britt.reputation!-10").unwrap();
    db.insert("astrid.relationships.lee.reputation!20").unwrap();

    let query = DBQuery::new()
        .where_clause("astrid.relationships.?other.reputation!?r")
        .where_clause("gte ?r 10");
    let result = query.run(&db, HashMap::new()).unwrap();
    assert!(result.success);
    assert_eq!(result.bindings.len(), 2);

    let mut seed = HashMap::new();
    seed.insert("other".to_string(), repraxis_core::Value::Symbol("lee".to_string()));
    let seeded_result = query.run(&db, seed).unwrap();
    assert!(seeded_result.success);
    assert_eq!(seeded_result.bindings.len(), 1);
}

#[test]
fn s4_compound_with_not_and_shared_variable() {
    let mut db = Database::new();
    db.insert("astrid.relationships.jordan.reputation!30").unwrap();
    db.insert("astrid.relationships.britt.reputation!-10").unwrap();
    db.insert("astrid.relationships.lee.reputation!20").unwrap();
    db.insert("britt.relationships.player.tags.spouse").unwrap();

    let query = DBQuery::new()
        .where_clause("astrid.relationships.?other")
        .where_clause("not astrid.relationships.?other.reputation!30")
        .where_clause("not ?other.relationships.?others_spouse.tags.spouse");
    let result = query.run(&db, HashMap::new()).unwrap();
    assert!(result.success);
    assert_eq!(result.bindings.len(), 1);
    assert_eq!(
        result.bindings[0].get("other"),
        Some(&repraxis_core::Value::Symbol("lee".to_string()))
    );
}

#[test]
fn s5_mixed_type_compound_join() {
    let mut db = Database::new();
    db.insert("astrid.relationships.jordan.reputation!30").unwrap();
    db.insert("astrid.relationships.britt.reputation!-10").unwrap();
    db.insert("player.relationships.jordan.reputation!-20").unwrap();
    db.insert("player.relationships.britt.reputation!5").unwrap();

    let query = DBQuery::new()
        .where_clause("?speaker.relationships.?other.reputation!?r0")
        .where_clause("gt ?r0 10")
        .where_clause("player.relationships.?other.reputation!?r1")
        .where_clause("lt ?r1 0")
        .where_clause("neq ?speaker player");
    let result = query.run(&db, HashMap::new()).unwrap();
    assert!(result.success);
    assert_eq!(result.bindings.len(), 1);
    let row = &result.bindings[0];
    assert_eq!(row.get("speaker"), Some(&repraxis_core::Value::Symbol("astrid".to_string())));
    assert_eq!(row.get("other"), Some(&repraxis_core::Value::Symbol("jordan".to_string())));
    assert_eq!(row.get("r0"), Some(&repraxis_core::Value::Int(30)));
    assert_eq!(row.get("r1"), Some(&repraxis_core::Value::Int(-20)));
}

#[test]
fn s6_not_with_no_prior_bindings() {
    let db = Database::new();
    let query = DBQuery::new().where_clause("not player.relationships.jordan.reputation!30");
    let result = query.run(&db, HashMap::new()).unwrap();
    assert!(result.success);
}

#[test]
fn query_monotonicity_appending_clauses_never_grows_bindings() {
    let mut db = Database::new();
    db.insert("astrid.relationships.jordan.reputation!30").unwrap();
    db.insert("astrid.relationships.britt.reputation!-10").unwrap();
    db.insert("astrid.relationships.lee.reputation!20").unwrap();

    let narrower = DBQuery::new().where_clause("astrid.relationships.?other.reputation!?r");
    let wider_result = narrower.run(&db, HashMap::new()).unwrap();
    let narrower_result =
        narrower.where_clause("gte ?r 10").run(&db, HashMap::new()).unwrap();
    assert!(narrower_result.bindings.len() <= wider_result.bindings.len());
}

#[test]
fn unrecognized_clause_shape_is_a_structural_error() {
    let db = Database::new();
    let query = DBQuery::new().where_clause("a b c d");
    let err = query.run(&db, HashMap::new()).unwrap_err();
    assert!(matches!(err, QueryError::UnrecognizedExpression { .. }));
}

#[test]
fn max_clauses_limit_is_enforced() {
    let db = Database::new();
    let mut query = DBQuery::new();
    for _ in 0..5 {
        query = query.where_clause("a.b");
    }
    let tight = Limits { max_contexts: 10_000, max_clauses: 2 };
    let err = query.run_with(&db, HashMap::new(), &NoopTracer, &tight).unwrap_err();
    assert!(matches!(err, QueryError::LimitExceeded { limit: "max_clauses" }));
}
