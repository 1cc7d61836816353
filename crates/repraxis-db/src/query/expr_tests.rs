use super::*;
use crate::db::Database;
use crate::limits::Limits;
use crate::query::driver::QueryError;
use crate::query::state::QueryState;
use crate::trace::NoopTracer;
use std::collections::HashMap;

fn seed_db() -> Database {
    let mut db = Database::new();
    db.insert("astrid.relationships.britt.reputation!-10").unwrap();
    db
}

#[test]
fn assert_without_variables_succeeds_when_fact_present() {
    let db = seed_db();
    let expr = Expression::parse("astrid.relationships.britt").unwrap();
    let state = expr.evaluate(&db, &NoopTracer, &Limits::default(), &QueryState::default()).unwrap();
    assert!(state.success);
}

#[test]
fn assert_without_variables_fails_when_fact_missing() {
    let db = seed_db();
    let expr = Expression::parse("astrid.relationships.haley").unwrap();
    let state = expr.evaluate(&db, &NoopTracer, &Limits::default(), &QueryState::default()).unwrap();
    assert!(!state.success);
}

#[test]
fn not_with_no_prior_bindings_and_absent_fact_succeeds() {
    let db = seed_db();
    let expr = Expression::parse("not player.relationships.jordan.reputation!30").unwrap();
    let state = expr.evaluate(&db, &NoopTracer, &Limits::default(), &QueryState::default()).unwrap();
    assert!(state.success);
}

#[test]
fn comparator_widens_int_and_float() {
    let db = seed_db();
    let limits = Limits::default();
    let gt = Expression::parse("gt 1 0.5").unwrap();
    assert!(gt.evaluate(&db, &NoopTracer, &limits, &QueryState::default()).unwrap().success);
    let gt_reversed = Expression::parse("gt 0.5 1").unwrap();
    assert!(!gt_reversed.evaluate(&db, &NoopTracer, &limits, &QueryState::default()).unwrap().success);
}

#[test]
fn comparator_with_unbound_variable_and_no_prior_bindings_fails() {
    let db = seed_db();
    let expr = Expression::parse("gt ?x 1").unwrap();
    let state = expr.evaluate(&db, &NoopTracer, &Limits::default(), &QueryState::default()).unwrap();
    assert!(!state.success);
}

#[test]
fn comparator_filters_prior_bindings() {
    let db = seed_db();
    let mut row = HashMap::new();
    row.insert("r".to_string(), repraxis_core::NodeValue::Int(-10));
    let seeded = QueryState::ok(vec![row]);
    let expr = Expression::parse("gte ?r 0").unwrap();
    let result = expr.evaluate(&db, &NoopTracer, &Limits::default(), &seeded).unwrap();
    assert!(!result.success);
}

#[test]
fn malformed_comparand_is_rejected() {
    let db = seed_db();
    let expr = Expression::parse("eq a.b 1").unwrap();
    let err = expr.evaluate(&db, &NoopTracer, &Limits::default(), &QueryState::default()).unwrap_err();
    assert!(matches!(err, QueryError::MalformedComparand { .. }));
}

#[test]
fn parse_rejects_unrecognized_shapes() {
    assert!(matches!(
        Expression::parse("a b c d"),
        Err(QueryError::UnrecognizedExpression { .. })
    ));
}
