use repraxis_core::NodeValue;

use crate::db::Database;
use crate::limits::Limits;
use crate::trace::Tracer;

use super::driver::QueryError;
use super::state::QueryState;
use super::unify::unify_all;

/// The six comparator keywords a clause may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    pub fn keyword(self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Neq => "neq",
            CompareOp::Lt => "lt",
            CompareOp::Lte => "lte",
            CompareOp::Gt => "gt",
            CompareOp::Gte => "gte",
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "eq" => Some(CompareOp::Eq),
            "neq" => Some(CompareOp::Neq),
            "lt" => Some(CompareOp::Lt),
            "lte" => Some(CompareOp::Lte),
            "gt" => Some(CompareOp::Gt),
            "gte" => Some(CompareOp::Gte),
            _ => None,
        }
    }

    fn apply(self, left: &NodeValue, right: &NodeValue) -> Result<bool, repraxis_core::CoreError> {
        match self {
            CompareOp::Eq => Ok(repraxis_core::equal_to(left, right)),
            CompareOp::Neq => Ok(repraxis_core::not_equal_to(left, right)),
            CompareOp::Lt => repraxis_core::less_than(left, right),
            CompareOp::Lte => repraxis_core::less_than_or_equal(left, right),
            CompareOp::Gt => repraxis_core::greater_than(left, right),
            CompareOp::Gte => repraxis_core::greater_than_or_equal(left, right),
        }
    }
}

/// One clause, already classified by word count and leading keyword.
#[derive(Debug, Clone)]
pub enum Expression {
    Assert(String),
    Not(String),
    Compare { op: CompareOp, left: String, right: String },
}

impl Expression {
    /// Dispatches a whitespace-separated clause string to the matching
    /// expression shape: one word is an `Assert`, `not <sentence>` is a
    /// `Not`, `<op> <left> <right>` with a recognized comparator keyword is
    /// a `Compare`. Anything else is `UnrecognizedExpression`.
    pub fn parse(clause: &str) -> Result<Self, QueryError> {
        let parts: Vec<&str> = clause.split_whitespace().collect();
        match parts.as_slice() {
            [sentence] => Ok(Expression::Assert(sentence.to_string())),
            ["not", sentence] => Ok(Expression::Not(sentence.to_string())),
            [word, left, right] => match CompareOp::from_keyword(word) {
                Some(op) => Ok(Expression::Compare { op, left: left.to_string(), right: right.to_string() }),
                None => Err(QueryError::UnrecognizedExpression { clause: clause.to_string() }),
            },
            _ => Err(QueryError::UnrecognizedExpression { clause: clause.to_string() }),
        }
    }

    pub fn evaluate(
        &self,
        db: &Database,
        tracer: &dyn Tracer,
        limits: &Limits,
        state: &QueryState,
    ) -> Result<QueryState, QueryError> {
        match self {
            Expression::Assert(sentence) => evaluate_assert(sentence, db, tracer, limits, state),
            Expression::Not(sentence) => evaluate_not(sentence, db, tracer, limits, state),
            Expression::Compare { op, left, right } => {
                evaluate_compare(*op, left, right, state)
            }
        }
    }
}

fn has_variable(sentence: &str) -> Result<bool, QueryError> {
    let tokens = repraxis_lexer::parse(sentence)?;
    Ok(tokens.iter().any(|t| matches!(t.value, NodeValue::Variable(_))))
}

fn evaluate_assert(
    sentence: &str,
    db: &Database,
    tracer: &dyn Tracer,
    limits: &Limits,
    state: &QueryState,
) -> Result<QueryState, QueryError> {
    if !has_variable(sentence)? {
        return if db.assert_statement(sentence)? { Ok(state.clone()) } else { Ok(QueryState::failed()) };
    }

    let bindings = unify_all(db, tracer, limits, state, &[sentence])?;
    if bindings.is_empty() {
        return Ok(QueryState::failed());
    }
    let mut valid = Vec::new();
    for binding in bindings {
        let substituted = repraxis_lexer::bind(sentence, &binding)?;
        if db.assert_statement(&substituted)? {
            valid.push(binding);
        }
    }
    if valid.is_empty() { Ok(QueryState::failed()) } else { Ok(QueryState::ok(valid)) }
}

fn evaluate_not(
    sentence: &str,
    db: &Database,
    tracer: &dyn Tracer,
    limits: &Limits,
    state: &QueryState,
) -> Result<QueryState, QueryError> {
    if !has_variable(sentence)? {
        return if !db.assert_statement(sentence)? { Ok(state.clone()) } else { Ok(QueryState::failed()) };
    }

    if state.bindings.is_empty() {
        let bindings = unify_all(db, tracer, limits, state, &[sentence])?;
        return if bindings.is_empty() { Ok(state.clone()) } else { Ok(QueryState::failed()) };
    }

    let mut survivors = Vec::new();
    for binding in &state.bindings {
        let substituted = repraxis_lexer::bind(sentence, binding)?;
        let holds = if has_variable(&substituted)? {
            let isolated = QueryState::ok(Vec::new());
            let found = unify_all(db, tracer, limits, &isolated, &[substituted.as_str()])?;
            found.is_empty()
        } else {
            !db.assert_statement(&substituted)?
        };
        if holds {
            survivors.push(binding.clone());
        }
    }
    if survivors.is_empty() { Ok(QueryState::failed()) } else { Ok(QueryState::ok(survivors)) }
}

fn evaluate_compare(op: CompareOp, left: &str, right: &str, state: &QueryState) -> Result<QueryState, QueryError> {
    let left_tokens = repraxis_lexer::parse(left)?;
    let right_tokens = repraxis_lexer::parse(right)?;
    if left_tokens.len() != 1 {
        return Err(QueryError::MalformedComparand { sentence: left.to_string() });
    }
    if right_tokens.len() != 1 {
        return Err(QueryError::MalformedComparand { sentence: right.to_string() });
    }

    if state.bindings.is_empty() {
        let left_is_var = matches!(left_tokens[0].value, NodeValue::Variable(_));
        let right_is_var = matches!(right_tokens[0].value, NodeValue::Variable(_));
        if left_is_var || right_is_var {
            return Ok(QueryState::failed());
        }
        return if op.apply(&left_tokens[0].value, &right_tokens[0].value)? {
            Ok(state.clone())
        } else {
            Ok(QueryState::failed())
        };
    }

    let mut survivors = Vec::new();
    for binding in &state.bindings {
        let l = repraxis_lexer::bind(left, binding)?;
        let r = repraxis_lexer::bind(right, binding)?;
        let lt = repraxis_lexer::parse(&l)?;
        let rt = repraxis_lexer::parse(&r)?;
        if lt.len() != 1 {
            return Err(QueryError::MalformedComparand { sentence: l });
        }
        if rt.len() != 1 {
            return Err(QueryError::MalformedComparand { sentence: r });
        }
        if op.apply(&lt[0].value, &rt[0].value)? {
            survivors.push(binding.clone());
        }
    }
    if survivors.is_empty() { Ok(QueryState::failed()) } else { Ok(QueryState::ok(survivors)) }
}

#[cfg(test)]
mod expr_tests;
