//! Integration tests for the big-step evaluator.

use pretty_assertions::assert_eq;
use simple_eval::{Environment, EvalError, Evaluate, Expr, Outcome, Stmt, Term, Value};

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn number_evaluates_to_itself() {
    assert_eq!(Expr::number(23).evaluate(&Environment::empty()), Ok(Value::Number(23)));
}

#[test]
fn variable_evaluates_to_binding() {
    let env = Environment::from([("x", Value::Number(23))]);
    assert_eq!(Expr::var("x").evaluate(&env), Ok(Value::Number(23)));
}

#[test]
fn less_than_evaluates_to_bool() {
    let expr = Expr::less_than(Expr::add(Expr::var("x"), Expr::number(2)), Expr::var("y"));
    let env = Environment::from([("x", Value::Number(2)), ("y", Value::Number(5))]);
    assert_eq!(expr.evaluate(&env), Ok(Value::Bool(true)));
}

#[test]
fn arithmetic_evaluates_directly() {
    let expr = Expr::add(
        Expr::multiply(Expr::number(1), Expr::number(2)),
        Expr::multiply(Expr::number(3), Expr::number(4)),
    );
    assert_eq!(expr.evaluate(&Environment::empty()), Ok(Value::Number(14)));
}

#[test]
fn multiply_of_bool_is_type_mismatch() {
    let expr = Expr::multiply(Expr::boolean(false), Expr::number(2));
    let err = expr.evaluate(&Environment::empty()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch: operator '*' expects two numbers, got bool and number"
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn do_nothing_returns_environment_unchanged() {
    let env = Environment::from([("x", Value::Number(1))]);
    assert_eq!(Stmt::DoNothing.evaluate(&env), Ok(env.clone()));
}

#[test]
fn sequence_threads_environment() {
    let program = Stmt::sequence(
        Stmt::assign("x", Expr::add(Expr::number(1), Expr::number(1))),
        Stmt::assign("y", Expr::add(Expr::var("x"), Expr::number(3))),
    );
    let env = program.evaluate(&Environment::empty()).unwrap();
    assert_eq!(env.get("x"), Ok(Value::Number(2)));
    assert_eq!(env.get("y"), Ok(Value::Number(5)));
    assert_eq!(env.to_string(), "{x => «2», y => «5»}");
}

#[test]
fn assign_does_not_touch_input_environment() {
    let env = Environment::from([("x", Value::Number(2))]);
    let after = Stmt::assign("x", Expr::add(Expr::var("x"), Expr::number(1)))
        .evaluate(&env)
        .unwrap();
    assert_eq!(after.get("x"), Ok(Value::Number(3)));
    assert_eq!(env.get("x"), Ok(Value::Number(2)));
}

#[test]
fn if_evaluates_only_selected_branch() {
    // The untaken branch reads an unbound variable and must not be evaluated.
    let program = Stmt::if_else(
        Expr::less_than(Expr::number(1), Expr::number(2)),
        Stmt::assign("y", Expr::number(1)),
        Stmt::assign("y", Expr::var("missing")),
    );
    let env = program.evaluate(&Environment::empty()).unwrap();
    assert_eq!(env.get("y"), Ok(Value::Number(1)));
}

#[test]
fn while_evaluates_to_nine() {
    let program = Stmt::while_loop(
        Expr::less_than(Expr::var("x"), Expr::number(5)),
        Stmt::assign("x", Expr::multiply(Expr::var("x"), Expr::number(3))),
    );
    let env = program
        .evaluate(&Environment::from([("x", Value::Number(1))]))
        .unwrap();
    assert_eq!(env.get("x"), Ok(Value::Number(9)));
}

#[test]
fn while_with_false_condition_is_a_no_op() {
    let program = Stmt::while_loop(Expr::boolean(false), Stmt::assign("x", Expr::var("nope")));
    let env = Environment::from([("x", Value::Number(4))]);
    assert_eq!(program.evaluate(&env), Ok(env.clone()));
}

#[test]
fn while_with_number_condition_is_type_mismatch() {
    let program = Stmt::while_loop(Expr::number(1), Stmt::DoNothing);
    assert!(matches!(
        program.evaluate(&Environment::empty()),
        Err(EvalError::TypeMismatch(_))
    ));
}

#[test]
fn unbound_variable_propagates_from_nested_statement() {
    let program = Stmt::sequence(
        Stmt::assign("a", Expr::number(1)),
        Stmt::if_else(
            Expr::boolean(true),
            Stmt::assign("b", Expr::add(Expr::var("a"), Expr::var("c"))),
            Stmt::DoNothing,
        ),
    );
    assert_eq!(
        program.evaluate(&Environment::empty()),
        Err(EvalError::UnboundVariable("c".to_string()))
    );
}

#[test]
fn term_evaluate_reports_outcome_kind() {
    let env = Environment::from([("x", Value::Number(1))]);
    assert_eq!(
        Term::from(Expr::var("x")).evaluate(&env),
        Ok(Outcome::Value(Value::Number(1)))
    );
    let outcome = Term::from(Stmt::assign("x", Expr::number(2)))
        .evaluate(&env)
        .unwrap();
    assert_eq!(outcome.to_string(), "{x => «2»}");
}

#[test]
fn evaluate_determinism_100_iterations() {
    let program = Stmt::while_loop(
        Expr::less_than(Expr::var("x"), Expr::number(1000)),
        Stmt::assign(
            "x",
            Expr::add(Expr::multiply(Expr::var("x"), Expr::number(2)), Expr::number(1)),
        ),
    );
    let env = Environment::from([("x", Value::Number(0))]);
    let first = program.evaluate(&env).unwrap();
    for i in 0..100 {
        let result = program.evaluate(&env).unwrap();
        assert_eq!(first, result, "Determinism failure at iteration {i}");
    }
}
