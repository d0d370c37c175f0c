//! Big-step evaluator.
//!
//! Computes the final value of an expression, or the final environment of a
//! statement, in one call with no intermediate states exposed. Defined
//! independently of the reducer; `parity` checks the two agree.

use crate::env::Environment;
use crate::error::EvalResult;
use crate::operators::{self, BinaryOp};
use serde::{Deserialize, Serialize};
use simple_types::{Expr, Stmt, Term, Value};
use std::fmt;

/// Direct evaluation by structural recursion.
pub trait Evaluate {
    type Output;

    fn evaluate(&self, env: &Environment) -> EvalResult<Self::Output>;
}

impl Evaluate for Expr {
    type Output = Value;

    fn evaluate(&self, env: &Environment) -> EvalResult<Value> {
        match self {
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Add(left, right) => eval_binary(BinaryOp::Add, left, right, env),
            Expr::Multiply(left, right) => eval_binary(BinaryOp::Multiply, left, right, env),
            Expr::LessThan(left, right) => eval_binary(BinaryOp::LessThan, left, right, env),
            Expr::Variable(name) => env.get(name),
        }
    }
}

fn eval_binary(op: BinaryOp, left: &Expr, right: &Expr, env: &Environment) -> EvalResult<Value> {
    let left = left.evaluate(env)?;
    let right = right.evaluate(env)?;
    op.apply(left, right)
}

impl Evaluate for Stmt {
    type Output = Environment;

    fn evaluate(&self, env: &Environment) -> EvalResult<Environment> {
        match self {
            Stmt::DoNothing => Ok(env.clone()),
            Stmt::Assign { name, expr } => Ok(env.bind(name.clone(), expr.evaluate(env)?)),
            Stmt::If {
                condition,
                consequence,
                alternative,
            } => {
                if operators::condition(condition.evaluate(env)?)? {
                    consequence.evaluate(env)
                } else {
                    alternative.evaluate(env)
                }
            }
            Stmt::Sequence { first, second } => second.evaluate(&first.evaluate(env)?),
            Stmt::While { condition, body } => eval_while(condition, body, env),
        }
    }
}

/// Iterates instead of recursing so the iteration count never grows the stack.
fn eval_while(condition: &Expr, body: &Stmt, env: &Environment) -> EvalResult<Environment> {
    let mut env = env.clone();
    while operators::condition(condition.evaluate(&env)?)? {
        env = body.evaluate(&env)?;
    }
    Ok(env)
}

/// Final result of evaluating a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// An expression's value.
    Value(Value),
    /// A statement's final environment.
    Environment(Environment),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => f.write_str(&value.inspect()),
            Outcome::Environment(env) => fmt::Display::fmt(env, f),
        }
    }
}

impl Evaluate for Term {
    type Output = Outcome;

    fn evaluate(&self, env: &Environment) -> EvalResult<Outcome> {
        match self {
            Term::Expr(expr) => expr.evaluate(env).map(Outcome::Value),
            Term::Stmt(stmt) => stmt.evaluate(env).map(Outcome::Environment),
        }
    }
}
