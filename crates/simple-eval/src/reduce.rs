//! Small-step reducer.
//!
//! Deterministic, left-to-right, call-by-value. Each call performs exactly
//! one transition and returns a new term together with the (possibly
//! updated) environment; nothing is mutated.

use crate::env::Environment;
use crate::error::EvalResult;
use crate::operators::{self, BinaryOp};
use simple_types::{Expr, Stmt, Term};

/// One-step transition function.
pub trait Reduce: Sized {
    /// Perform one reduction step. Terminal terms reduce to themselves.
    fn reduce(&self, env: &Environment) -> EvalResult<(Self, Environment)>;
}

impl Reduce for Expr {
    fn reduce(&self, env: &Environment) -> EvalResult<(Expr, Environment)> {
        match self {
            Expr::Bool(_) | Expr::Number(_) => Ok((self.clone(), env.clone())),
            Expr::Add(left, right) => reduce_binary(BinaryOp::Add, left, right, env),
            Expr::Multiply(left, right) => reduce_binary(BinaryOp::Multiply, left, right, env),
            Expr::LessThan(left, right) => reduce_binary(BinaryOp::LessThan, left, right, env),
            Expr::Variable(name) => Ok((env.get(name)?.into(), env.clone())),
        }
    }
}

/// Congruence on the left operand, then the right, then the operator itself.
fn reduce_binary(
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
    env: &Environment,
) -> EvalResult<(Expr, Environment)> {
    if left.reducible() {
        let (left, env) = left.reduce(env)?;
        Ok((op.build(left, right.clone()), env))
    } else if right.reducible() {
        let (right, env) = right.reduce(env)?;
        Ok((op.build(left.clone(), right), env))
    } else {
        let value = op.apply(operators::operand(left)?, operators::operand(right)?)?;
        Ok((value.into(), env.clone()))
    }
}

impl Reduce for Stmt {
    fn reduce(&self, env: &Environment) -> EvalResult<(Stmt, Environment)> {
        match self {
            Stmt::DoNothing => Ok((Stmt::DoNothing, env.clone())),

            Stmt::Assign { name, expr } => {
                if expr.reducible() {
                    let (expr, env) = expr.reduce(env)?;
                    Ok((Stmt::assign(name.clone(), expr), env))
                } else {
                    let value = operators::operand(expr)?;
                    Ok((Stmt::DoNothing, env.bind(name.clone(), value)))
                }
            }

            Stmt::If {
                condition,
                consequence,
                alternative,
            } => {
                if condition.reducible() {
                    let (condition, env) = condition.reduce(env)?;
                    let rebuilt = Stmt::If {
                        condition,
                        consequence: consequence.clone(),
                        alternative: alternative.clone(),
                    };
                    Ok((rebuilt, env))
                } else if operators::condition(operators::operand(condition)?)? {
                    Ok(((**consequence).clone(), env.clone()))
                } else {
                    Ok(((**alternative).clone(), env.clone()))
                }
            }

            Stmt::Sequence { first, second } => match first.as_ref() {
                Stmt::DoNothing => Ok(((**second).clone(), env.clone())),
                _ => {
                    let (first, env) = first.reduce(env)?;
                    let rebuilt = Stmt::Sequence {
                        first: Box::new(first),
                        second: second.clone(),
                    };
                    Ok((rebuilt, env))
                }
            },

            // Unrolls one iteration: `if (c) { body; while (c) { body } } else { do-nothing }`.
            Stmt::While { condition, body } => {
                let unrolled = Stmt::If {
                    condition: condition.clone(),
                    consequence: Box::new(Stmt::Sequence {
                        first: body.clone(),
                        second: Box::new(self.clone()),
                    }),
                    alternative: Box::new(Stmt::DoNothing),
                };
                Ok((unrolled, env.clone()))
            }
        }
    }
}

impl Reduce for Term {
    fn reduce(&self, env: &Environment) -> EvalResult<(Term, Environment)> {
        match self {
            Term::Expr(expr) => expr.reduce(env).map(|(expr, env)| (expr.into(), env)),
            Term::Stmt(stmt) => stmt.reduce(env).map(|(stmt, env)| (stmt.into(), env)),
        }
    }
}
