//! Small-step ↔ big-step parity.
//!
//! Runs a term through both semantics and reports the two outcomes. For any
//! well-formed, terminating term they must be identical.

use crate::env::Environment;
use crate::error::EvalResult;
use crate::evaluate::{Evaluate, Outcome};
use crate::machine::{Machine, MachineConfig};
use crate::operators;
use simple_types::Term;

/// Outcomes of both semantics for the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parity {
    pub small_step: Outcome,
    pub big_step: Outcome,
    /// Reductions the small-step driver needed.
    pub steps: u64,
}

impl Parity {
    pub fn agrees(&self) -> bool {
        self.small_step == self.big_step
    }
}

/// Drive the reducer to a terminal state and read off its outcome.
pub fn small_step(term: &Term, env: &Environment) -> EvalResult<Outcome> {
    small_step_with(term, env, MachineConfig::default()).map(|(outcome, _)| outcome)
}

fn small_step_with(
    term: &Term,
    env: &Environment,
    config: MachineConfig,
) -> EvalResult<(Outcome, u64)> {
    let mut machine = Machine::with_config(term.clone(), env.clone(), config);
    machine.run()?;
    let steps = machine.steps();
    let state = machine.into_state();
    let outcome = match state.term {
        Term::Expr(expr) => Outcome::Value(operators::operand(&expr)?),
        Term::Stmt(_) => Outcome::Environment(state.env),
    };
    Ok((outcome, steps))
}

/// Evaluate in one big step.
pub fn big_step(term: &Term, env: &Environment) -> EvalResult<Outcome> {
    term.evaluate(env)
}

/// Run both semantics with no step limit.
pub fn check(term: &Term, env: &Environment) -> EvalResult<Parity> {
    check_with(term, env, MachineConfig::default())
}

/// Run both semantics, bounding the small-step side by `config`.
pub fn check_with(term: &Term, env: &Environment, config: MachineConfig) -> EvalResult<Parity> {
    let (small_step, steps) = small_step_with(term, env, config)?;
    let big_step = big_step(term, env)?;
    Ok(Parity {
        small_step,
        big_step,
        steps,
    })
}
