//! Driver for the small-step reducer.
//!
//! [`State::step`] is the pure transition; [`Machine`] wraps it with a
//! step counter and an optional step budget. Rendering states is up to the
//! caller: a [`State`] displays as one trace line, `"<term>, <env>"`.

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use crate::reduce::Reduce;
use serde::{Deserialize, Serialize};
use simple_types::Term;
use std::fmt;
use std::iter::FusedIterator;
use tracing::{debug, trace, warn};

/// Driver settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MachineConfig {
    /// Maximum number of reduction steps. `None` means unlimited, in which
    /// case a non-terminating program runs forever.
    pub step_limit: Option<u64>,
}

impl MachineConfig {
    pub fn with_step_limit(limit: u64) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }
}

/// A snapshot of the machine: the current term and environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub term: Term,
    pub env: Environment,
}

impl State {
    pub fn new(term: impl Into<Term>, env: Environment) -> Self {
        Self {
            term: term.into(),
            env,
        }
    }

    /// `true` once the term can no longer be reduced.
    pub fn is_terminal(&self) -> bool {
        !self.term.reducible()
    }

    /// Apply one reduction step.
    pub fn step(&self) -> EvalResult<State> {
        let (term, env) = self.term.reduce(&self.env)?;
        Ok(State { term, env })
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.term, self.env)
    }
}

/// Holds the current state and steps it forward.
#[derive(Debug, Clone)]
pub struct Machine {
    state: State,
    steps: u64,
    config: MachineConfig,
}

impl Machine {
    /// Create a machine with no step limit.
    pub fn new(term: impl Into<Term>, env: Environment) -> Self {
        Self::with_config(term, env, MachineConfig::default())
    }

    pub fn with_config(term: impl Into<Term>, env: Environment, config: MachineConfig) -> Self {
        Self {
            state: State::new(term, env),
            steps: 0,
            config,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn term(&self) -> &Term {
        &self.state.term
    }

    pub fn env(&self) -> &Environment {
        &self.state.env
    }

    /// Number of reductions applied so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn into_state(self) -> State {
        self.state
    }

    /// Check the step budget. Returns error if exhausted.
    fn tick(&self) -> EvalResult<()> {
        if let Some(limit) = self.config.step_limit {
            if self.steps >= limit {
                warn!(limit, term = %self.state.term, "step limit exceeded");
                return Err(EvalError::StepLimitExceeded(limit));
            }
        }
        Ok(())
    }

    /// Apply one reduction, replacing both the term and the environment.
    pub fn step(&mut self) -> EvalResult<()> {
        self.tick()?;
        self.state = self.state.step()?;
        self.steps += 1;
        trace!(step = self.steps, state = %self.state, "reduced");
        Ok(())
    }

    /// Step until the term is irreducible and return the final state.
    pub fn run(&mut self) -> EvalResult<&State> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        debug!(steps = self.steps, state = %self.state, "machine halted");
        Ok(&self.state)
    }

    /// Every state from the current one to the terminal one, in order.
    pub fn trace(self) -> Trace {
        Trace {
            machine: self,
            started: false,
            done: false,
        }
    }
}

/// Lazy, non-restartable sequence of machine states.
///
/// Yields the starting state first and the irreducible state last. A
/// reduction error is yielded once and ends the sequence. For a program that
/// never terminates the sequence never ends either.
#[derive(Debug)]
pub struct Trace {
    machine: Machine,
    started: bool,
    done: bool,
}

impl Trace {
    /// The machine as it stands after the states yielded so far.
    pub fn machine(&self) -> &Machine {
        &self.machine
    }
}

impl Iterator for Trace {
    type Item = EvalResult<State>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if let Err(err) = self.machine.step() {
                self.done = true;
                return Some(Err(err));
            }
        } else {
            self.started = true;
        }
        if self.machine.state.is_terminal() {
            debug!(steps = self.machine.steps, "trace finished");
            self.done = true;
        }
        Some(Ok(self.machine.state.clone()))
    }
}

impl FusedIterator for Trace {}
