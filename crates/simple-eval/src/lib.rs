//! Simple evaluation engine.
//!
//! Two independent semantics over the same term family:
//! - [`Reduce`]: small-step reduction, one congruence step at a time.
//! - [`Evaluate`]: big-step evaluation by structural recursion.
//!
//! [`Machine`] drives the reducer to a terminal state and can expose every
//! intermediate state as a lazy [`Trace`]. [`parity`] runs both semantics
//! side by side.

mod env;
mod error;
mod evaluate;
mod machine;
mod operators;
pub mod parity;
mod reduce;

pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluate::{Evaluate, Outcome};
pub use machine::{Machine, MachineConfig, State, Trace};
pub use reduce::Reduce;
pub use simple_types::{Expr, Stmt, Term, Value};
