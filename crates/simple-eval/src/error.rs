//! Runtime error types for the Simple engine.

use thiserror::Error;

/// Evaluation error. Both semantics treat these as fatal: the term was
/// malformed or the driver ran out of budget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Lookup of a name absent from the environment.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    /// An operator or condition applied to a value of the wrong kind.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// The driver's configured step budget was spent.
    #[error("step limit exceeded: {0}")]
    StepLimitExceeded(u64),
}

/// Result alias for reducer and evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
