//! Shared types for the Simple evaluation engine.
//!
//! This crate defines the term hierarchy (expressions and statements),
//! the value terms that environments bind, and their textual forms.
//! Both the small-step reducer and the big-step evaluator in
//! `simple-eval` operate on these types.

pub mod ast;
mod value;

pub use ast::{Expr, Stmt, Term};
pub use value::Value;
