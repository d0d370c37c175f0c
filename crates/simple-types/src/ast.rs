//! Term types for the Simple language.
//!
//! Expressions and statements are closed enums; every node is immutable
//! once built and reduction always produces fresh nodes. Recursive fields
//! are boxed. The `Display` form reproduces the source syntax exactly and
//! never inserts parentheses.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An expression term. `Bool` and `Number` are the value terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// `true`, `false`
    Bool(bool),
    /// `42`
    Number(i64),
    /// `left + right`
    Add(Box<Expr>, Box<Expr>),
    /// `left * right`
    Multiply(Box<Expr>, Box<Expr>),
    /// `left < right`
    LessThan(Box<Expr>, Box<Expr>),
    /// `x`
    Variable(String),
}

impl Expr {
    /// `true` or `false` literal.
    pub fn boolean(value: bool) -> Self {
        Expr::Bool(value)
    }

    /// Integer literal.
    pub fn number(value: i64) -> Self {
        Expr::Number(value)
    }

    /// Variable reference, resolved through the environment.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// `left + right`
    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(Box::new(left), Box::new(right))
    }

    /// `left * right`
    pub fn multiply(left: Expr, right: Expr) -> Self {
        Expr::Multiply(Box::new(left), Box::new(right))
    }

    /// `left < right`
    pub fn less_than(left: Expr, right: Expr) -> Self {
        Expr::LessThan(Box::new(left), Box::new(right))
    }

    /// Whether at least one more small-step transition exists.
    pub fn reducible(&self) -> bool {
        !matches!(self, Expr::Bool(_) | Expr::Number(_))
    }

    /// The value this term denotes, if it is already a value term.
    pub fn as_value(&self) -> Option<Value> {
        match self {
            Expr::Bool(b) => Some(Value::Bool(*b)),
            Expr::Number(n) => Some(Value::Number(*n)),
            _ => None,
        }
    }

    /// Source text wrapped in guillemets, e.g. `«1 + 2»`.
    pub fn inspect(&self) -> String {
        format!("«{self}»")
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => Expr::Bool(b),
            Value::Number(n) => Expr::Number(n),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Bool(b) => write!(f, "{b}"),
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Add(left, right) => write!(f, "{left} + {right}"),
            Expr::Multiply(left, right) => write!(f, "{left} * {right}"),
            Expr::LessThan(left, right) => write!(f, "{left} < {right}"),
            Expr::Variable(name) => f.write_str(name),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// A statement term. `DoNothing` is the finished-statement marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stmt {
    /// `do-nothing`
    DoNothing,
    /// `name = expr`
    Assign { name: String, expr: Expr },
    /// `if (condition) { consequence } else { alternative }`
    If {
        condition: Expr,
        consequence: Box<Stmt>,
        alternative: Box<Stmt>,
    },
    /// `first; second`
    Sequence { first: Box<Stmt>, second: Box<Stmt> },
    /// `while (condition) { body }`
    While { condition: Expr, body: Box<Stmt> },
}

impl Stmt {
    /// `name = expr`
    pub fn assign(name: impl Into<String>, expr: Expr) -> Self {
        Stmt::Assign {
            name: name.into(),
            expr,
        }
    }

    /// `if (condition) { consequence } else { alternative }`
    pub fn if_else(condition: Expr, consequence: Stmt, alternative: Stmt) -> Self {
        Stmt::If {
            condition,
            consequence: Box::new(consequence),
            alternative: Box::new(alternative),
        }
    }

    /// `first; second`
    pub fn sequence(first: Stmt, second: Stmt) -> Self {
        Stmt::Sequence {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// `while (condition) { body }`
    pub fn while_loop(condition: Expr, body: Stmt) -> Self {
        Stmt::While {
            condition,
            body: Box::new(body),
        }
    }

    /// Every statement except `DoNothing` can take another step.
    pub fn reducible(&self) -> bool {
        !matches!(self, Stmt::DoNothing)
    }

    /// Source text wrapped in guillemets.
    pub fn inspect(&self) -> String {
        format!("«{self}»")
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::DoNothing => f.write_str("do-nothing"),
            Stmt::Assign { name, expr } => write!(f, "{name} = {expr}"),
            Stmt::If {
                condition,
                consequence,
                alternative,
            } => write!(
                f,
                "if ({condition}) {{ {consequence} }} else {{ {alternative} }}"
            ),
            Stmt::Sequence { first, second } => write!(f, "{first}; {second}"),
            Stmt::While { condition, body } => write!(f, "while ({condition}) {{ {body} }}"),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Terms
// ══════════════════════════════════════════════════════════════════════════════

/// Any program term: the unit the driver steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Expr(Expr),
    Stmt(Stmt),
}

impl Term {
    /// `true` iff the term is not one of `Bool`, `Number`, `DoNothing`.
    pub fn reducible(&self) -> bool {
        match self {
            Term::Expr(expr) => expr.reducible(),
            Term::Stmt(stmt) => stmt.reducible(),
        }
    }

    /// Source text wrapped in guillemets.
    pub fn inspect(&self) -> String {
        format!("«{self}»")
    }
}

impl From<Expr> for Term {
    fn from(expr: Expr) -> Self {
        Term::Expr(expr)
    }
}

impl From<Stmt> for Term {
    fn from(stmt: Stmt) -> Self {
        Term::Stmt(stmt)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Expr(expr) => fmt::Display::fmt(expr, f),
            Term::Stmt(stmt) => fmt::Display::fmt(stmt, f),
        }
    }
}
