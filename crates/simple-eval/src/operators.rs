//! Binary operators and checked operand casts shared by both semantics.

use crate::error::{EvalError, EvalResult};
use simple_types::{Expr, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Multiply,
    LessThan,
}

impl BinaryOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Multiply => "*",
            BinaryOp::LessThan => "<",
        }
    }

    /// Rebuild a node of this operator around new operands.
    pub(crate) fn build(self, left: Expr, right: Expr) -> Expr {
        match self {
            BinaryOp::Add => Expr::add(left, right),
            BinaryOp::Multiply => Expr::multiply(left, right),
            BinaryOp::LessThan => Expr::less_than(left, right),
        }
    }

    /// Apply the operator to two value terms. Arithmetic wraps on overflow.
    pub(crate) fn apply(self, left: Value, right: Value) -> EvalResult<Value> {
        let (Value::Number(a), Value::Number(b)) = (left, right) else {
            return Err(EvalError::TypeMismatch(format!(
                "operator '{}' expects two numbers, got {} and {}",
                self.symbol(),
                left.type_name(),
                right.type_name()
            )));
        };
        Ok(match self {
            BinaryOp::Add => Value::Number(a.wrapping_add(b)),
            BinaryOp::Multiply => Value::Number(a.wrapping_mul(b)),
            BinaryOp::LessThan => Value::Bool(a < b),
        })
    }
}

/// Read an irreducible operand as a value term.
pub(crate) fn operand(expr: &Expr) -> EvalResult<Value> {
    expr.as_value().ok_or_else(|| {
        EvalError::TypeMismatch(format!("expected a value term, got '{expr}'"))
    })
}

/// Read a condition value as a boolean.
pub(crate) fn condition(value: Value) -> EvalResult<bool> {
    value.as_bool().ok_or_else(|| {
        EvalError::TypeMismatch(format!("condition must be bool, got {}", value.type_name()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_arithmetic() {
        assert_eq!(
            BinaryOp::Add.apply(Value::Number(2), Value::Number(12)),
            Ok(Value::Number(14))
        );
        assert_eq!(
            BinaryOp::Multiply.apply(Value::Number(3), Value::Number(4)),
            Ok(Value::Number(12))
        );
        assert_eq!(
            BinaryOp::LessThan.apply(Value::Number(5), Value::Number(4)),
            Ok(Value::Bool(false))
        );
    }

    #[test]
    fn test_apply_wraps_on_overflow() {
        assert_eq!(
            BinaryOp::Add.apply(Value::Number(i64::MAX), Value::Number(1)),
            Ok(Value::Number(i64::MIN))
        );
    }

    #[test]
    fn test_apply_rejects_bool_operands() {
        let err = BinaryOp::LessThan
            .apply(Value::Bool(true), Value::Number(1))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch: operator '<' expects two numbers, got bool and number"
        );
    }

    #[test]
    fn test_condition_rejects_numbers() {
        assert_eq!(condition(Value::Bool(true)), Ok(true));
        assert!(matches!(
            condition(Value::Number(1)),
            Err(EvalError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_operand_rejects_reducible_terms() {
        assert_eq!(operand(&Expr::number(3)), Ok(Value::Number(3)));
        assert!(matches!(
            operand(&Expr::var("x")),
            Err(EvalError::TypeMismatch(_))
        ));
    }
}
