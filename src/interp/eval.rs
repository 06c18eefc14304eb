//! Tree-walking evaluator
//!
//! Two entry points share one arithmetic core:
//!
//! * [`Interpreter::eval_tree`] folds an arithmetic parse tree directly.
//! * [`Interpreter::eval`] folds a value built by the reader.
//!
//! Failures are values. The first error met while folding left to right is
//! the result, and nothing to its right is evaluated.

use serde::{Deserialize, Serialize};

use crate::ast::{NodeKind, ParseNode};

use super::read::read_number;
use super::value::{EvalError, SExpr, Value};

/// What `+`, `-`, `*` and `/` do when the result leaves the `i64` range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Produce `Error(Overflow)`
    #[default]
    Error,
    /// Two's complement wraparound
    Wrap,
}

/// Stateless evaluator; the overflow policy is its only setting
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter {
    overflow: OverflowPolicy,
}

impl Interpreter {
    /// Create a new interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overflow(overflow: OverflowPolicy) -> Self {
        Interpreter { overflow }
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    // ==================== PARSE TREE ====================

    /// Evaluate an arithmetic parse tree node
    pub fn eval_tree(&self, node: &ParseNode) -> Value {
        match node.kind {
            NodeKind::Number => read_number(&node.contents),
            NodeKind::Root | NodeKind::Application | NodeKind::SExpr => self.apply_tree(node),
            NodeKind::Operator | NodeKind::Symbol | NodeKind::Paren | NodeKind::Anchor => {
                Value::err(EvalError::InvalidOperator)
            }
        }
    }

    /// `'(' <operator> <expr>+ ')'`, or the root `^ <operator> <expr>+ $`
    fn apply_tree(&self, node: &ParseNode) -> Value {
        // Child 0 is the opening token, child 1 the operator
        let Some(op) = node.children.get(1) else {
            return Value::err(EvalError::InvalidOperator);
        };
        if !matches!(op.kind, NodeKind::Operator | NodeKind::Symbol) {
            return Value::err(EvalError::InvalidOperator);
        }

        let mut operands = node.children[2..].iter().filter(|c| c.kind.is_expr());
        let Some(first) = operands.next() else {
            return Value::message(format!("Operator `{}` needs an operand.", op.contents));
        };

        let mut acc = self.eval_tree(first);
        for operand in operands {
            if acc.is_error() {
                break;
            }
            let y = self.eval_tree(operand);
            acc = self.combine(acc, &op.contents, y);
        }
        acc
    }

    // ==================== VALUES ====================

    /// Evaluate a value produced by the reader
    pub fn eval(&self, value: Value) -> Value {
        match value {
            Value::SExpr(list) => self.eval_sexpr(list),
            other => other,
        }
    }

    fn eval_sexpr(&self, list: SExpr) -> Value {
        let mut items = SExpr::new();
        for child in list {
            let value = self.eval(child);
            if value.is_error() {
                return value;
            }
            items = items.append(value);
        }

        if items.len() > 1 {
            return self.apply(items);
        }
        let mut items = items.into_iter();
        match items.next() {
            Some(only) => only,
            None => Value::SExpr(SExpr::new()),
        }
    }

    /// Fold the head symbol over the remaining, already evaluated, values
    fn apply(&self, items: SExpr) -> Value {
        let mut items = items.into_iter();
        let op = match items.next() {
            Some(Value::Symbol(op)) => op,
            _ => return Value::message("S-expression does not start with symbol."),
        };

        let operands: Vec<Value> = items.collect();
        if operands.iter().any(|v| !matches!(v, Value::Number(_))) {
            return Value::message("Cannot operate on non-number.");
        }

        let mut operands = operands.into_iter();
        let Some(mut acc) = operands.next() else {
            return Value::message(format!("Operator `{op}` needs an operand."));
        };
        for y in operands {
            if acc.is_error() {
                break;
            }
            acc = self.combine(acc, &op, y);
        }
        acc
    }

    // ==================== ARITHMETIC ====================

    /// Combine the accumulator with the next operand
    ///
    /// An error on either side is returned unchanged, `x` first.
    pub fn combine(&self, x: Value, op: &str, y: Value) -> Value {
        match (x, y) {
            (Value::Error(e), _) | (_, Value::Error(e)) => Value::Error(e),
            (Value::Number(a), Value::Number(b)) => self.arith(a, op, b),
            _ => Value::message("Cannot operate on non-number."),
        }
    }

    fn arith(&self, a: i64, op: &str, b: i64) -> Value {
        match op {
            "+" => self.checked(a.checked_add(b), a.wrapping_add(b)),
            "-" => self.checked(a.checked_sub(b), a.wrapping_sub(b)),
            "*" => self.checked(a.checked_mul(b), a.wrapping_mul(b)),
            "/" if b == 0 => Value::err(EvalError::DivisionByZero),
            "/" => self.checked(a.checked_div(b), a.wrapping_div(b)),
            _ => Value::err(EvalError::InvalidOperator),
        }
    }

    fn checked(&self, result: Option<i64>, wrapped: i64) -> Value {
        match (result, self.overflow) {
            (Some(n), _) => Value::Number(n),
            (None, OverflowPolicy::Wrap) => Value::Number(wrapped),
            (None, OverflowPolicy::Error) => Value::err(EvalError::Overflow),
        }
    }
}

/// Evaluate an arithmetic parse tree with default settings
pub fn eval_tree(node: &ParseNode) -> Value {
    Interpreter::new().eval_tree(node)
}

/// Evaluate a value with default settings
pub fn eval(value: Value) -> Value {
    Interpreter::new().eval(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(x: i64) -> Value {
        Value::num(x)
    }

    #[test]
    fn test_combine_operators() {
        let interp = Interpreter::new();
        assert_eq!(interp.combine(n(7), "+", n(3)), n(10));
        assert_eq!(interp.combine(n(7), "-", n(3)), n(4));
        assert_eq!(interp.combine(n(7), "*", n(3)), n(21));
        assert_eq!(interp.combine(n(7), "/", n(3)), n(2));
        assert_eq!(interp.combine(n(-7), "/", n(2)), n(-3));
        assert_eq!(
            interp.combine(n(7), "%", n(3)),
            Value::err(EvalError::InvalidOperator)
        );
    }

    #[test]
    fn test_combine_division_by_zero() {
        let interp = Interpreter::new();
        assert_eq!(
            interp.combine(n(5), "/", n(0)),
            Value::err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_combine_prefers_left_error() {
        let interp = Interpreter::new();
        let x = Value::err(EvalError::InvalidNumber);
        let y = Value::err(EvalError::DivisionByZero);
        assert_eq!(interp.combine(x.clone(), "+", y), x);
        assert_eq!(
            interp.combine(n(1), "%", Value::err(EvalError::DivisionByZero)),
            Value::err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_policies() {
        let strict = Interpreter::new();
        assert_eq!(
            strict.combine(n(i64::MAX), "+", n(1)),
            Value::err(EvalError::Overflow)
        );
        assert_eq!(
            strict.combine(n(i64::MIN), "/", n(-1)),
            Value::err(EvalError::Overflow)
        );

        let wrapping = Interpreter::with_overflow(OverflowPolicy::Wrap);
        assert_eq!(wrapping.combine(n(i64::MAX), "+", n(1)), n(i64::MIN));
        assert_eq!(wrapping.combine(n(i64::MIN), "/", n(-1)), n(i64::MIN));
    }

    #[test]
    fn test_eval_value_shapes() {
        assert_eq!(eval(n(3)), n(3));
        assert_eq!(eval(Value::sym("+")), Value::sym("+"));
        assert_eq!(eval(Value::sexpr(Vec::new())), Value::sexpr(Vec::new()));
        assert_eq!(eval(Value::sexpr([n(9)])), n(9));
        assert_eq!(
            eval(Value::sexpr([Value::sym("*"), n(2), n(3), n(4)])),
            n(24)
        );
    }

    #[test]
    fn test_eval_single_element_unwraps() {
        let nested = Value::sexpr([Value::sexpr([Value::sym("+")])]);
        assert_eq!(eval(nested), Value::sym("+"));
        let empty_inside = Value::sexpr([Value::sexpr(Vec::new())]);
        assert_eq!(eval(empty_inside), Value::sexpr(Vec::new()));
    }

    #[test]
    fn test_eval_value_errors() {
        assert_eq!(
            eval(Value::sexpr([n(1), n(2)])),
            Value::message("S-expression does not start with symbol.")
        );
        assert_eq!(
            eval(Value::sexpr([Value::sym("+"), n(1), Value::sym("x")])),
            Value::message("Cannot operate on non-number.")
        );
    }

    #[test]
    fn test_eval_value_first_error_wins() {
        let tree = Value::sexpr([
            Value::sym("+"),
            Value::sexpr([Value::sym("/"), n(1), n(0)]),
            Value::err(EvalError::InvalidNumber),
        ]);
        assert_eq!(eval(tree), Value::err(EvalError::DivisionByZero));
    }
}
