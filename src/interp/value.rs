//! Runtime values for the interpreter

use std::ops::Deref;

use thiserror::Error;

/// Failure carried as a value
///
/// The `Display` text is what follows `Error: ` when the value is printed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EvalError {
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Invalid operator.")]
    InvalidOperator,
    #[error("Invalid number.")]
    InvalidNumber,
    #[error("Integer overflow.")]
    Overflow,
    #[error("{0}")]
    Message(String),
}

/// Runtime value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// 64-bit signed integer
    Number(i64),
    /// Evaluation failure
    Error(EvalError),
    /// Operator or identifier
    Symbol(String),
    /// Ordered list of values
    SExpr(SExpr),
}

impl Value {
    pub fn num(n: i64) -> Self {
        Value::Number(n)
    }

    pub fn err(error: EvalError) -> Self {
        Value::Error(error)
    }

    /// Error with a free-form message
    pub fn message(text: impl Into<String>) -> Self {
        Value::Error(EvalError::Message(text.into()))
    }

    pub fn sym(text: impl Into<String>) -> Self {
        Value::Symbol(text.into())
    }

    pub fn sexpr(items: impl IntoIterator<Item = Value>) -> Self {
        Value::SExpr(items.into_iter().collect())
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Error(_) => "error",
            Value::Symbol(_) => "symbol",
            Value::SExpr(_) => "sexpr",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Numbers and errors are never evaluated further
    pub fn is_terminal(&self) -> bool {
        matches!(self, Value::Number(_) | Value::Error(_))
    }

    /// Try to get as integer
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as symbol text
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_sexpr(&self) -> Option<&SExpr> {
        match self {
            Value::SExpr(list) => Some(list),
            _ => None,
        }
    }

    /// Number of values in this tree, counting lists themselves
    pub fn node_count(&self) -> usize {
        match self {
            Value::SExpr(list) => 1 + list.iter().map(Value::node_count).sum::<usize>(),
            _ => 1,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        Value::Error(error)
    }
}

impl From<SExpr> for Value {
    fn from(list: SExpr) -> Self {
        Value::SExpr(list)
    }
}

/// Body of an s-expression: an owned, insertion-ordered list of values
///
/// Every element belongs to exactly one list. Appending moves the value in;
/// dropping the list drops its elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SExpr {
    items: Vec<Value>,
}

impl SExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` as the new last element
    pub fn append(mut self, value: Value) -> Self {
        self.items.push(value);
        self
    }
}

impl Deref for SExpr {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.items
    }
}

impl From<Vec<Value>> for SExpr {
    fn from(items: Vec<Value>) -> Self {
        SExpr { items }
    }
}

impl FromIterator<Value> for SExpr {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        SExpr {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SExpr {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a SExpr {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
