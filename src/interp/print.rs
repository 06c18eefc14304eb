//! Rendering values as text

use std::fmt;

use super::value::{SExpr, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(e) => write!(f, "Error: {}", e),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::SExpr(list) => write!(f, "{}", list),
        }
    }
}

impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

/// Render a value
pub fn render(value: &Value) -> String {
    value.to_string()
}

/// Render a value followed by a newline
pub fn render_line(value: &Value) -> String {
    format!("{}\n", value)
}
