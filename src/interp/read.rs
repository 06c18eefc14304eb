//! Reading a parse tree into values

use crate::ast::{NodeKind, ParseNode};

use super::value::{EvalError, SExpr, Value};

/// Convert a parse tree node into a value
///
/// Never fails: a literal that does not fit in an `i64` becomes
/// `Error(InvalidNumber)`.
pub fn read(node: &ParseNode) -> Value {
    match node.kind {
        NodeKind::Number => read_number(&node.contents),
        NodeKind::Operator | NodeKind::Symbol => Value::Symbol(node.contents.clone()),
        NodeKind::Root | NodeKind::SExpr | NodeKind::Application => Value::SExpr(read_list(node)),
        // A syntax token read on its own keeps its text
        NodeKind::Paren | NodeKind::Anchor => Value::Symbol(node.contents.clone()),
    }
}

/// Parse integer literal text
pub fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Error(EvalError::InvalidNumber),
    }
}

fn read_list(node: &ParseNode) -> SExpr {
    node.children
        .iter()
        .filter(|c| !c.kind.is_syntax())
        .fold(SExpr::new(), |list, child| list.append(read(child)))
}
