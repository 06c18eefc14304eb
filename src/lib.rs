//! Lips: a minimal prefix-arithmetic interpreter
//!
//! Two grammars share one runtime:
//!
//! - **arith**: `+ 1 (* 2 3)`, every list an operator applied to operands
//! - **sexpr**: lists of numbers, symbols and lists, evaluated the same way
//!
//! # Architecture
//!
//! ```text
//! Source → Lexer → Parser → ParseNode → Reader → Value → Interpreter → Printer
//! ```
//!
//! Arithmetic trees may skip the reader and be folded directly.
//!
//! # Example
//!
//! ```
//! use lips::{Grammar, evaluate};
//!
//! let value = evaluate("+ 1 (* 2 3)", Grammar::Arith).unwrap();
//! assert_eq!(value.to_string(), "7");
//!
//! let value = evaluate("(/ 5 0)", Grammar::Sexpr).unwrap();
//! assert_eq!(value.to_string(), "Error: Division by zero.");
//! ```

pub mod ast;
pub mod common;
pub mod config;
pub mod diagnostics;
pub mod interp;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod session;

// Re-export diagnostics for convenience
pub use diagnostics::{ParseError, Reporter, SourceFile};

// Re-exports for convenience
pub use ast::{Grammar, NodeKind, ParseNode};
pub use config::Config;
pub use interp::{EvalError, Value};
pub use session::Session;

/// Interpreter version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a line into a tree
pub fn parse(source: &str, grammar: Grammar) -> Result<ParseNode, ParseError> {
    Session::new(grammar).parse(&SourceFile::stdin(source))
}

/// Parse a line with the s-expression grammar and read it into a value
pub fn read(source: &str) -> Result<Value, ParseError> {
    let tree = parse(source, Grammar::Sexpr)?;
    Ok(interp::read(&tree))
}

/// Parse and evaluate a line
pub fn evaluate(source: &str, grammar: Grammar) -> Result<Value, ParseError> {
    Session::new(grammar).eval_str(source)
}
