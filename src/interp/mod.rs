//! Tree-walking interpreter
//!
//! Reads parse trees into values, folds them into results and prints them.

pub mod eval;
pub mod print;
pub mod read;
pub mod value;

pub use eval::{Interpreter, OverflowPolicy, eval, eval_tree};
pub use print::{render, render_line};
pub use read::{read, read_number};
pub use value::{EvalError, SExpr, Value};
