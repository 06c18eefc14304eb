//! One configured parse-and-evaluate pipeline
//!
//! A session holds settings only. Every call builds its own tree, folds it
//! and drops it, so nothing carries over from one line to the next.

use crate::ast::{Grammar, ParseNode};
use crate::config::Config;
use crate::diagnostics::{ParseError, SourceFile};
use crate::interp::{Interpreter, Value, read};
use crate::lexer;
use crate::parser::{self, DEFAULT_MAX_DEPTH};

#[derive(Debug, Clone)]
pub struct Session {
    grammar: Grammar,
    max_depth: usize,
    interp: Interpreter,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Grammar::default())
    }
}

impl Session {
    pub fn new(grammar: Grammar) -> Self {
        Session {
            grammar,
            max_depth: DEFAULT_MAX_DEPTH,
            interp: Interpreter::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Session {
            grammar: config.grammar,
            max_depth: config.max_depth,
            interp: Interpreter::with_overflow(config.overflow),
        }
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn set_grammar(&mut self, grammar: Grammar) {
        self.grammar = grammar;
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Lex and parse with the session's grammar
    pub fn parse(&self, source: &SourceFile) -> Result<ParseNode, ParseError> {
        let tokens = lexer::lex(source)?;
        parser::parse_with_depth(&tokens, source, self.grammar, self.max_depth)
    }

    /// Evaluate an already parsed tree
    ///
    /// Arithmetic trees are folded directly; s-expression trees are read
    /// into values first.
    pub fn eval_tree(&self, tree: &ParseNode) -> Value {
        match self.grammar {
            Grammar::Arith => self.interp.eval_tree(tree),
            Grammar::Sexpr => self.interp.eval(read(tree)),
        }
    }

    /// Parse and evaluate one input
    pub fn eval_source(&self, source: &SourceFile) -> Result<Value, ParseError> {
        let tree = self.parse(source)?;
        let value = self.eval_tree(&tree);
        tracing::debug!(input = %source.content, result = %value, "evaluated");
        Ok(value)
    }

    /// Parse and evaluate a line typed at the prompt
    pub fn eval_str(&self, input: &str) -> Result<Value, ParseError> {
        self.eval_source(&SourceFile::stdin(input))
    }
}
