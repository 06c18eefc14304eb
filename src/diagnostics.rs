//! Diagnostic reporting with source locations
//!
//! Parse failures are reported through miette with the offending span
//! labelled. They never become runtime values; evaluation only starts once
//! a line has parsed cleanly.

use crate::common::Span;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::sync::Arc;
use thiserror::Error;

/// Source text for error reporting
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content: Arc<str>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Arc::from(content.into()),
        }
    }

    /// A line typed at the prompt
    pub fn stdin(content: impl Into<String>) -> Self {
        Self::new("<stdin>", content)
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn to_named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name.clone(), self.content.to_string())
    }
}

/// Convert our Span to miette's SourceSpan
impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Lexing and parsing failures
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ParseError {
    #[error("Unexpected character `{found}`")]
    #[diagnostic(
        code(lex::unexpected_char),
        help("expressions are built from integers, operators and parentheses")
    )]
    UnexpectedChar {
        found: String,
        #[label("not part of the grammar")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected token: expected {expected}, found {found}")]
    #[diagnostic(code(parse::unexpected_token))]
    UnexpectedToken {
        expected: String,
        found: String,
        #[label("unexpected token here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected end of input: expected {expected}")]
    #[diagnostic(code(parse::unexpected_eof))]
    UnexpectedEof {
        expected: String,
        #[label("input ends here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Expression nested deeper than {limit} levels")]
    #[diagnostic(
        code(parse::too_deep),
        help("raise `max_depth` in the configuration to accept deeper input")
    )]
    TooDeep {
        limit: usize,
        #[label("nesting limit exceeded here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },
}

impl ParseError {
    /// Short machine-readable name of the failure
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::UnexpectedChar { .. } => "unexpected_char",
            ParseError::UnexpectedToken { .. } => "unexpected_token",
            ParseError::UnexpectedEof { .. } => "unexpected_eof",
            ParseError::TooDeep { .. } => "too_deep",
        }
    }
}

/// Collects parse failures while running several inputs
#[derive(Default)]
pub struct Reporter {
    errors: Vec<ParseError>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Print all diagnostics
    pub fn emit_all(&self) {
        for error in &self.errors {
            eprintln!("{:?}", miette::Report::new(error.clone()));
        }
    }
}
