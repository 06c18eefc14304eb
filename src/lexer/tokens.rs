//! Token definitions for the Lips lexer

use crate::common::Span;
use logos::Logos;
use serde::{Deserialize, Serialize};

/// A token with its kind, span, and text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

/// Token kinds recognized by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos, Serialize, Deserialize)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Literals
    #[regex(r"-?[0-9]+", priority = 3)]
    IntLit,

    // Operators and identifiers. Any run of these characters lexes as a
    // symbol; whether it names a known operator is decided at evaluation.
    #[regex(r"[a-zA-Z_+\-*/%^!<>=&|?]+", priority = 2)]
    Symbol,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Special
    Eof,
}

impl TokenKind {
    /// Human-readable name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::IntLit => "number",
            TokenKind::Symbol => "symbol",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Eof => "<eof>",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
