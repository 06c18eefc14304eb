//! Lexer for Lips source text
//!
//! Turns a line of input into a token stream terminated by `Eof`.

mod tokens;

pub use tokens::{Token, TokenKind};

use crate::common::Span;
use crate::diagnostics::{ParseError, SourceFile};
use logos::Logos;

/// Lex source text into tokens
pub fn lex(source: &SourceFile) -> Result<Vec<Token>, ParseError> {
    let text: &str = &source.content;
    let mut tokens = Vec::new();

    for (kind, range) in TokenKind::lexer(text).spanned() {
        let span = Span::from(range);
        let slice = &text[span.start..span.end];
        match kind {
            Ok(kind) => tokens.push(Token {
                kind,
                span,
                text: slice.to_string(),
            }),
            Err(()) => {
                return Err(ParseError::UnexpectedChar {
                    found: slice.to_string(),
                    span: span.into(),
                    src: source.to_named_source(),
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::point(text.len()),
        text: String::new(),
    });

    tracing::trace!(count = tokens.len(), "lexed input");
    Ok(tokens)
}

/// Lex a line typed at the prompt
pub fn lex_str(source: &str) -> Result<Vec<Token>, ParseError> {
    lex(&SourceFile::stdin(source))
}
