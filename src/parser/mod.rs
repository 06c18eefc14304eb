//! Parser for Lips input
//!
//! A recursive descent parser that builds a [`ParseNode`] tree from a token
//! stream, for either the arithmetic or the s-expression grammar.

use crate::ast::{Grammar, NodeKind, ParseNode};
use crate::common::Span;
use crate::diagnostics::{ParseError, SourceFile};
use crate::lexer::{Token, TokenKind};

/// Nesting limit used when the caller does not pick one
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse a token stream into a tree
pub fn parse(tokens: &[Token], source: &SourceFile, grammar: Grammar) -> Result<ParseNode, ParseError> {
    parse_with_depth(tokens, source, grammar, DEFAULT_MAX_DEPTH)
}

/// Parse a token stream, rejecting lists nested deeper than `max_depth`
pub fn parse_with_depth(
    tokens: &[Token],
    source: &SourceFile,
    grammar: Grammar,
    max_depth: usize,
) -> Result<ParseNode, ParseError> {
    let mut parser = Parser::new(tokens, source, grammar, max_depth);
    let root = parser.parse_program()?;
    tracing::trace!(nodes = root.node_count(), %grammar, "parsed input");
    Ok(root)
}

/// Parser state
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    source: &'a SourceFile,
    grammar: Grammar,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], source: &'a SourceFile, grammar: Grammar, max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            source,
            grammar,
            max_depth,
        }
    }

    fn peek(&self) -> TokenKind {
        self.tokens
            .get(self.pos)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    fn span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| t.span)
            .unwrap_or_else(|| Span::point(self.source.len()))
    }

    /// Consume the current token as a leaf node
    fn advance_leaf(&mut self, kind: NodeKind) -> ParseNode {
        let node = match self.tokens.get(self.pos) {
            Some(tok) => ParseNode::leaf(kind, tok.text.clone(), tok.span),
            None => ParseNode::leaf(kind, "", self.span()),
        };
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        node
    }

    fn error(&self, expected: &str) -> ParseError {
        let span = self.span();
        match self.peek() {
            TokenKind::Eof => ParseError::UnexpectedEof {
                expected: expected.to_string(),
                span: span.into(),
                src: self.source.to_named_source(),
            },
            found => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: match self.tokens.get(self.pos) {
                    Some(tok) => format!("`{}`", tok.text),
                    None => found.to_string(),
                },
                span: span.into(),
                src: self.source.to_named_source(),
            },
        }
    }

    fn expect_leaf(&mut self, kind: TokenKind, node: NodeKind, expected: &str) -> Result<ParseNode, ParseError> {
        if self.at(kind) {
            Ok(self.advance_leaf(node))
        } else {
            Err(self.error(expected))
        }
    }

    // ==================== PROGRAM ====================

    fn parse_program(&mut self) -> Result<ParseNode, ParseError> {
        let mut children = vec![ParseNode::leaf(NodeKind::Anchor, "", Span::point(0))];

        if self.grammar == Grammar::Arith {
            self.parse_operation(0, &mut children)?;
        }
        while !self.at(TokenKind::Eof) {
            children.push(self.parse_expr(0)?);
        }

        children.push(ParseNode::leaf(NodeKind::Anchor, "", self.span()));
        Ok(ParseNode::branch(
            NodeKind::Root,
            Span::new(0, self.source.len()),
            children,
        ))
    }

    // ==================== EXPRESSIONS ====================

    fn parse_expr(&mut self, depth: usize) -> Result<ParseNode, ParseError> {
        match (self.peek(), self.grammar) {
            (TokenKind::IntLit, _) => Ok(self.advance_leaf(NodeKind::Number)),
            (TokenKind::Symbol, Grammar::Sexpr) => Ok(self.advance_leaf(NodeKind::Symbol)),
            (TokenKind::LParen, _) => self.parse_list(depth + 1),
            (_, Grammar::Arith) => Err(self.error("number or `(`")),
            (_, Grammar::Sexpr) => Err(self.error("number, symbol or `(`")),
        }
    }

    /// `<operator> <expr>`, the head of an arithmetic application
    ///
    /// A number can never stand in operator position, so a negative literal
    /// there is split into `-` and its digits: `-3 1` parses as `- 3 1`.
    fn parse_operation(&mut self, depth: usize, children: &mut Vec<ParseNode>) -> Result<(), ParseError> {
        let tokens = self.tokens;
        match tokens.get(self.pos) {
            Some(tok) if tok.kind == TokenKind::IntLit && tok.text.starts_with('-') => {
                let split = tok.span.start + 1;
                children.push(ParseNode::leaf(
                    NodeKind::Operator,
                    "-",
                    Span::new(tok.span.start, split),
                ));
                children.push(ParseNode::leaf(
                    NodeKind::Number,
                    &tok.text[1..],
                    Span::new(split, tok.span.end),
                ));
                self.pos += 1;
            }
            _ => {
                children.push(self.expect_leaf(TokenKind::Symbol, NodeKind::Operator, "operator")?);
                children.push(self.parse_expr(depth)?);
            }
        }
        Ok(())
    }

    /// `'(' <operator> <expr>+ ')'` or `'(' <expr>* ')'`
    fn parse_list(&mut self, depth: usize) -> Result<ParseNode, ParseError> {
        let start = self.span();
        if depth > self.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.max_depth,
                span: start.into(),
                src: self.source.to_named_source(),
            });
        }

        let mut children = vec![self.expect_leaf(TokenKind::LParen, NodeKind::Paren, "`(`")?];
        let kind = match self.grammar {
            Grammar::Arith => {
                self.parse_operation(depth, &mut children)?;
                NodeKind::Application
            }
            Grammar::Sexpr => NodeKind::SExpr,
        };

        while !self.at(TokenKind::RParen) {
            if self.at(TokenKind::Eof) {
                return Err(self.error("`)`"));
            }
            children.push(self.parse_expr(depth)?);
        }
        let close = self.advance_leaf(NodeKind::Paren);
        let span = start.merge(close.span);
        children.push(close);

        Ok(ParseNode::branch(kind, span, children))
    }
}
