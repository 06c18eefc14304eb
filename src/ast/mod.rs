//! Parse tree for Lips input
//!
//! The parser produces an ordered, labelled tree: every node records which
//! grammar rule built it, the literal text it matched, and its children in
//! source order. Syntax tokens (parentheses and the `^`/`$` anchors around a
//! program) are kept as leaves so the tree mirrors the input exactly.

use crate::common::Span;
use serde::{Deserialize, Serialize};

/// Which grammar a line is parsed with
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// `program := ^ <operator> <expr>+ $`, every list an operator application
    #[default]
    #[serde(alias = "arithmetic")]
    #[value(name = "arith", alias = "arithmetic")]
    Arith,
    /// `program := ^ <expr>* $`, lists of numbers, symbols and lists
    #[value(name = "sexpr")]
    Sexpr,
}

impl Grammar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grammar::Arith => "arith",
            Grammar::Sexpr => "sexpr",
        }
    }

    /// Grammar rules in the notation shown by `lips info`
    pub fn rules(&self) -> &'static [&'static str] {
        match self {
            Grammar::Arith => &[
                "number   : /-?[0-9]+/ ;",
                "operator : '+' | '-' | '*' | '/' ;",
                "expr     : <number> | '(' <operator> <expr>+ ')' ;",
                "program  : /^/ <operator> <expr>+ /$/ ;",
            ],
            Grammar::Sexpr => &[
                "number : /-?[0-9]+/ ;",
                "symbol : '+' | '-' | '*' | '/' ;",
                "sexpr  : '(' <expr>* ')' ;",
                "expr   : <number> | <symbol> | <sexpr> ;",
                "program: /^/ <expr>* /$/ ;",
            ],
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arith" | "arithmetic" => Ok(Grammar::Arith),
            "sexpr" => Ok(Grammar::Sexpr),
            other => Err(format!("unknown grammar `{other}` (expected arith or sexpr)")),
        }
    }
}

/// The grammar rule a node came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Whole program, bracketed by two anchors
    Root,
    /// Integer literal
    Number,
    /// Operator in head position of an arithmetic application
    Operator,
    /// Symbol inside an s-expression
    Symbol,
    /// `'(' <expr>* ')'`
    #[serde(rename = "sexpr")]
    SExpr,
    /// `'(' <operator> <expr>+ ')'`
    Application,
    /// Literal `(` or `)`
    Paren,
    /// Start (`^`) or end (`$`) of input
    Anchor,
}

impl NodeKind {
    /// Nodes that stand for a value, as opposed to syntax tokens
    pub fn is_expr(&self) -> bool {
        match self {
            NodeKind::Number | NodeKind::Symbol | NodeKind::SExpr | NodeKind::Application => true,
            NodeKind::Root | NodeKind::Operator | NodeKind::Paren | NodeKind::Anchor => false,
        }
    }

    /// Tokens dropped when a tree is read into values
    pub fn is_syntax(&self) -> bool {
        matches!(self, NodeKind::Paren | NodeKind::Anchor)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Root => ">",
            NodeKind::Number => "number",
            NodeKind::Operator => "operator",
            NodeKind::Symbol => "symbol",
            NodeKind::SExpr => "sexpr",
            NodeKind::Application => "expr",
            NodeKind::Paren => "char",
            NodeKind::Anchor => "regex",
        }
    }
}

/// One node of the parse tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseNode {
    pub kind: NodeKind,
    pub contents: String,
    pub span: Span,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn leaf(kind: NodeKind, contents: impl Into<String>, span: Span) -> Self {
        ParseNode {
            kind,
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    pub fn branch(kind: NodeKind, span: Span, children: Vec<ParseNode>) -> Self {
        ParseNode {
            kind,
            contents: String::new(),
            span,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children that stand for values, in order
    pub fn exprs(&self) -> impl Iterator<Item = &ParseNode> {
        self.children.iter().filter(|c| c.kind.is_expr())
    }

    /// Nesting depth; a leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(|c| c.depth()).max().unwrap_or(0)
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    fn write_outline(&self, f: &mut std::fmt::Formatter<'_>, indent: usize) -> std::fmt::Result {
        write!(f, "{:width$}{}", "", self.kind.tag(), width = indent * 2)?;
        if self.is_leaf() {
            write!(f, " '{}'", self.contents)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_outline(f, indent + 1)?;
        }
        Ok(())
    }
}

/// Indented outline, one node per line
impl std::fmt::Display for ParseNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_outline(f, 0)
    }
}
