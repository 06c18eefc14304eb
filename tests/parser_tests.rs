//! Parser tests

use lips::ast::{Grammar, NodeKind, ParseNode};
use lips::{ParseError, parse};
use pretty_assertions::assert_eq;

fn parse_ok(source: &str, grammar: Grammar) -> ParseNode {
    match parse(source, grammar) {
        Ok(tree) => tree,
        Err(e) => panic!("Parse failed for {:?}: {:?}", source, e),
    }
}

fn parse_err(source: &str, grammar: Grammar) -> ParseError {
    match parse(source, grammar) {
        Ok(tree) => panic!("Expected parse failure for {:?}, got\n{}", source, tree),
        Err(e) => e,
    }
}

// ==================== Arithmetic grammar ====================

#[test]
fn test_parse_single_operation() {
    let tree = parse_ok("+ 1 2", Grammar::Arith);
    assert_eq!(tree.kind, NodeKind::Root);
    assert_eq!(tree.children.len(), 5);
    assert_eq!(tree.children[1].kind, NodeKind::Operator);
    assert_eq!(tree.children[1].contents, "+");
    assert_eq!(tree.exprs().count(), 2);
}

#[test]
fn test_parse_nested_application() {
    let tree = parse_ok("* (+ 1 2) (- 10 4)", Grammar::Arith);
    let apps: Vec<&ParseNode> = tree.exprs().collect();
    assert_eq!(apps.len(), 2);
    assert!(apps.iter().all(|n| n.kind == NodeKind::Application));
    assert_eq!(apps[1].children[1].contents, "-");
    assert_eq!(apps[1].children[3].contents, "4");
}

#[test]
fn test_parse_outline() {
    let tree = parse_ok("+ 1 (* 2 3)", Grammar::Arith);
    insta::assert_snapshot!(tree.to_string().trim_end(), @r"
    >
      regex ''
      operator '+'
      number '1'
      expr
        char '('
        operator '*'
        number '2'
        number '3'
        char ')'
      regex ''
    ");
}

#[test]
fn test_parse_requires_leading_operator() {
    let err = parse_err("1 2", Grammar::Arith);
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn test_parse_rejects_empty_list() {
    parse_err("+ ()", Grammar::Arith);
}

#[test]
fn test_parse_rejects_application_without_operands() {
    parse_err("+ 1 (-)", Grammar::Arith);
}

#[test]
fn test_parse_rejects_empty_input() {
    let err = parse_err("", Grammar::Arith);
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}

#[test]
fn test_parse_unknown_operator_is_accepted() {
    let tree = parse_ok("% 1 2", Grammar::Arith);
    assert_eq!(tree.children[1].contents, "%");
}

#[test]
fn test_parse_negative_literal_as_operator() {
    let tree = parse_ok("+ 1 (-3 1)", Grammar::Arith);
    insta::assert_snapshot!(tree.to_string().trim_end(), @r"
    >
      regex ''
      operator '+'
      number '1'
      expr
        char '('
        operator '-'
        number '3'
        number '1'
        char ')'
      regex ''
    ");

    let tree = parse_ok("-3 1", Grammar::Arith);
    assert_eq!(tree.children[1].kind, NodeKind::Operator);
    assert_eq!(tree.children[1].contents, "-");
    assert_eq!(tree.children[2].contents, "3");
}

#[test]
fn test_parse_negative_literal_as_operand() {
    let tree = parse_ok("+ -3 1", Grammar::Arith);
    assert_eq!(tree.children[2].kind, NodeKind::Number);
    assert_eq!(tree.children[2].contents, "-3");

    let tree = parse_ok("(-3 1)", Grammar::Sexpr);
    assert_eq!(tree.children[1].children[1].kind, NodeKind::Number);
    assert_eq!(tree.children[1].children[1].contents, "-3");
}

// ==================== S-expression grammar ====================

#[test]
fn test_parse_sexpr_program() {
    let tree = parse_ok("+ 1 (2 3) ()", Grammar::Sexpr);
    let kinds: Vec<NodeKind> = tree.exprs().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Symbol,
            NodeKind::Number,
            NodeKind::SExpr,
            NodeKind::SExpr,
        ]
    );
}

#[test]
fn test_parse_sexpr_outline() {
    let tree = parse_ok("(- (1))", Grammar::Sexpr);
    insta::assert_snapshot!(tree.to_string().trim_end(), @r"
    >
      regex ''
      sexpr
        char '('
        symbol '-'
        sexpr
          char '('
          number '1'
          char ')'
        char ')'
      regex ''
    ");
}

#[test]
fn test_parse_sexpr_unbalanced() {
    let err = parse_err("((+ 1 2)", Grammar::Sexpr);
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
    let err = parse_err("(+ 1 2))", Grammar::Sexpr);
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn test_parse_deep_input_is_rejected() {
    let depth = lips::parser::DEFAULT_MAX_DEPTH + 1;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let err = parse_err(&source, Grammar::Sexpr);
    assert!(matches!(err, ParseError::TooDeep { .. }));
}

#[test]
fn test_parse_tree_json() {
    let tree = parse_ok("+ 1 2", Grammar::Arith);
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["kind"], "root");
    assert_eq!(json["children"][1]["kind"], "operator");
    assert_eq!(json["children"][2]["contents"], "1");
}
