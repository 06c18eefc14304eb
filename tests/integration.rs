//! Integration tests for the full pipeline and the `lips` binary

use std::path::PathBuf;
use std::process::{Command, Output};

use lips::interp::OverflowPolicy;
use lips::{Config, Grammar, Session, Value};

fn lips(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lips"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lips binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("lips-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("failed to write temp file");
    path
}

// ==================== Library pipeline ====================

#[test]
fn test_session_from_config_file() {
    let path = temp_file(
        "session.toml",
        "grammar = \"sexpr\"\noverflow = \"wrap\"\nmax_depth = 8\n",
    );
    let config = Config::load(&path).expect("config should load");
    std::fs::remove_file(&path).ok();

    assert_eq!(config.grammar, Grammar::Sexpr);
    assert_eq!(config.overflow, OverflowPolicy::Wrap);
    assert_eq!(config.prompt, "Lips> ");

    let session = Session::from_config(&config);
    assert_eq!(
        session.eval_str("(* 4611686018427387904 2)").unwrap(),
        Value::num(i64::MIN)
    );
}

#[test]
fn test_missing_config_file_is_an_error() {
    let missing = std::env::temp_dir().join("lips-definitely-missing.toml");
    assert!(Config::load(&missing).is_err());
}

#[test]
fn test_each_line_is_independent() {
    let session = Session::new(Grammar::Arith);
    let first = session.eval_str("/ 1 0").unwrap();
    let second = session.eval_str("+ 1 1").unwrap();
    assert!(first.is_error());
    assert_eq!(second, Value::num(2));
}

// ==================== Binary ====================

#[test]
fn test_cli_eval() {
    let output = lips(&["eval", "+ 1 (* 2 3)"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "7\n");
}

#[test]
fn test_cli_eval_error_value_is_success() {
    let output = lips(&["eval", "/ 5 0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Error: Division by zero.\n");
}

#[test]
fn test_cli_eval_sexpr_grammar() {
    let output = lips(&["--grammar", "sexpr", "eval", "(+ 1 2) "]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3\n");
}

#[test]
fn test_cli_emit_value() {
    let output = lips(&["-g", "sexpr", "eval", "--emit", "value", "( + 1  (- 2 3))"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "((+ 1 (- 2 3)))\n");
}

#[test]
fn test_cli_parse_failure() {
    let output = lips(&["eval", "(+ 1"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_cli_run_file() {
    let path = temp_file("run.lips", "+ 1 2\n\n* 3 (- 5 1)\n/ 1 0\n");
    let output = lips(&["run", path.to_str().unwrap()]);
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "3\n12\nError: Division by zero.\n");
}

#[test]
fn test_cli_run_reports_bad_lines() {
    let path = temp_file("bad.lips", "+ 1 2\n(+ 1\n");
    let output = lips(&["run", path.to_str().unwrap()]);
    std::fs::remove_file(&path).ok();

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "3\n");
}

#[test]
fn test_cli_overflow_flag() {
    let output = lips(&["--overflow", "wrap", "eval", "+ 9223372036854775807 1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-9223372036854775808\n");
}

#[test]
fn test_cli_info() {
    let output = lips(&["info"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("operator : '+' | '-' | '*' | '/' ;"));
}
