//! Interactive read-eval-print loop

use miette::{IntoDiagnostic, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ast::{Grammar, ParseNode};
use crate::config::Config;
use crate::diagnostics::ParseError;
use crate::interp::Value;
use crate::session::Session;

const HELP: &str = "\
Commands:
  :help, :h               Show this help
  :quit, :q               Exit the REPL
  :grammar [arith|sexpr]  Show or switch the grammar
  :tree <input>           Show the parse tree of an input

Anything else is parsed and evaluated, e.g. `+ 1 (* 2 3)`.";

/// What the loop should do with one line of input
#[derive(Debug)]
pub enum Outcome {
    /// Print the evaluated value
    Value(Value),
    /// Print a parse tree
    Tree(ParseNode),
    /// Report a parse failure on stderr
    Failed(ParseError),
    /// Print informational text
    Message(String),
    /// Blank line
    Empty,
    Quit,
}

/// Interpret one line of input
pub fn handle_line(session: &mut Session, line: &str) -> Outcome {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Outcome::Empty;
    }

    match trimmed {
        ":quit" | ":q" => Outcome::Quit,
        ":help" | ":h" => Outcome::Message(HELP.to_string()),
        ":grammar" => Outcome::Message(format!("grammar: {}", session.grammar())),
        _ if trimmed.starts_with(":grammar ") => {
            match trimmed[":grammar ".len()..].trim().parse::<Grammar>() {
                Ok(grammar) => {
                    session.set_grammar(grammar);
                    Outcome::Message(format!("grammar: {}", grammar))
                }
                Err(e) => Outcome::Message(e),
            }
        }
        _ if trimmed.starts_with(":tree ") => {
            let input = &trimmed[":tree ".len()..];
            match session.parse(&crate::SourceFile::stdin(input)) {
                Ok(tree) => Outcome::Tree(tree),
                Err(e) => Outcome::Failed(e),
            }
        }
        _ if trimmed.starts_with(':') => {
            Outcome::Message(format!("Unknown command `{}`; try :help", trimmed))
        }
        _ => match session.eval_str(trimmed) {
            Ok(value) => Outcome::Value(value),
            Err(e) => Outcome::Failed(e),
        },
    }
}

/// Run the loop until end of input or `:quit`
pub fn run(session: &mut Session, config: &Config) -> Result<()> {
    println!("Lips v{}", crate::VERSION);
    println!("Type :help for help, :quit or Ctrl-D to exit");
    println!();

    let mut editor = DefaultEditor::new().into_diagnostic()?;
    if let Some(path) = &config.history_file {
        if editor.load_history(path).is_err() {
            tracing::debug!("No history loaded from {:?}", path);
        }
    }
    tracing::info!(grammar = %session.grammar(), "REPL started");

    loop {
        let line = match editor.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).into_diagnostic(),
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str()).into_diagnostic()?;
        }

        match handle_line(session, &line) {
            Outcome::Value(value) => println!("{}", value),
            Outcome::Tree(tree) => print!("{}", tree),
            Outcome::Failed(e) => eprintln!("{:?}", miette::Report::new(e)),
            Outcome::Message(text) => println!("{}", text),
            Outcome::Empty => {}
            Outcome::Quit => break,
        }
    }

    if let Some(path) = &config.history_file {
        if let Err(e) = editor.save_history(path) {
            tracing::warn!("Failed to save history to {:?}: {}", path, e);
        }
    }
    tracing::info!("REPL exited");
    Ok(())
}
