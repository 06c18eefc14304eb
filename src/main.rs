//! Lips CLI
//!
//! Main entry point for the `lips` command.

use clap::{Parser, Subcommand};
use lips::{Config, Grammar, Reporter, Session, SourceFile};
use lips::interp::OverflowPolicy;
use miette::Result;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "lips")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A minimal prefix-arithmetic and s-expression interpreter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Grammar to parse input with (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    grammar: Option<Grammar>,

    /// Behaviour on integer overflow (overrides the config file)
    #[arg(long, global = true, value_enum)]
    overflow: Option<OverflowPolicy>,

    /// Configuration file (defaults to ./lips.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive REPL (the default)
    Repl,

    /// Evaluate one expression and print the result
    Eval {
        /// Expression text
        #[arg(value_name = "EXPR")]
        expr: String,

        /// Print an intermediate form instead of the result
        #[arg(long, value_enum)]
        emit: Option<EmitType>,
    },

    /// Evaluate every non-empty line of a file
    Run {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show information about the interpreter
    Info,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum EmitType {
    /// Parse tree outline
    Tree,
    /// Parse tree (JSON)
    Json,
    /// Value read from the tree, before evaluation
    Value,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(grammar) = cli.grammar {
        config.grammar = grammar;
    }
    if let Some(overflow) = cli.overflow {
        config.overflow = overflow;
    }
    let mut session = Session::from_config(&config);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => lips::repl::run(&mut session, &config),
        Commands::Eval { expr, emit } => eval(&session, &expr, emit),
        Commands::Run { input } => run(&session, &input),
        Commands::Info => info(&config),
    }
}

fn eval(session: &Session, expr: &str, emit: Option<EmitType>) -> Result<()> {
    let source = SourceFile::new("<arg>", expr);

    let Some(emit_type) = emit else {
        let value = session.eval_source(&source)?;
        println!("{}", value);
        return Ok(());
    };

    let tree = session.parse(&source)?;
    match emit_type {
        EmitType::Tree => print!("{}", tree),
        EmitType::Json => {
            let json = serde_json::to_string_pretty(&tree)
                .map_err(|e| miette::miette!("Failed to serialize parse tree: {}", e))?;
            println!("{}", json);
        }
        EmitType::Value => println!("{}", lips::interp::read(&tree)),
    }
    Ok(())
}

fn run(session: &Session, input: &Path) -> Result<()> {
    tracing::info!("Running {:?} with grammar {}", input, session.grammar());

    let text = std::fs::read_to_string(input)
        .map_err(|e| miette::miette!("Failed to read input file: {}", e))?;

    let mut reporter = Reporter::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let source = SourceFile::new(format!("{}:{}", input.display(), index + 1), line);
        match session.eval_source(&source) {
            Ok(value) => println!("{}", value),
            Err(e) => reporter.error(e),
        }
    }

    if reporter.has_errors() {
        reporter.emit_all();
        return Err(miette::miette!(
            "{} line(s) of {} failed to parse",
            reporter.error_count(),
            input.display()
        ));
    }
    Ok(())
}

fn info(config: &Config) -> Result<()> {
    println!("Lips");
    println!("Version: {}", lips::VERSION);
    println!();
    println!("Grammar: {}", config.grammar);
    for rule in config.grammar.rules() {
        println!("  {}", rule);
    }
    println!();
    println!("Overflow: {:?}", config.overflow);
    println!("Max depth: {}", config.max_depth);

    Ok(())
}
