//! monkey-driver - Command-line entry point: `monkey repl` / `monkey run FILE`
//!
//! Thin by design: this crate owns argument parsing, file I/O, and tracing
//! setup, and nothing else. The three pipeline phases it drives — lex,
//! parse, eval — all live in library crates; `monkey-driver` is only allowed
//! to depend on `clap`/`anyhow`/`tracing-subscriber` so that the libraries
//! stay embeddable without dragging a CLI stack along.

pub mod repl;

use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::{Parser as ClapParser, Subcommand};
use monkey_eval::eval_program;
use monkey_lexer::Lexer;
use monkey_object::{Environment, Value};
use monkey_parser::Parser;
use thiserror::Error;
use tracing::debug;

/// Errors that originate at the driver's boundary with the filesystem and
/// the terminal, as opposed to the language core's own parse/runtime
/// errors (which stay `Vec<String>` / `Value::Error` respectively).
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("source file is not valid UTF-8: {0}")]
    NotUtf8(PathBuf),
}

#[derive(Debug, ClapParser)]
#[command(name = "monkey", about = "The Monkey programming language")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Raise the log filter from `warn` to `debug`, emitting one event per
    /// pipeline phase (lex, parse, eval).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive read-eval-print loop (the default).
    Repl,
    /// Lex, parse, and evaluate a single source file.
    Run {
        /// Path to a `.monkey` source file.
        file: PathBuf,
    },
}

/// Configure the global `tracing` subscriber once, at process startup.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Dispatch `cli` to the matching subcommand. `Repl` is also the default
/// when no subcommand is given.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            repl::run(stdin.lock(), stdout.lock())?;
        }
        Command::Run { file } => {
            run_file(&file)?;
        }
    }
    Ok(())
}

fn run_file(path: &Path) -> Result<(), DriverError> {
    let source = std::fs::read(path).map_err(|_| DriverError::SourceNotFound(path.to_path_buf()))?;
    let source = String::from_utf8(source).map_err(|_| DriverError::NotUtf8(path.to_path_buf()))?;

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse();
    debug!(tokens_source_len = source.len(), "lex + parse done");

    if !parser.errors().is_empty() {
        for err in parser.errors() {
            eprintln!("\t{err}");
        }
        std::process::exit(1);
    }

    let env = Environment::new();
    let value: Rc<Value> = eval_program(&program, &env);
    debug!(result_type = value.type_tag(), "eval done");
    println!("{value}");

    if value.is_error() {
        std::process::exit(1);
    }
    Ok(())
}
