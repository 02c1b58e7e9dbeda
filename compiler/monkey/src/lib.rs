//! The Monkey interpreter driver.
//!
//! Ties the pipeline together for the REPL and the `monkey` binary:
//!
//! - [`tokenize`] lexes source text for inspection.
//! - [`run`] parses and evaluates source text against an environment,
//!   refusing to evaluate when parsing failed.
//! - [`Session`] keeps one environment alive across REPL lines.
//! - [`commands`] implements the CLI commands.

pub mod cli;
pub mod commands;
mod error;
mod session;

pub use cli::{parse_args, CliOptions, Command};
pub use commands::repl::ReplMode;
pub use error::CliError;
pub use session::Session;

pub use monkey_lexer::tokenize;

use monkey_object::{Environment, Object};
use monkey_parse::ParseError;
use std::sync::Once;

/// Parse `source` and evaluate it in `env`.
///
/// Returns the syntax errors instead of a value when parsing failed; a
/// program with errors is never evaluated.
pub fn run(source: &str, env: &Environment) -> Result<Object, Vec<ParseError>> {
    let output = monkey_parse::parse(source);
    if output.has_errors() {
        return Err(output.errors);
    }
    Ok(monkey_eval::eval(&output.program, env))
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=monkey_parse=trace`
/// or `RUST_LOG=monkey_eval=debug`. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
