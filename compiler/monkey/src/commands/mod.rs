//! Command handlers for the `monkey` binary.
//!
//! Handlers write their normal output to the supplied writer and report
//! failures as [`CliError`]; `main` decides what reaches stderr and the exit
//! status. Shared helpers like [`read_file`] live here in the module root.

pub mod repl;

use std::io::Write;

use monkey_object::Object;
use monkey_parse::ParseError;

use crate::{CliError, Session};

/// Read a source file.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|err| CliError::read(path, err))
}

/// Print every token of a file, EOF included, with its position.
pub fn lex_file(path: &str, out: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    for token in crate::tokenize(&source) {
        let (line, col) = token.span.line_col(&source);
        writeln!(out, "{line}:{col}\t{token}")?;
    }
    Ok(())
}

/// Print each top-level statement of a file in canonical form.
pub fn parse_file(path: &str, out: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    let output = monkey_parse::parse(&source);
    if output.has_errors() {
        return Err(parse_failure(path, &source, &output.errors));
    }
    for stmt in &output.program.statements {
        writeln!(out, "{stmt}")?;
    }
    Ok(())
}

/// Evaluate a file in `session` and print the resulting value.
///
/// A program that evaluates to an error value fails with
/// [`CliError::Runtime`].
pub fn run_file(path: &str, session: &mut Session, out: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    match session.eval(&source) {
        Ok(Object::Error(err)) => Err(CliError::Runtime(err)),
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(())
        }
        Err(errors) => Err(parse_failure(path, &source, &errors)),
    }
}

fn parse_failure(path: &str, source: &str, errors: &[ParseError]) -> CliError {
    tracing::debug!(path, count = errors.len(), "parse failed");
    CliError::Parse {
        messages: errors
            .iter()
            .map(|err| format!("{path}:{}", err.with_location(source)))
            .collect(),
    }
}
