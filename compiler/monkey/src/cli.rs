//! Command-line parsing.
//!
//! Arguments are matched by hand: a command word, at most one file path,
//! and `--flag=value` options anywhere on the line.

use monkey_eval::EvalMode;

use crate::commands::repl::ReplMode;
use crate::CliError;

/// What the binary should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl(ReplMode),
    Lex(String),
    Parse(String),
    Run(String),
    Help,
    Version,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub command: Command,
    /// Call-depth limit for evaluation.
    pub max_depth: usize,
}

impl CliOptions {
    pub fn eval_mode(&self) -> EvalMode {
        EvalMode::Bounded {
            max_depth: self.max_depth,
        }
    }
}

pub const USAGE: &str = "\
Usage: monkey [command] [options]

Commands:
  repl                 Start the interactive prompt (default)
  run <file>           Evaluate a file and print its result
  parse <file>         Print the parsed program
  lex <file>           Print the token stream
  help                 Show this help message
  version              Show version information

Options:
  --mode=<mode>        REPL mode: eval (default), parse, lex
  --max-depth=<n>      Maximum function call depth (default: 10000)

Examples:
  monkey
  monkey --mode=parse
  monkey run fib.monkey
  monkey fib.monkey --max-depth=500
";

/// Parse arguments, excluding the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<CliOptions, CliError> {
    let mut max_depth = EvalMode::DEFAULT_MAX_DEPTH;
    let mut repl_mode = ReplMode::Eval;
    let mut positional: Vec<&str> = Vec::new();

    for arg in args {
        let arg: &str = arg.as_ref();
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            max_depth = parse_depth(value)?;
        } else if let Some(value) = arg.strip_prefix("--mode=") {
            repl_mode = ReplMode::from_name(value).ok_or_else(|| {
                CliError::Usage(format!(
                    "unknown REPL mode '{value}' (expected eval, parse or lex)"
                ))
            })?;
        } else if matches!(arg, "--help" | "-h") {
            return Ok(CliOptions {
                command: Command::Help,
                max_depth,
            });
        } else if matches!(arg, "--version" | "-V") {
            return Ok(CliOptions {
                command: Command::Version,
                max_depth,
            });
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option: {arg}")));
        } else {
            positional.push(arg);
        }
    }

    let command = match positional.as_slice() {
        [] | ["repl"] => Command::Repl(repl_mode),
        ["help"] => Command::Help,
        ["version"] => Command::Version,
        ["lex", path] => Command::Lex((*path).to_string()),
        ["parse", path] => Command::Parse((*path).to_string()),
        ["run", path] => Command::Run((*path).to_string()),
        [command @ ("lex" | "parse" | "run")] => {
            return Err(CliError::Usage(format!(
                "missing file path\nUsage: monkey {command} <file>"
            )));
        }
        [path] if is_source_path(path) => Command::Run((*path).to_string()),
        [command] => return Err(CliError::Usage(format!("unknown command: {command}"))),
        [_, extra] | [_, _, extra, ..] => {
            return Err(CliError::Usage(format!("unexpected argument: {extra}")));
        }
    };

    Ok(CliOptions { command, max_depth })
}

fn parse_depth(value: &str) -> Result<usize, CliError> {
    match value.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(CliError::Usage(format!(
            "invalid --max-depth '{value}' (expected a positive integer)"
        ))),
    }
}

/// A bare argument naming a Monkey source file runs it.
fn is_source_path(arg: &str) -> bool {
    std::path::Path::new(arg)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("monkey") || ext.eq_ignore_ascii_case("mk"))
}
