//! Interactive prompt.

use std::io::{BufRead, Write};

use monkey_ir::TokenKind;
use monkey_lexer::Lexer;
use monkey_parse::ParseError;

use crate::{CliError, Session};

pub const PROMPT: &str = ">> ";

/// What the prompt does with each line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReplMode {
    /// Evaluate and print the value.
    #[default]
    Eval,
    /// Print the parsed program in canonical form.
    Parse,
    /// Print one token per line.
    Lex,
}

impl ReplMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "eval" => Some(ReplMode::Eval),
            "parse" => Some(ReplMode::Parse),
            "lex" => Some(ReplMode::Lex),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReplMode::Eval => "eval",
            ReplMode::Parse => "parse",
            ReplMode::Lex => "lex",
        }
    }
}

/// Read lines from `input` until end of input, writing results to `output`.
///
/// In [`ReplMode::Eval`] every line is evaluated in `session`, so bindings
/// carry over. Lines with syntax errors print the error banner and are
/// otherwise ignored.
pub fn start_repl(
    mode: ReplMode,
    session: &mut Session,
    mut input: impl BufRead,
    output: &mut impl Write,
) -> Result<(), CliError> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match mode {
            ReplMode::Eval => match session.eval(&line) {
                Ok(value) => writeln!(output, "{value}")?,
                Err(errors) => print_parser_errors(output, &errors)?,
            },
            ReplMode::Parse => {
                let parsed = monkey_parse::parse(&line);
                if parsed.has_errors() {
                    print_parser_errors(output, &parsed.errors)?;
                } else {
                    writeln!(output, "{}", parsed.program)?;
                }
            }
            ReplMode::Lex => {
                for token in Lexer::new(&line).take_while(|token| !token.is(TokenKind::Eof)) {
                    writeln!(output, "{token}")?;
                }
            }
        }
    }
}

fn print_parser_errors(output: &mut impl Write, errors: &[ParseError]) -> Result<(), CliError> {
    writeln!(output, "Woops!  We ran into some monkey business here!")?;
    writeln!(output, " parser errors:")?;
    for err in errors {
        writeln!(output, "\t{err}")?;
    }
    Ok(())
}
