//! Monkey interpreter CLI.

use std::io::{self, Write};

use monkey::cli::USAGE;
use monkey::commands::repl::start_repl;
use monkey::commands::{lex_file, parse_file, run_file};
use monkey::{parse_args, CliError, CliOptions, Command, Session};

fn main() {
    monkey::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(err.exit_code());
        }
    };

    if let Err(err) = dispatch(&options) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn dispatch(options: &CliOptions) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &options.command {
        Command::Help => {
            writeln!(out, "Monkey interpreter")?;
            writeln!(out)?;
            write!(out, "{USAGE}")?;
            Ok(())
        }
        Command::Version => {
            writeln!(out, "monkey {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        Command::Repl(mode) => {
            writeln!(
                out,
                "Monkey {} ({} mode). Press Ctrl-D to exit.",
                env!("CARGO_PKG_VERSION"),
                mode.as_str()
            )?;
            let mut session = Session::new(options.eval_mode());
            start_repl(*mode, &mut session, io::stdin().lock(), &mut out)
        }
        Command::Lex(path) => lex_file(path, &mut out),
        Command::Parse(path) => parse_file(path, &mut out),
        Command::Run(path) => {
            let mut session = Session::new(options.eval_mode());
            run_file(path, &mut session, &mut out)
        }
    }
}
