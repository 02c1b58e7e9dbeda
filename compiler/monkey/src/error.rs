//! Driver errors.

use std::io;

use monkey_object::EvalError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command line. The message is printed above the usage text.
    #[error("{0}")]
    Usage(String),

    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// One line per syntax error, already prefixed with `path:line:col`.
    #[error("{}", .messages.join("\n"))]
    Parse { messages: Vec<String> },

    /// A program evaluated to an error value.
    #[error("ERROR: {0}")]
    Runtime(EvalError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }

    pub(crate) fn read(path: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => CliError::NotFound {
                path: path.to_string(),
            },
            _ => CliError::Read {
                path: path.to_string(),
                source,
            },
        }
    }
}
