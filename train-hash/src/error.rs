//! Run-level error types.
//!
//! Every variant is fatal: the run stops and `main` turns the error into a
//! process exit code with [`AppError::exit_code`].

use std::io;
use std::path::PathBuf;

use crate::domain::ParseError;

/// Errors that abort a benchmark run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No schedule file was given on the command line
    #[error("No parametrs")]
    MissingArgument,

    /// The schedule file could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an opened schedule failed part way
    #[error("read error: {0}")]
    Read(#[from] io::Error),

    /// A schedule line was malformed (1-based line number)
    #[error("line {line}: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// The schedule held no records before its first blank line
    #[error("schedule contains no records")]
    EmptyDataset,
}

impl AppError {
    /// Process exit status for this error.
    ///
    /// A missing argument keeps the historical status 1; every other fatal
    /// error exits with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::MissingArgument => 1,
            _ => 2,
        }
    }
}
