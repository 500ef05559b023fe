use std::io;

use lgc_check::SchemaError;
use lgc_diagnostic::{Diagnostic, ErrorCode};
use lgc_ir::DecodeError;
use thiserror::Error;

/// Failures that end a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl CliError {
    /// Error code for failures that have an `explain` entry.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            CliError::Decode(_) => Some(ErrorCode::E0001),
            CliError::Schema(_) => Some(ErrorCode::E0002),
            CliError::Usage(_) | CliError::Read { .. } | CliError::Write(_) => None,
        }
    }

    /// Render as a diagnostic, when the failure has a code.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        let code = self.code()?;
        let diagnostic = Diagnostic::error(code).with_message(self.to_string());
        Some(match self {
            CliError::Schema(SchemaError::NoCatalog { .. }) => diagnostic
                .with_suggestion("pass --catalog=<file> or --schema-command=<cmd>"),
            _ => diagnostic.with_note(format!("run `lgc explain {code}` for details")),
        })
    }
}
