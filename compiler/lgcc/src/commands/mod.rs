//! Command handlers for the `lgc` CLI.
//!
//! Each submodule implements one command. Option parsing and input reading
//! shared by `check` and `map` live here.

use std::io::Read;

use lgc_diagnostic::emitter::ColorMode;

use crate::resolver::SchemaSource;
use crate::CliError;

mod check;
mod explain;
mod map;

pub use check::{check_file, run_check, CheckSummary};
pub use explain::explain_error;
pub use map::{map_file, render_map, run_map};

/// Report format for `check`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Options accepted by `check` and `map`.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CommandOptions {
    /// Tree file; `None` reads standard input.
    pub input: Option<String>,
    pub catalog: Option<String>,
    pub schema_command: Option<String>,
    pub format: OutputFormat,
    pub color: ColorMode,
}

impl CommandOptions {
    /// Parse the arguments following the command name.
    pub fn parse(args: &[String]) -> Result<CommandOptions, CliError> {
        let mut options = CommandOptions::default();
        for arg in args {
            if let Some(path) = arg.strip_prefix("--catalog=") {
                options.catalog = Some(path.to_string());
            } else if let Some(command) = arg.strip_prefix("--schema-command=") {
                options.schema_command = Some(command.to_string());
            } else if let Some(format) = arg.strip_prefix("--format=") {
                options.format = match format {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    other => {
                        return Err(CliError::Usage(format!(
                            "unknown format '{other}' (expected text or json)"
                        )))
                    }
                };
            } else if let Some(color) = arg.strip_prefix("--color=") {
                options.color = ColorMode::parse(color).ok_or_else(|| {
                    CliError::Usage(format!(
                        "unknown color mode '{color}' (expected auto, always or never)"
                    ))
                })?;
            } else if arg == "-" || !arg.starts_with('-') {
                if options.input.is_some() {
                    return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
                }
                if arg != "-" {
                    options.input = Some(arg.clone());
                }
            } else {
                return Err(CliError::Usage(format!("unknown option '{arg}'")));
            }
        }
        Ok(options)
    }

    /// The schema resolver these options select.
    pub fn schema_source(&self) -> Result<SchemaSource, CliError> {
        SchemaSource::from_options(self.catalog.as_deref(), self.schema_command.as_deref())
    }

    /// Display name of the input.
    pub fn input_name(&self) -> &str {
        self.input.as_deref().unwrap_or("<stdin>")
    }
}

/// Read the syntax tree text from a file, or from standard input.
pub fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests;
