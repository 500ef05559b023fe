//! The `check` command: report inconsistent predicate calls.

use std::io::IsTerminal;

use lgc_check::{verify_predicates, PendingCalls, PredicateReferences, SchemaResolver};
use lgc_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use lgc_ir::decode_entries;

use super::{read_input, CommandOptions, OutputFormat};
use crate::reporting::check_diagnostics;
use crate::CliError;

/// Counts reported by a finished check.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CheckSummary {
    pub rules: usize,
    /// Inconsistent calls.
    pub error_count: usize,
    /// Unsupported operator uses plus never-checked predicates.
    pub warning_count: usize,
}

impl CheckSummary {
    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }
}

/// Check a tree held in memory and report through `emitter`.
pub fn run_check<R, E>(source: &str, resolver: R, emitter: &mut E) -> Result<CheckSummary, CliError>
where
    R: SchemaResolver,
    E: DiagnosticEmitter,
{
    let entries = decode_entries(source)?;
    let result = verify_predicates(
        &entries,
        PredicateReferences::new(),
        PendingCalls::new(),
        resolver,
    )?;

    let diagnostics = check_diagnostics(&result);
    let error_count = result.error_count();
    let warning_count = diagnostics.iter().filter(|d| d.is_warning()).count();
    tracing::debug!(
        rules = entries.len(),
        error_count,
        warning_count,
        "check finished"
    );

    emitter.emit_all(&diagnostics);
    emitter.emit_summary(error_count, warning_count);
    emitter.flush();

    Ok(CheckSummary {
        rules: entries.len(),
        error_count,
        warning_count,
    })
}

/// Run `check` as configured on the command line.
///
/// Text reports go to stderr, JSON reports to stdout.
pub fn check_file(options: &CommandOptions) -> Result<CheckSummary, CliError> {
    let source = read_input(options.input.as_deref())?;
    let resolver = options.schema_source()?;

    match options.format {
        OutputFormat::Text => {
            let is_tty = std::io::stderr().is_terminal();
            let mut emitter =
                TerminalEmitter::with_color_mode(std::io::stderr(), options.color, is_tty);
            run_check(&source, resolver, &mut emitter)
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(std::io::stdout());
            run_check(&source, resolver, &mut emitter)
        }
    }
}
