//! Conversion of checker findings into diagnostics.

use lgc_check::{CallProblem, CheckResult, PendingCalls, ValidationError};
use lgc_diagnostic::{Diagnostic, ErrorCode};

/// Diagnostics for one inconsistent call, one per problem.
pub fn validation_diagnostics(error: &ValidationError) -> Vec<Diagnostic> {
    error
        .problems
        .iter()
        .map(|problem| problem_diagnostic(error, problem))
        .collect()
}

fn problem_diagnostic(error: &ValidationError, problem: &CallProblem) -> Diagnostic {
    let diagnostic = if problem.is_warning() {
        Diagnostic::warning(problem.code())
    } else {
        Diagnostic::error(problem.code())
    };
    let mut diagnostic = diagnostic
        .with_message(problem.to_string())
        .with_label(&error.call.full_text, format!("call to `{}`", error.predicate));

    if let Some(reference) = &error.reference {
        diagnostic = diagnostic.with_secondary_label(&reference.full_text, "reference signature");
    }

    match problem {
        CallProblem::ArityMismatch { .. } | CallProblem::FieldOrder { .. } => diagnostic
            .with_suggestion("repeat the reference's fields, in the same order, in every rule head"),
        CallProblem::UnrecognizedField { .. } | CallProblem::ExtraneousFields { .. } => {
            match &error.reference {
                Some(reference) => diagnostic.with_note(format!(
                    "`{}` has fields: {}",
                    error.predicate,
                    reference.field_names().collect::<Vec<_>>().join(", ")
                )),
                None => diagnostic,
            }
        }
        CallProblem::DuplicateField { .. } => {
            diagnostic.with_suggestion("give each field a distinct name")
        }
        CallProblem::UnsupportedOperator { .. } => {
            diagnostic.with_note("calls to this operator are not checked")
        }
        CallProblem::OperatorFieldMismatch { .. } => {
            diagnostic.with_note("operator calls are produced by the parser; this is a tooling bug")
        }
    }
}

/// One warning per predicate whose calls were never checked.
pub fn pending_diagnostics(pending: &PendingCalls) -> Vec<Diagnostic> {
    pending
        .iter()
        .map(|(name, calls)| {
            let count = calls.len();
            let plural = if count == 1 { "" } else { "s" };
            let diagnostic = Diagnostic::warning(ErrorCode::W3001).with_message(format!(
                "predicate `{name}` never appears first in a rule; {count} call{plural} not checked"
            ));
            match calls.first() {
                Some(call) => diagnostic.with_label(&call.full_text, "first use"),
                None => diagnostic,
            }
        })
        .collect()
}

/// Every diagnostic of a run, errors in detection order, then pending
/// warnings sorted by predicate name.
pub fn check_diagnostics(result: &CheckResult) -> Vec<Diagnostic> {
    result
        .errors
        .iter()
        .flat_map(validation_diagnostics)
        .chain(pending_diagnostics(&result.pending))
        .collect()
}
