//! Validation of one call against its predicate's reference.

use lgc_ir::Call;

use crate::operators;
use crate::{CallProblem, ValidationError};

/// Compare `call` with `reference` under the rules for `name`.
///
/// Operators are checked against their built-in signature. User predicates
/// get the header rules when `is_header` is set, and the body rules always.
/// Returns `None` when no problem is found.
pub fn validate(
    name: &str,
    reference: &Call,
    call: &Call,
    is_header: bool,
) -> Option<ValidationError> {
    let problems = if operators::is_operator(name) {
        operator_problems(name, reference, call)
    } else {
        let mut problems = if is_header {
            header_problems(reference, call)
        } else {
            Vec::new()
        };
        problems.extend(body_problems(name, reference, call));
        problems
    };

    if problems.is_empty() {
        tracing::trace!(predicate = name, "no error found");
        return None;
    }
    tracing::debug!(predicate = name, problems = problems.len(), "inconsistent call");
    Some(ValidationError::new(
        name,
        Some(reference.clone()),
        call.clone(),
        problems,
    ))
}

fn operator_problems(name: &str, reference: &Call, call: &Call) -> Vec<CallProblem> {
    if operators::is_unsupported(name) {
        tracing::warn!(operator = name, "unsupported operator");
        return vec![CallProblem::UnsupportedOperator {
            operator: name.to_string(),
        }];
    }

    // First disagreement only; later positions are not compared.
    reference
        .field_names()
        .zip(call.field_names())
        .find(|(expected, found)| expected != found)
        .map(|(expected, found)| {
            tracing::error!(operator = name, expected, found, "operator call disagrees with its signature");
            CallProblem::OperatorFieldMismatch {
                operator: name.to_string(),
                reference: expected.to_string(),
                call: found.to_string(),
            }
        })
        .into_iter()
        .collect()
}

/// Header calls must repeat the reference exactly: same arity, same names
/// in the same positions.
///
/// Positions are compared up to the shorter of the two calls, so an arity
/// mismatch can come with field order problems.
fn header_problems(reference: &Call, call: &Call) -> Vec<CallProblem> {
    let mut problems = Vec::new();
    if reference.arity() != call.arity() {
        problems.push(CallProblem::ArityMismatch {
            reference: reference.arity(),
            call: call.arity(),
        });
    }

    problems.extend(
        reference
            .field_names()
            .zip(call.field_names())
            .filter(|(expected, found)| expected != found)
            .map(|(expected, found)| CallProblem::FieldOrder {
                reference: expected.to_string(),
                call: found.to_string(),
            }),
    );
    problems
}

/// Body calls may use any subset of the reference's fields, in any order.
fn body_problems(name: &str, reference: &Call, call: &Call) -> Vec<CallProblem> {
    let mut problems = Vec::new();
    if reference.arity() < call.arity() {
        problems.push(CallProblem::ExtraneousFields {
            predicate: name.to_string(),
        });
    }
    for field in call.field_names() {
        if !reference.field_names().any(|known| known == field) {
            problems.push(CallProblem::UnrecognizedField {
                field: field.to_string(),
            });
        }
    }
    problems
}
