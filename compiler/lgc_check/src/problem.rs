//! Problems found at predicate call sites.

use std::fmt;

use lgc_diagnostic::ErrorCode;
use lgc_ir::Call;

/// Broad category of a call problem.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProblemKind {
    /// Field count, names or order disagree with the reference.
    StructuralMismatch,
    /// The same field name appears twice in one call.
    DuplicateField,
    /// Operator the checker does not validate.
    UnsupportedOperator,
    /// Operator call disagreeing with its built-in signature.
    InternalInconsistency,
}

/// One inconsistency in a call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CallProblem {
    /// Header call arity differs from the reference.
    ArityMismatch {
        reference: usize,
        call: usize,
    },
    /// Header call field at some position differs from the reference.
    FieldOrder {
        reference: String,
        call: String,
    },
    ExtraneousFields {
        predicate: String,
    },
    UnrecognizedField {
        field: String,
    },
    DuplicateField {
        field: String,
    },
    UnsupportedOperator {
        operator: String,
    },
    OperatorFieldMismatch {
        operator: String,
        reference: String,
        call: String,
    },
}

impl CallProblem {
    pub fn kind(&self) -> ProblemKind {
        match self {
            CallProblem::ArityMismatch { .. }
            | CallProblem::FieldOrder { .. }
            | CallProblem::ExtraneousFields { .. }
            | CallProblem::UnrecognizedField { .. } => ProblemKind::StructuralMismatch,
            CallProblem::DuplicateField { .. } => ProblemKind::DuplicateField,
            CallProblem::UnsupportedOperator { .. } => ProblemKind::UnsupportedOperator,
            CallProblem::OperatorFieldMismatch { .. } => ProblemKind::InternalInconsistency,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CallProblem::ArityMismatch { .. } => ErrorCode::E1001,
            CallProblem::FieldOrder { .. } => ErrorCode::E1002,
            CallProblem::ExtraneousFields { .. } => ErrorCode::E1003,
            CallProblem::UnrecognizedField { .. } => ErrorCode::E1004,
            CallProblem::DuplicateField { .. } => ErrorCode::E1005,
            CallProblem::UnsupportedOperator { .. } => ErrorCode::W2001,
            CallProblem::OperatorFieldMismatch { .. } => ErrorCode::E9001,
        }
    }

    /// Unsupported operators are reported but do not fail a run.
    pub fn is_warning(&self) -> bool {
        self.code().is_warning()
    }
}

impl fmt::Display for CallProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallProblem::ArityMismatch { reference, call } => write!(
                f,
                "Inconsistent number of predicate fields '{reference}' and '{call}'."
            ),
            CallProblem::FieldOrder { reference, call } => write!(
                f,
                "Field names '{reference}' and '{call}' do not match. \
                 Note that fields must be listed in a consistent order."
            ),
            CallProblem::ExtraneousFields { predicate } => {
                write!(f, "Predicate {predicate} has extraneous fields.")
            }
            CallProblem::UnrecognizedField { field } => {
                write!(f, "Unrecognized field name '{field}'.")
            }
            CallProblem::DuplicateField { field } => write!(f, "Duplicate field {field}"),
            CallProblem::UnsupportedOperator { operator } => {
                write!(f, "Unsupported Operator: {operator}")
            }
            CallProblem::OperatorFieldMismatch {
                operator,
                reference,
                call,
            } => write!(
                f,
                "PROGRAM ERROR: Fields '{reference}' and '{call}' are not the same for operator '{operator}'."
            ),
        }
    }
}

/// A call found inconsistent with its predicate's reference.
///
/// `reference` is absent for duplicate-field errors, which are detected
/// before any reference is looked up.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValidationError {
    pub predicate: String,
    pub reference: Option<Call>,
    pub call: Call,
    /// Never empty.
    pub problems: Vec<CallProblem>,
}

impl ValidationError {
    pub fn new(
        predicate: impl Into<String>,
        reference: Option<Call>,
        call: Call,
        problems: Vec<CallProblem>,
    ) -> Self {
        ValidationError {
            predicate: predicate.into(),
            reference,
            call,
            problems,
        }
    }

    /// Problem messages in detection order.
    pub fn messages(&self) -> Vec<String> {
        self.problems.iter().map(ToString::to_string).collect()
    }

    /// Whether every problem is a warning.
    pub fn is_warning(&self) -> bool {
        self.problems.iter().all(CallProblem::is_warning)
    }
}

#[cfg(test)]
mod tests;
