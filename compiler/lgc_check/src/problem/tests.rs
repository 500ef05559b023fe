use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_messages() {
    let cases = [
        (
            CallProblem::ArityMismatch {
                reference: 2,
                call: 1,
            },
            "Inconsistent number of predicate fields '2' and '1'.",
        ),
        (
            CallProblem::FieldOrder {
                reference: "a".to_string(),
                call: "b".to_string(),
            },
            "Field names 'a' and 'b' do not match. Note that fields must be listed in a consistent order.",
        ),
        (
            CallProblem::ExtraneousFields {
                predicate: "Parent".to_string(),
            },
            "Predicate Parent has extraneous fields.",
        ),
        (
            CallProblem::UnrecognizedField {
                field: "z".to_string(),
            },
            "Unrecognized field name 'z'.",
        ),
        (
            CallProblem::DuplicateField {
                field: "a".to_string(),
            },
            "Duplicate field a",
        ),
        (
            CallProblem::UnsupportedOperator {
                operator: "++".to_string(),
            },
            "Unsupported Operator: ++",
        ),
        (
            CallProblem::OperatorFieldMismatch {
                operator: "+".to_string(),
                reference: "left".to_string(),
                call: "lhs".to_string(),
            },
            "PROGRAM ERROR: Fields 'left' and 'lhs' are not the same for operator '+'.",
        ),
    ];

    for (problem, expected) in cases {
        assert_eq!(problem.to_string(), expected);
    }
}

#[test]
fn test_kinds_and_codes() {
    let unsupported = CallProblem::UnsupportedOperator {
        operator: "%".to_string(),
    };
    assert_eq!(unsupported.kind(), ProblemKind::UnsupportedOperator);
    assert_eq!(unsupported.code(), ErrorCode::W2001);
    assert!(unsupported.is_warning());

    let duplicate = CallProblem::DuplicateField {
        field: "a".to_string(),
    };
    assert_eq!(duplicate.kind(), ProblemKind::DuplicateField);
    assert_eq!(duplicate.code(), ErrorCode::E1005);
    assert!(!duplicate.is_warning());

    let arity = CallProblem::ArityMismatch {
        reference: 1,
        call: 2,
    };
    assert_eq!(arity.kind(), ProblemKind::StructuralMismatch);
    assert!(arity.code().is_call_error());
}

#[test]
fn test_validation_error_messages_in_order() {
    let error = ValidationError::new(
        "R",
        Some(Call::new("R(a:)", Vec::new())),
        Call::new("R(b:, c:)", Vec::new()),
        vec![
            CallProblem::ExtraneousFields {
                predicate: "R".to_string(),
            },
            CallProblem::UnrecognizedField {
                field: "b".to_string(),
            },
        ],
    );

    assert_eq!(
        error.messages(),
        vec![
            "Predicate R has extraneous fields.".to_string(),
            "Unrecognized field name 'b'.".to_string(),
        ]
    );
    assert!(!error.is_warning());
}
