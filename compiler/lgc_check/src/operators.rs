//! Built-in operators and their reference signatures.
//!
//! The parser emits infix operators as predicate calls named by the operator
//! text, with `left` and `right` fields. Operator calls are checked against a
//! fixed signature instead of a user header.

use lgc_ir::{Call, Field, FieldType};

/// Every operator name the parser may emit as a predicate call.
pub const OPERATORS: &[&str] = &[
    "||", "&&", "->", "==", "<=", ">=", "<", ">", "!=", " in ", "++?", "++", "+", "-", "*", "/",
    "%", "^", "!",
];

/// Operators reported as unsupported instead of being checked.
pub const UNSUPPORTED_OPERATORS: &[&str] = &["->", " in ", "++?", "++", "%", "^", "!"];

const NUMERIC_OPERATORS: &[&str] = &["+", "-", "/", "*", ">", "<", "<=", ">=", "=="];
const BOOLEAN_OPERATORS: &[&str] = &["&&", "||"];

pub const NUMERIC_REFERENCE_TEXT: &str = "Predefined Num Operator";
pub const BOOLEAN_REFERENCE_TEXT: &str = "Predefined Bool Operator";

pub fn is_operator(name: &str) -> bool {
    OPERATORS.contains(&name)
}

pub fn is_unsupported(name: &str) -> bool {
    UNSUPPORTED_OPERATORS.contains(&name)
}

/// Reference signatures for the supported operators.
///
/// `!=` and the unsupported operators have none; their calls wait in the
/// pending map like any other unseen predicate.
pub fn builtin_references() -> impl Iterator<Item = (&'static str, Call)> {
    let numeric = NUMERIC_OPERATORS
        .iter()
        .map(|op| (*op, binary_reference(NUMERIC_REFERENCE_TEXT, FieldType::Number)));
    let boolean = BOOLEAN_OPERATORS
        .iter()
        .map(|op| (*op, binary_reference(BOOLEAN_REFERENCE_TEXT, FieldType::Bool)));
    numeric.chain(boolean)
}

fn binary_reference(text: &str, operand: FieldType) -> Call {
    Call::new(
        text,
        vec![
            Field::typed("left", operand.clone()),
            Field::typed("right", operand),
        ],
    )
}
