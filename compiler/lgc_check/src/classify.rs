//! Field value type classification.
//!
//! Types are informational: they appear in predicate maps but never take
//! part in consistency checking.

use lgc_ir::{Call, Expression, FieldType, Literal, SyntaxNode, Unresolved};

/// Classify a field value by its `expression` node.
///
/// Returns `None` when the value has no expression or the expression is
/// malformed. An unknown literal kind also yields `None`.
pub fn classify(value: &SyntaxNode) -> Option<FieldType> {
    let Some(node) = value.get("expression") else {
        tracing::error!("no expression found in field value");
        return None;
    };
    let Some(expression) = Expression::from_node(node) else {
        tracing::error!("malformed expression in field value");
        return None;
    };
    classify_expression(&expression)
}

/// Classify an already-decoded expression.
pub fn classify_expression(expression: &Expression) -> Option<FieldType> {
    match expression {
        Expression::Literal(literal) => classify_literal(literal),
        Expression::Variable { var_name: Some(name) } => Some(FieldType::Variable(name.clone())),
        Expression::Variable { var_name: None } => {
            tracing::error!("variable expression has no var_name");
            None
        }
        Expression::Subscript => unresolved(Unresolved::Subscript),
        Expression::Combine => unresolved(Unresolved::Combine),
        Expression::Implication => unresolved(Unresolved::Implication),
        Expression::Unrecognized(tag) => {
            tracing::debug!(tag = %tag, "expression kind has no type rule");
            Some(FieldType::Unresolved(Unresolved::Unrecognized(tag.clone())))
        }
    }
}

fn classify_literal(literal: &Literal) -> Option<FieldType> {
    match literal {
        Literal::Number => Some(FieldType::Number),
        Literal::String => Some(FieldType::String),
        Literal::List => Some(FieldType::List),
        Literal::Bool => Some(FieldType::Bool),
        Literal::Null => Some(FieldType::Null),
        Literal::Predicate { name: Some(name) } => Some(FieldType::Predicate(name.clone())),
        Literal::Predicate { name: None } => {
            tracing::error!("predicate literal has no predicate_name");
            None
        }
        Literal::Unrecognized(tag) => {
            tracing::warn!(tag = %tag, "unknown literal type");
            None
        }
    }
}

fn unresolved(gap: Unresolved) -> Option<FieldType> {
    tracing::warn!(expression = ?gap, "unhandled expression, type left unresolved");
    Some(FieldType::Unresolved(gap))
}

/// Fill in the type of every field that does not have one yet.
///
/// Fields typed by a schema keep their declared type.
pub fn annotate(call: &mut Call) {
    for field in call.fields.iter_mut().filter(|f| f.ty.is_none()) {
        field.ty = classify(&field.value);
    }
}

#[cfg(test)]
mod tests;
