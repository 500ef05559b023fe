//! Field value expressions.
//!
//! A field's value holds an `expression` node tagged by its single key:
//!
//! ```text
//! {"expression": {"literal": {"the_number": {"number": "1"}}}}
//! {"expression": {"variable": {"var_name": "x"}}}
//! {"expression": {"call": {"predicate_name": "Y", ...}}}
//! ```
//!
//! [`Expression::from_node`] turns the tagged node into a closed enum so the
//! classifier can match every kind exhaustively.

use crate::SyntaxNode;

/// Literal kinds, tagged `the_*` by the parser.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Number,
    String,
    List,
    Bool,
    Null,
    /// `the_predicate`: a literal naming a predicate.
    Predicate { name: Option<String> },
    /// Any other `the_*` tag.
    Unrecognized(String),
}

impl Literal {
    /// Decode a literal from its tagged node.
    pub fn from_node(node: &SyntaxNode) -> Option<Literal> {
        let (tag, inner) = node.as_mapping()?.first()?;
        Some(match tag {
            "the_number" => Literal::Number,
            "the_string" => Literal::String,
            "the_list" => Literal::List,
            "the_bool" => Literal::Bool,
            "the_null" => Literal::Null,
            "the_predicate" => Literal::Predicate {
                name: predicate_name(inner),
            },
            other => Literal::Unrecognized(other.to_string()),
        })
    }
}

/// Expression kinds, one per tag the parser emits for field values.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expression {
    Literal(Literal),
    Variable { var_name: Option<String> },
    Subscript,
    Combine,
    Implication,
    /// Any other tag (calls, negations, ...); carries the tag.
    Unrecognized(String),
}

impl Expression {
    /// Decode the tagged node found under a value's `expression` key.
    ///
    /// Returns `None` when the node is not a non-empty mapping, or when a
    /// literal's own tag is missing.
    pub fn from_node(node: &SyntaxNode) -> Option<Expression> {
        let (tag, inner) = node.as_mapping()?.first()?;
        Some(match tag {
            "literal" => Expression::Literal(Literal::from_node(inner)?),
            "variable" => Expression::Variable {
                var_name: inner.get("var_name").and_then(SyntaxNode::as_str).map(str::to_string),
            },
            "subscript" => Expression::Subscript,
            "combine" => Expression::Combine,
            "implication" => Expression::Implication,
            other => Expression::Unrecognized(other.to_string()),
        })
    }
}

/// Name of a predicate literal, whether decoded as a call or a plain mapping.
fn predicate_name(node: &SyntaxNode) -> Option<String> {
    match node {
        SyntaxNode::Call(call) => Some(call.name.clone()),
        _ => node
            .get("predicate_name")
            .and_then(SyntaxNode::as_str)
            .map(str::to_string),
    }
}
