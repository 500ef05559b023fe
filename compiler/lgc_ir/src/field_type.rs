//! Classified field types.

use std::fmt;

/// The semantic type of a field value.
///
/// `Predicate` and `Variable` are descriptors, not types: the value refers to
/// something whose type is not statically known at the call site.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FieldType {
    Number,
    String,
    List,
    Bool,
    Null,
    /// A literal naming another predicate.
    Predicate(String),
    /// A variable reference.
    Variable(String),
    /// A column type reported by an external schema catalog.
    Column(String),
    /// An expression the classifier does not interpret.
    Unresolved(Unresolved),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Number => write!(f, "number"),
            FieldType::String => write!(f, "string"),
            FieldType::List => write!(f, "list"),
            FieldType::Bool => write!(f, "bool"),
            FieldType::Null => write!(f, "null"),
            FieldType::Predicate(name) => write!(f, "{{predicate: {name}}}"),
            FieldType::Variable(name) => write!(f, "{{variable: {name}}}"),
            FieldType::Column(ty) => write!(f, "{ty}"),
            FieldType::Unresolved(gap) => write!(f, "{gap}"),
        }
    }
}

/// Expression kinds with no type rule yet.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Unresolved {
    Subscript,
    Combine,
    Implication,
    /// An expression tag the decoder does not know.
    Unrecognized(String),
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unresolved::Subscript | Unresolved::Unrecognized(_) => write!(f, "UNCLEAR"),
            Unresolved::Combine => write!(f, "Unhandled Expression: Combine"),
            Unresolved::Implication => write!(f, "Unhandled Expression: Implication"),
        }
    }
}
