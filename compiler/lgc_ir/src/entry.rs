//! Rule entries, calls and fields.

use crate::{FieldType, Scalar, SyntaxNode};

/// One parsed rule or fact, as delivered by the parser.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RuleEntry {
    /// Source text of the whole rule, used in reports.
    pub full_text: String,
    pub head: SyntaxNode,
    pub body: SyntaxNode,
}

impl RuleEntry {
    pub fn new(full_text: impl Into<String>, head: SyntaxNode, body: SyntaxNode) -> Self {
        RuleEntry {
            full_text: full_text.into(),
            head,
            body,
        }
    }
}

/// One named argument of a predicate call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    /// Field name. Positional fields carry their index as text.
    pub name: String,
    pub value: SyntaxNode,
    /// Filled by type annotation or taken from a schema; `None` until then.
    pub ty: Option<FieldType>,
}

impl Field {
    /// A field with a value and no type yet.
    pub fn new(name: impl Into<String>, value: SyntaxNode) -> Self {
        Field {
            name: name.into(),
            value,
            ty: None,
        }
    }

    /// A field known only by name and declared type (schemas, operators).
    pub fn typed(name: impl Into<String>, ty: FieldType) -> Self {
        Field {
            name: name.into(),
            value: SyntaxNode::Scalar(Scalar::Null),
            ty: Some(ty),
        }
    }

    /// A field known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Field::new(name, SyntaxNode::Scalar(Scalar::Null))
    }
}

/// A predicate invocation together with the rule text it came from.
///
/// The text is diagnostic only and never compared by the checker.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Call {
    pub full_text: String,
    pub fields: Vec<Field>,
}

impl Call {
    pub fn new(full_text: impl Into<String>, fields: Vec<Field>) -> Self {
        Call {
            full_text: full_text.into(),
            fields,
        }
    }

    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Field names in call order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
