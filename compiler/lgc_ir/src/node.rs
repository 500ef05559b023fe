//! Syntax tree nodes.
//!
//! The parser emits an untyped tree of JSON arrays, objects and scalars.
//! [`SyntaxNode`] is that tree after decoding, with predicate invocations
//! lifted into their own [`SyntaxNode::Call`] variant.

use std::fmt;

use crate::Field;

/// Leaf value of the syntax tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Scalar {
    Null,
    Bool(bool),
    /// Kept as the parser wrote it; the checker never does arithmetic.
    Number(String),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// Keyed children of a node, in encounter order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Mapping {
    entries: Vec<(String, SyntaxNode)>,
}

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Mapping::default()
    }

    /// Append an entry. Later lookups see the first entry for a key.
    pub fn push(&mut self, key: impl Into<String>, node: SyntaxNode) {
        self.entries.push((key.into(), node));
    }

    /// Look up a child by key.
    pub fn get(&self, key: &str) -> Option<&SyntaxNode> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, n)| n)
    }

    /// The first entry, which names the variant of a single-key tagged node.
    pub fn first(&self) -> Option<(&str, &SyntaxNode)> {
        self.entries.first().map(|(k, n)| (k.as_str(), n))
    }

    /// Iterate over entries in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SyntaxNode)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, SyntaxNode)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, SyntaxNode)>>(iter: I) -> Self {
        Mapping {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A mapping recognized as a predicate invocation.
///
/// `entries` is the complete decoded mapping (including `predicate_name`
/// and `record`), so walkers can still descend into every child in order.
/// `fields` is the decoded `record.field_value` list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallNode {
    pub name: String,
    pub fields: Vec<Field>,
    pub entries: Mapping,
}

/// A decoded syntax tree node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxNode {
    Sequence(Vec<SyntaxNode>),
    Mapping(Mapping),
    Call(Box<CallNode>),
    Scalar(Scalar),
}

impl SyntaxNode {
    /// An empty sequence, used for missing `head` or `body`.
    pub fn empty() -> Self {
        SyntaxNode::Sequence(Vec::new())
    }

    /// Look up a keyed child of a mapping or call node.
    pub fn get(&self, key: &str) -> Option<&SyntaxNode> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// The keyed children of a mapping or call node.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            SyntaxNode::Mapping(mapping) => Some(mapping),
            SyntaxNode::Call(call) => Some(&call.entries),
            SyntaxNode::Sequence(_) | SyntaxNode::Scalar(_) => None,
        }
    }

    /// The text of a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SyntaxNode::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
