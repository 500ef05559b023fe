//! Syntax Tree Visitor
//!
//! Provides generic depth-first, left-to-right traversal of a decoded tree.
//!
//! # Design
//!
//! Default `visit_*` implementations call the matching `walk_*` function,
//! which visits every child in encounter order. Override a `visit_*` method
//! to act at a node, then call `walk_*` to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountCalls {
//!     count: usize,
//! }
//!
//! impl<'tree> Visitor<'tree> for CountCalls {
//!     fn visit_call(&mut self, call: &'tree CallNode) {
//!         self.count += 1;
//!         walk_call(self, call);
//!     }
//! }
//! ```

use crate::{CallNode, Scalar, SyntaxNode};

/// Syntax tree visitor.
///
/// The visitor may mutate its own state; the tree stays immutable.
pub trait Visitor<'tree> {
    /// Visit any node.
    fn visit_node(&mut self, node: &'tree SyntaxNode) {
        walk_node(self, node);
    }

    /// Visit a predicate call node.
    fn visit_call(&mut self, call: &'tree CallNode) {
        walk_call(self, call);
    }

    /// Visit a leaf.
    fn visit_scalar(&mut self, scalar: &'tree Scalar) {
        let _ = scalar;
    }
}

/// Visit every child of a node.
pub fn walk_node<'tree, V: Visitor<'tree> + ?Sized>(visitor: &mut V, node: &'tree SyntaxNode) {
    match node {
        SyntaxNode::Sequence(items) => {
            for item in items {
                visitor.visit_node(item);
            }
        }
        SyntaxNode::Mapping(mapping) => {
            for (_, child) in mapping.iter() {
                visitor.visit_node(child);
            }
        }
        SyntaxNode::Call(call) => visitor.visit_call(call),
        SyntaxNode::Scalar(scalar) => visitor.visit_scalar(scalar),
    }
}

/// Visit every entry of a call node, record included.
pub fn walk_call<'tree, V: Visitor<'tree> + ?Sized>(visitor: &mut V, call: &'tree CallNode) {
    for (_, child) in call.entries.iter() {
        visitor.visit_node(child);
    }
}
