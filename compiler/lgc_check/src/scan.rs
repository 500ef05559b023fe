//! Extraction of predicate calls from a syntax tree.

use lgc_ir::visitor::{walk_call, Visitor};
use lgc_ir::{CallNode, Field, RuleEntry, SyntaxNode};

/// A predicate invocation found in the tree, before it is tied to a rule.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PredicateCall {
    pub name: String,
    pub fields: Vec<Field>,
}

/// Collects calls in depth-first, left-to-right order.
///
/// A call is recorded before its children are walked, so an outer call
/// always precedes the calls nested in its field values.
#[derive(Default)]
struct CallCollector {
    calls: Vec<PredicateCall>,
}

impl<'tree> Visitor<'tree> for CallCollector {
    fn visit_call(&mut self, call: &'tree CallNode) {
        tracing::trace!(predicate = %call.name, fields = call.fields.len(), "found predicate");
        self.calls.push(PredicateCall {
            name: call.name.clone(),
            fields: call.fields.clone(),
        });
        walk_call(self, call);
    }
}

/// Every predicate call under `node`, in encounter order.
pub fn scan(node: &SyntaxNode) -> Vec<PredicateCall> {
    let mut collector = CallCollector::default();
    collector.visit_node(node);
    collector.calls
}

/// Every predicate call of a rule: the head's calls, then the body's.
///
/// The first element is the rule's header call.
pub fn scan_entry(entry: &RuleEntry) -> Vec<PredicateCall> {
    let mut collector = CallCollector::default();
    collector.visit_node(&entry.head);
    collector.visit_node(&entry.body);
    collector.calls
}
