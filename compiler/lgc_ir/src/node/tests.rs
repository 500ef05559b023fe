use super::*;
use pretty_assertions::assert_eq;

fn string(s: &str) -> SyntaxNode {
    SyntaxNode::Scalar(Scalar::String(s.to_string()))
}

#[test]
fn test_mapping_keeps_encounter_order() {
    let mut mapping = Mapping::new();
    mapping.push("zeta", string("z"));
    mapping.push("alpha", string("a"));

    let keys: Vec<_> = mapping.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
    assert_eq!(mapping.first().map(|(k, _)| k), Some("zeta"));
    assert_eq!(mapping.len(), 2);
}

#[test]
fn test_mapping_get_returns_first_entry() {
    let mut mapping = Mapping::new();
    mapping.push("key", string("first"));
    mapping.push("key", string("second"));

    assert_eq!(mapping.get("key").and_then(SyntaxNode::as_str), Some("first"));
    assert!(mapping.get("missing").is_none());
}

#[test]
fn test_node_get_sees_call_entries() {
    let mut entries = Mapping::new();
    entries.push("predicate_name", string("P"));
    let call = SyntaxNode::Call(Box::new(CallNode {
        name: "P".to_string(),
        fields: Vec::new(),
        entries,
    }));

    assert_eq!(call.get("predicate_name").and_then(SyntaxNode::as_str), Some("P"));
    assert!(SyntaxNode::empty().get("predicate_name").is_none());
    assert!(string("x").as_mapping().is_none());
}

#[test]
fn test_scalar_display() {
    assert_eq!(Scalar::Null.to_string(), "null");
    assert_eq!(Scalar::Bool(true).to_string(), "true");
    assert_eq!(Scalar::Number("1.5".to_string()).to_string(), "1.5");
    assert_eq!(Scalar::String("a".to_string()).to_string(), "\"a\"");
}
