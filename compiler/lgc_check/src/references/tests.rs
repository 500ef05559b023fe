use super::*;
use lgc_ir::Field;
use pretty_assertions::assert_eq;

fn call(text: &str) -> Call {
    Call::new(text, vec![Field::named("a")])
}

#[test]
fn test_install_never_replaces() {
    let mut references = PredicateReferences::new();

    assert!(references.install("R", call("first")));
    assert!(!references.install("R", call("second")));

    assert_eq!(references.get("R").map(|c| c.full_text.as_str()), Some("first"));
    assert_eq!(references.len(), 1);
}

#[test]
fn test_seed_operators() {
    let mut references = PredicateReferences::new();
    references.seed_operators();

    assert!(references.contains("+"));
    assert!(references.contains("||"));
    assert!(!references.contains("!="));
    assert!(!references.contains("++"));
    assert_eq!(references.len(), 11);
}

#[test]
fn test_seed_overwrites_operator_entries() {
    let mut references = PredicateReferences::new();
    references.install("+", call("custom"));
    references.seed_operators();

    assert_eq!(
        references.get("+").map(|c| c.full_text.as_str()),
        Some(crate::operators::NUMERIC_REFERENCE_TEXT)
    );
}

#[test]
fn test_names_sorted() {
    let mut references = PredicateReferences::new();
    references.install("b", call("b"));
    references.install("a", call("a"));

    assert_eq!(references.names(), vec!["a", "b"]);
}

#[test]
fn test_pending_buckets_keep_order() {
    let mut pending = PendingCalls::new();
    pending.push("Z", call("z1"));
    pending.push("A", call("a1"));
    pending.push("Z", call("z2"));

    let texts: Vec<_> = pending.get("Z").iter().map(|c| c.full_text.as_str()).collect();
    assert_eq!(texts, vec!["z1", "z2"]);

    let names: Vec<_> = pending.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["A", "Z"]);
}

#[test]
fn test_take_removes_bucket() {
    let mut pending = PendingCalls::new();
    pending.push("Z", call("z1"));

    assert_eq!(pending.take("Z").len(), 1);
    assert!(!pending.contains("Z"));
    assert!(pending.take("Z").is_empty());
    assert!(pending.is_empty());
    assert!(pending.get("Z").is_empty());
}
