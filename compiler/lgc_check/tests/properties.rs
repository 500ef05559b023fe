//! Property-based tests for the predicate checker.
//!
//! Random programs are built from a small pool of predicate and field names
//! so that references, forward uses and mismatches occur often. Verified:
//! 1. Determinism: two runs with fresh state report identical errors
//! 2. Imperative (`@`) predicates never reach checker state or errors
//! 3. User predicate references are the first header-position call

#![allow(clippy::unwrap_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use lgc_check::{
    operators, verify_predicates, CheckResult, PendingCalls, PredicateReferences, SchemaError,
    SchemaField, SchemaResolver,
};
use lgc_ir::{decode_value, RuleEntry};
use proptest::prelude::*;
use serde_json::{json, Value};

const PREDICATES: &[&str] = &["A", "B", "C", "@Ground", "@OrderBy", "+", "++"];
const FIELDS: &[&str] = &["x", "y", "z", "left", "right"];

/// Same schema for any table; generated programs reference none.
struct StaticCatalog;

impl SchemaResolver for StaticCatalog {
    fn fetch_schema(&mut self, _table: &str) -> Result<Vec<SchemaField>, SchemaError> {
        Ok(vec![SchemaField::new("x", "INT64")])
    }
}

#[derive(Clone, Debug)]
struct GenCall {
    name: &'static str,
    fields: Vec<&'static str>,
}

impl GenCall {
    fn to_json(&self) -> Value {
        let items: Vec<_> = self
            .fields
            .iter()
            .map(|f| json!({"field": f, "value": {"expression": {"variable": {"var_name": f}}}}))
            .collect();
        json!({"predicate_name": self.name, "record": {"field_value": items}})
    }
}

// -- Strategies --

fn call_strategy() -> impl Strategy<Value = GenCall> {
    (
        prop::sample::select(PREDICATES),
        prop::collection::vec(prop::sample::select(FIELDS), 0..4),
    )
        .prop_map(|(name, fields)| GenCall { name, fields })
}

fn rule_strategy() -> impl Strategy<Value = Vec<GenCall>> {
    prop::collection::vec(call_strategy(), 1..5)
}

fn program_strategy() -> impl Strategy<Value = Vec<Vec<GenCall>>> {
    prop::collection::vec(rule_strategy(), 1..8)
}

// -- Helpers --

fn entries(program: &[Vec<GenCall>]) -> Vec<RuleEntry> {
    let rules: Vec<Value> = program
        .iter()
        .enumerate()
        .map(|(index, calls)| {
            let (head, body) = calls.split_first().unwrap();
            let body: Vec<Value> = body.iter().map(GenCall::to_json).collect();
            json!({"full_text": format!("rule {index}"), "head": head.to_json(), "body": body})
        })
        .collect();
    decode_value(Value::Array(rules)).unwrap()
}

fn run(entries: &[RuleEntry]) -> CheckResult {
    verify_predicates(
        entries,
        PredicateReferences::new(),
        PendingCalls::new(),
        StaticCatalog,
    )
    .unwrap()
}

/// Rule index of the first call to `name` that was checked as a header.
fn first_header(program: &[Vec<GenCall>], name: &str) -> Option<usize> {
    program.iter().position(|calls| {
        calls
            .iter()
            .find(|c| !c.name.starts_with('@'))
            .is_some_and(|c| c.name == name)
    })
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Fresh state gives the same errors, in the same order.
    #[test]
    fn prop_fresh_runs_agree(program in program_strategy()) {
        let entries = entries(&program);

        let first = run(&entries);
        let second = run(&entries);

        prop_assert_eq!(first.errors, second.errors);
        prop_assert_eq!(first.references.names(), second.references.names());
    }

    /// `@` predicates are invisible to the checker.
    #[test]
    fn prop_imperative_predicates_excluded(program in program_strategy()) {
        let result = run(&entries(&program));

        for name in result.references.names() {
            prop_assert!(!name.starts_with('@'), "reference for {}", name);
        }
        for (name, _) in result.pending.iter() {
            prop_assert!(!name.starts_with('@'), "pending calls for {}", name);
        }
        for error in &result.errors {
            prop_assert!(!error.predicate.starts_with('@'), "error for {}", error.predicate);
        }
    }

    /// A user predicate's reference is its first header call.
    #[test]
    fn prop_reference_is_first_header(program in program_strategy()) {
        let result = run(&entries(&program));

        for name in ["A", "B", "C", "++"] {
            let expected = first_header(&program, name).map(|index| format!("rule {index}"));
            let actual = result.references.get(name).map(|c| c.full_text.clone());
            prop_assert_eq!(actual, expected, "reference for {}", name);
        }
        prop_assert!(operators::is_operator("+"));
        prop_assert!(result.references.contains("+"));
    }
}
