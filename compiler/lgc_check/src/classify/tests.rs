#![allow(clippy::unwrap_used)]

use super::*;
use lgc_ir::Field;
use pretty_assertions::assert_eq;
use serde_json::json;

fn value(json: serde_json::Value) -> SyntaxNode {
    SyntaxNode::from_json(json).unwrap()
}

fn classify_json(json: serde_json::Value) -> Option<FieldType> {
    classify(&value(json))
}

#[test]
fn test_classify_literals() {
    let cases = [
        ("the_number", FieldType::Number),
        ("the_string", FieldType::String),
        ("the_list", FieldType::List),
        ("the_bool", FieldType::Bool),
        ("the_null", FieldType::Null),
    ];
    for (tag, expected) in cases {
        let ty = classify_json(json!({"expression": {"literal": {tag: {}}}}));
        assert_eq!(ty, Some(expected), "literal tag {tag}");
    }
}

#[test]
fn test_classify_predicate_literal() {
    let ty = classify_json(json!({"expression": {"literal": {
        "the_predicate": {"predicate_name": "Parent"}
    }}}));

    assert_eq!(ty, Some(FieldType::Predicate("Parent".to_string())));
    assert_eq!(ty.unwrap().to_string(), "{predicate: Parent}");
}

#[test]
fn test_classify_variable() {
    let ty = classify_json(json!({"expression": {"variable": {"var_name": "x"}}}));

    assert_eq!(ty, Some(FieldType::Variable("x".to_string())));
    assert_eq!(ty.unwrap().to_string(), "{variable: x}");
}

#[test]
fn test_nameless_variable_and_predicate_stay_untyped() {
    let variable = classify_json(json!({"expression": {"variable": {}}}));
    let predicate = classify_json(json!({"expression": {"literal": {"the_predicate": {}}}}));

    assert_eq!(variable, None);
    assert_eq!(predicate, None);
}

#[test]
fn test_classify_unhandled_expressions() {
    let combine = classify_json(json!({"expression": {"combine": {"operator": "+="}}}));
    let implication = classify_json(json!({"expression": {"implication": {}}}));
    let subscript = classify_json(json!({"expression": {"subscript": {}}}));

    assert_eq!(combine.unwrap().to_string(), "Unhandled Expression: Combine");
    assert_eq!(
        implication.unwrap().to_string(),
        "Unhandled Expression: Implication"
    );
    assert_eq!(subscript.unwrap().to_string(), "UNCLEAR");
}

#[test]
fn test_classify_unrecognized_expression() {
    let ty = classify_json(json!({"expression": {"call": {"predicate_name": "F"}}}));

    assert_eq!(
        ty,
        Some(FieldType::Unresolved(Unresolved::Unrecognized(
            "call".to_string()
        )))
    );
}

#[test]
fn test_classify_unknown_literal_is_none() {
    assert_eq!(
        classify_json(json!({"expression": {"literal": {"the_date": {}}}})),
        None
    );
}

#[test]
fn test_classify_missing_expression_is_none() {
    assert_eq!(classify_json(json!({"not_expression": 1})), None);
    assert_eq!(classify_json(json!(null)), None);
}

#[test]
fn test_annotate_keeps_declared_types() {
    let mut call = Call::new(
        "R(a:, b:)",
        vec![
            Field::typed("a", FieldType::Column("INT64".to_string())),
            Field::new(
                "b",
                value(json!({"expression": {"literal": {"the_string": {}}}})),
            ),
            Field::named("c"),
        ],
    );

    annotate(&mut call);

    let types: Vec<_> = call.fields.iter().map(|f| f.ty.clone()).collect();
    assert_eq!(
        types,
        vec![
            Some(FieldType::Column("INT64".to_string())),
            Some(FieldType::String),
            None,
        ]
    );
}
