#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_is_external_table() {
    assert!(is_external_table("`data.people`"));
    assert!(is_external_table("`proj.data.people`"));
    assert!(!is_external_table("People"));
    assert!(!is_external_table("`open"));
    assert!(!is_external_table("`"));
    assert!(!is_external_table(""));
}

#[test]
fn test_parse_dataset_table() {
    let query = SchemaQuery::parse("`data.people`").unwrap();

    assert_eq!(query.project, None);
    assert_eq!(query.path(), "data.people");
    assert_eq!(
        query.sql(),
        "SELECT COLUMN_NAME AS field, DATA_TYPE AS type \
         FROM data.INFORMATION_SCHEMA.COLUMNS WHERE TABLE_NAME = \"people\""
    );
}

#[test]
fn test_parse_project_dataset_table() {
    let query = SchemaQuery::parse("`proj.data.people`").unwrap();

    assert_eq!(query.project.as_deref(), Some("proj"));
    assert_eq!(query.path(), "proj.data.people");
    assert_eq!(
        query.sql(),
        "SELECT COLUMN_NAME AS field, DATA_TYPE AS type \
         FROM `proj`.data.INFORMATION_SCHEMA.COLUMNS WHERE TABLE_NAME = \"people\""
    );
}

#[test]
fn test_parse_rejects_bad_paths() {
    for name in ["people", "`people`", "`a.b.c.d`", "`a..b`", "`.b`"] {
        let err = SchemaQuery::parse(name).unwrap_err();
        assert!(
            matches!(err, SchemaError::InvalidPath { .. }),
            "{name}: {err}"
        );
    }
}

#[test]
fn test_schema_call() {
    let call = schema_call(
        "`data.people`",
        vec![
            SchemaField::new("name", "STRING"),
            SchemaField::new("age", "INT64"),
        ],
    );

    assert_eq!(call.full_text, "Fetch `data.people`");
    assert_eq!(call.field_names().collect::<Vec<_>>(), vec!["name", "age"]);
    assert_eq!(call.fields[1].ty, Some(FieldType::Column("INT64".to_string())));
}

#[test]
fn test_schema_field_deserialize() {
    let fields: Vec<SchemaField> =
        serde_json::from_str(r#"[{"field": "name", "type": "STRING"}]"#).unwrap();

    assert_eq!(fields, vec![SchemaField::new("name", "STRING")]);
}
