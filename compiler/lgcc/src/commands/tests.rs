#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_parse_defaults() {
    let options = CommandOptions::parse(&[]).unwrap();

    assert_eq!(options, CommandOptions::default());
    assert_eq!(options.input_name(), "<stdin>");
}

#[test]
fn test_parse_all_options() {
    let options = CommandOptions::parse(&args(&[
        "--format=json",
        "tree.json",
        "--catalog=tables.json",
        "--color=never",
    ]))
    .unwrap();

    assert_eq!(options.input.as_deref(), Some("tree.json"));
    assert_eq!(options.catalog.as_deref(), Some("tables.json"));
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.color, ColorMode::Never);
    assert_eq!(options.input_name(), "tree.json");
}

#[test]
fn test_parse_dash_reads_stdin() {
    let options = CommandOptions::parse(&args(&["-", "--schema-command=bq query"])).unwrap();

    assert_eq!(options.input, None);
    assert_eq!(options.schema_command.as_deref(), Some("bq query"));
}

#[test]
fn test_parse_rejects_bad_input() {
    for bad in [
        vec!["--format=yaml"],
        vec!["--color=sometimes"],
        vec!["--verbose"],
        vec!["a.json", "b.json"],
    ] {
        let err = CommandOptions::parse(&args(&bad)).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)), "{bad:?}: {err}");
    }
}

#[test]
fn test_read_missing_file() {
    let err = read_input(Some("/nonexistent/tree.json")).unwrap_err();

    assert!(err.to_string().starts_with("failed to read /nonexistent/tree.json"));
}

#[test]
fn test_explain_known_code() {
    let doc = explain_error("e1004").unwrap();

    assert!(doc.starts_with("# E1004"));
}

#[test]
fn test_explain_unknown_code() {
    let err = explain_error("X9999").unwrap_err();

    assert!(err.to_string().starts_with("unknown error code: X9999"));
}
