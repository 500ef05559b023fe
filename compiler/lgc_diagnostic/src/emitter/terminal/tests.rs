#![allow(clippy::unwrap_used)]

use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1004)
        .with_message("Unrecognized field name 'years'.")
        .with_label("Adult(name:) :- Person(name:, years:);", "call to `Person`")
        .with_secondary_label("Person(name:, age:) :- People(name:, age:);", "reference")
        .with_note("reference fields: name, age")
        .with_suggestion("check the spelling of the field")
}

#[test]
fn test_terminal_emitter_no_color() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);

    emitter.emit(&sample_diagnostic());
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("error[E1004]: Unrecognized field name 'years'."));
    assert!(text.contains("--> call to `Person`"));
    assert!(text.contains("|    Adult(name:) :- Person(name:, years:);"));
    assert!(text.contains("note: reference fields: name, age"));
    assert!(text.contains("help: check the spelling"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);

    emitter.emit(&sample_diagnostic());
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1004"));
}

#[test]
fn test_color_mode_auto_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

#[test]
fn test_emit_summary() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(2, 1);
    emitter.emit_summary(0, 3);
    emitter.emit_summary(0, 0);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "error: 2 inconsistent calls; 1 warning emitted\nwarning: 3 warnings emitted\n"
    );
}

#[test]
fn test_emit_all() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);

    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
        Diagnostic::warning(ErrorCode::W2001).with_message("warning 2"),
    ];
    emitter.emit_all(&diagnostics);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("error[E1001]: error 1"));
    assert!(text.contains("warning[W2001]: warning 2"));
}
