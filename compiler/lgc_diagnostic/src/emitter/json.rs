//! JSON Emitter
//!
//! Machine-readable diagnostic output. Diagnostics are buffered and written
//! as a single JSON document on `flush`:
//!
//! ```text
//! {"diagnostics": [...], "error_count": 1, "warning_count": 0}
//! ```

use std::io::Write;

use serde::Serialize;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    diagnostics: Vec<DiagnosticJson>,
    error_count: usize,
    warning_count: usize,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(DiagnosticJson::from(diagnostic));
    }

    fn flush(&mut self) {
        let document = DocumentJson {
            diagnostics: &self.diagnostics,
            error_count: self.error_count,
            warning_count: self.warning_count,
        };
        let rendered = serde_json::to_string_pretty(&document).unwrap_or_else(|_| {
            // Fallback if serialization somehow fails
            format!(
                r#"{{"error_count":{},"warning_count":{}}}"#,
                self.error_count, self.warning_count
            )
        });
        let _ = writeln!(self.writer, "{rendered}");
        let _ = self.writer.flush();
        self.diagnostics.clear();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        self.error_count = error_count;
        self.warning_count = warning_count;
    }
}

// Internal JSON representation types

#[derive(Serialize)]
struct DocumentJson<'a> {
    diagnostics: &'a [DiagnosticJson],
    error_count: usize,
    warning_count: usize,
}

#[derive(Serialize)]
struct DiagnosticJson {
    code: &'static str,
    severity: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    labels: Vec<LabelJson>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    help: Vec<String>,
}

#[derive(Serialize)]
struct LabelJson {
    snippet: String,
    message: String,
    primary: bool,
}

impl From<&Diagnostic> for DiagnosticJson {
    fn from(diag: &Diagnostic) -> Self {
        DiagnosticJson {
            code: diag.code.as_str(),
            severity: diag.severity.as_str(),
            message: diag.message.clone(),
            labels: diag.labels.iter().map(LabelJson::from).collect(),
            notes: diag.notes.clone(),
            help: diag.suggestions.clone(),
        }
    }
}

impl From<&Label> for LabelJson {
    fn from(label: &Label) -> Self {
        LabelJson {
            snippet: label.snippet.clone(),
            message: label.message.clone(),
            primary: label.is_primary,
        }
    }
}
