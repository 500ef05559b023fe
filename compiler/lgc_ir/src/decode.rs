//! Decoding the parser's JSON output into syntax tree nodes.
//!
//! This is the only place that probes raw keys. A JSON object with a
//! non-null `predicate_name` becomes a [`SyntaxNode::Call`]; its fields come
//! from `record.field_value`. Everything else maps one-to-one.
//!
//! Any structural surprise is a [`DecodeError`] and aborts the run.

use serde_json::Value;
use thiserror::Error;

use crate::{CallNode, Field, Mapping, RuleEntry, Scalar, SyntaxNode};

/// Malformed parser output.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("syntax tree must be a sequence of rule entries, found {found}")]
    NotASequence { found: &'static str },
    #[error("rule entry {index} must be a mapping, found {found}")]
    EntryNotMapping { index: usize, found: &'static str },
    #[error("`full_text` of rule entry {index} must be a string, found {found}")]
    FullText { index: usize, found: &'static str },
    #[error("`predicate_name` must be a string, found {found}")]
    PredicateName { found: &'static str },
    #[error("`record` of `{predicate}` must be a mapping, found {found}")]
    Record {
        predicate: String,
        found: &'static str,
    },
    #[error("`field_value` of `{predicate}` must be a sequence, found {found}")]
    FieldValue {
        predicate: String,
        found: &'static str,
    },
    #[error("field {index} of `{predicate}` must be a mapping, found {found}")]
    FieldItem {
        predicate: String,
        index: usize,
        found: &'static str,
    },
    #[error("field {index} of `{predicate}` has no string or number `field` name")]
    FieldName { predicate: String, index: usize },
}

/// Decode a JSON document holding a sequence of rule entries.
pub fn decode_entries(source: &str) -> Result<Vec<RuleEntry>, DecodeError> {
    let value: Value = serde_json::from_str(source)?;
    decode_value(value)
}

/// Decode an already-parsed JSON value holding a sequence of rule entries.
pub fn decode_value(value: Value) -> Result<Vec<RuleEntry>, DecodeError> {
    let Value::Array(items) = value else {
        return Err(DecodeError::NotASequence {
            found: kind_of(&value),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode_entry(index, item))
        .collect()
}

fn decode_entry(index: usize, value: Value) -> Result<RuleEntry, DecodeError> {
    let Value::Object(object) = value else {
        return Err(DecodeError::EntryNotMapping {
            index,
            found: kind_of(&value),
        });
    };

    let (mut full_text, mut head, mut body) = (None, None, None);
    for (key, value) in object {
        match key.as_str() {
            "full_text" => full_text = Some(value),
            "head" => head = Some(value),
            "body" => body = Some(value),
            _ => {}
        }
    }

    let full_text = match full_text {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => {
            return Err(DecodeError::FullText {
                index,
                found: kind_of(&other),
            })
        }
    };
    let head = match head {
        Some(value) => SyntaxNode::from_json(value)?,
        None => SyntaxNode::empty(),
    };
    let body = match body {
        Some(value) => SyntaxNode::from_json(value)?,
        None => SyntaxNode::empty(),
    };

    Ok(RuleEntry {
        full_text,
        head,
        body,
    })
}

impl SyntaxNode {
    /// Decode a JSON value, recognizing predicate calls.
    pub fn from_json(value: Value) -> Result<SyntaxNode, DecodeError> {
        Ok(match value {
            Value::Null => SyntaxNode::Scalar(Scalar::Null),
            Value::Bool(b) => SyntaxNode::Scalar(Scalar::Bool(b)),
            Value::Number(n) => SyntaxNode::Scalar(Scalar::Number(n.to_string())),
            Value::String(s) => SyntaxNode::Scalar(Scalar::String(s)),
            Value::Array(items) => SyntaxNode::Sequence(
                items
                    .into_iter()
                    .map(SyntaxNode::from_json)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(object) => {
                let entries = object
                    .into_iter()
                    .map(|(key, value)| Ok((key, SyntaxNode::from_json(value)?)))
                    .collect::<Result<Mapping, DecodeError>>()?;
                decode_mapping(entries)?
            }
        })
    }
}

/// Lift a decoded mapping into a call node when it names a predicate.
fn decode_mapping(entries: Mapping) -> Result<SyntaxNode, DecodeError> {
    let name = match entries.get("predicate_name") {
        None | Some(SyntaxNode::Scalar(Scalar::Null)) => return Ok(SyntaxNode::Mapping(entries)),
        Some(SyntaxNode::Scalar(Scalar::String(name))) => name.clone(),
        Some(other) => {
            return Err(DecodeError::PredicateName {
                found: node_kind(other),
            })
        }
    };

    let fields = match entries.get("record") {
        None | Some(SyntaxNode::Scalar(Scalar::Null)) => Vec::new(),
        Some(record) => {
            let Some(record) = record.as_mapping() else {
                return Err(DecodeError::Record {
                    predicate: name,
                    found: node_kind(record),
                });
            };
            decode_fields(&name, record)?
        }
    };

    Ok(SyntaxNode::Call(Box::new(CallNode {
        name,
        fields,
        entries,
    })))
}

fn decode_fields(predicate: &str, record: &Mapping) -> Result<Vec<Field>, DecodeError> {
    let items = match record.get("field_value") {
        None | Some(SyntaxNode::Scalar(Scalar::Null)) => return Ok(Vec::new()),
        Some(SyntaxNode::Sequence(items)) => items,
        Some(other) => {
            return Err(DecodeError::FieldValue {
                predicate: predicate.to_string(),
                found: node_kind(other),
            })
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Some(item) = item.as_mapping() else {
                return Err(DecodeError::FieldItem {
                    predicate: predicate.to_string(),
                    index,
                    found: node_kind(item),
                });
            };
            let name = match item.get("field") {
                Some(SyntaxNode::Scalar(Scalar::String(name) | Scalar::Number(name))) => {
                    name.clone()
                }
                _ => {
                    return Err(DecodeError::FieldName {
                        predicate: predicate.to_string(),
                        index,
                    })
                }
            };
            let value = item
                .get("value")
                .cloned()
                .unwrap_or(SyntaxNode::Scalar(Scalar::Null));
            Ok(Field::new(name, value))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

fn node_kind(node: &SyntaxNode) -> &'static str {
    match node {
        SyntaxNode::Sequence(_) => "a sequence",
        SyntaxNode::Mapping(_) | SyntaxNode::Call(_) => "a mapping",
        SyntaxNode::Scalar(Scalar::Null) => "null",
        SyntaxNode::Scalar(Scalar::Bool(_)) => "a boolean",
        SyntaxNode::Scalar(Scalar::Number(_)) => "a number",
        SyntaxNode::Scalar(Scalar::String(_)) => "a string",
    }
}
