//! External table schemas.
//!
//! Predicate names wrapped in backticks (`` `dataset.table` `` or
//! `` `project.dataset.table` ``) denote database tables. Their reference
//! signature is the table's column list, fetched once per run through a
//! [`SchemaResolver`].

use lgc_ir::{Call, Field, FieldType};
use serde::Deserialize;
use thiserror::Error;

/// One column as reported by a schema catalog.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Deserialize)]
pub struct SchemaField {
    pub field: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl SchemaField {
    pub fn new(field: impl Into<String>, ty: impl Into<String>) -> Self {
        SchemaField {
            field: field.into(),
            ty: ty.into(),
        }
    }
}

/// Failure to obtain a table schema. Aborts the run.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("`{name}` is not a table path; expected `dataset.table` or `project.dataset.table`")]
    InvalidPath { name: String },
    #[error("no schema catalog configured for table {table}")]
    NoCatalog { table: String },
    #[error("table {table} not found in schema catalog")]
    UnknownTable { table: String },
    #[error("failed to read schema catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed schema from {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("schema query `{command}` failed: {detail}")]
    Query { command: String, detail: String },
}

/// Source of table schemas.
///
/// Implementations may block (network, subprocess). The checker calls
/// `fetch_schema` at most once per table per run.
pub trait SchemaResolver {
    fn fetch_schema(&mut self, table: &str) -> Result<Vec<SchemaField>, SchemaError>;
}

impl<R: SchemaResolver + ?Sized> SchemaResolver for &mut R {
    fn fetch_schema(&mut self, table: &str) -> Result<Vec<SchemaField>, SchemaError> {
        (**self).fetch_schema(table)
    }
}

/// Whether a predicate name denotes an external table.
pub fn is_external_table(name: &str) -> bool {
    name.len() >= 2 && name.starts_with('`') && name.ends_with('`')
}

/// The reference call installed for a fetched table.
pub fn schema_call(table: &str, schema: Vec<SchemaField>) -> Call {
    Call::new(
        format!("Fetch {table}"),
        schema
            .into_iter()
            .map(|column| Field::typed(column.field, FieldType::Column(column.ty)))
            .collect(),
    )
}

/// A parsed table path and the catalog query that lists its columns.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SchemaQuery {
    pub project: Option<String>,
    pub dataset: String,
    pub table: String,
}

impl SchemaQuery {
    /// Parse a backtick-quoted table name.
    pub fn parse(name: &str) -> Result<SchemaQuery, SchemaError> {
        let invalid = || SchemaError::InvalidPath {
            name: name.to_string(),
        };
        let path = name
            .strip_prefix('`')
            .and_then(|rest| rest.strip_suffix('`'))
            .ok_or_else(invalid)?;

        let parts: Vec<&str> = path.split('.').collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(invalid());
        }
        match parts.as_slice() {
            [dataset, table] => Ok(SchemaQuery {
                project: None,
                dataset: (*dataset).to_string(),
                table: (*table).to_string(),
            }),
            [project, dataset, table] => Ok(SchemaQuery {
                project: Some((*project).to_string()),
                dataset: (*dataset).to_string(),
                table: (*table).to_string(),
            }),
            _ => Err(invalid()),
        }
    }

    /// Dotted path without backticks, e.g. `project.dataset.table`.
    pub fn path(&self) -> String {
        match &self.project {
            Some(project) => format!("{project}.{}.{}", self.dataset, self.table),
            None => format!("{}.{}", self.dataset, self.table),
        }
    }

    /// Column listing query against the dataset's information schema.
    pub fn sql(&self) -> String {
        let dataset = match &self.project {
            Some(project) => format!("`{project}`.{}", self.dataset),
            None => self.dataset.clone(),
        };
        format!(
            "SELECT COLUMN_NAME AS field, DATA_TYPE AS type \
             FROM {dataset}.INFORMATION_SCHEMA.COLUMNS \
             WHERE TABLE_NAME = \"{}\"",
            self.table
        )
    }
}

#[cfg(test)]
mod tests;
