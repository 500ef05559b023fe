//! Schema resolvers selected on the command line.
//!
//! - `--catalog=<file>`: a JSON object mapping table paths to column lists
//! - `--schema-command=<cmd>`: runs `<cmd> <sql>` and reads columns from stdout
//!
//! With neither, any table reference fails the run.

use std::process::Command;

use lgc_check::{SchemaError, SchemaField, SchemaQuery, SchemaResolver};
use rustc_hash::FxHashMap;

use crate::CliError;

/// Column lists read from a catalog file.
#[derive(Clone, Debug)]
pub struct CatalogFile {
    tables: FxHashMap<String, Vec<SchemaField>>,
}

impl CatalogFile {
    /// Read and parse a catalog file.
    pub fn load(path: &str) -> Result<CatalogFile, SchemaError> {
        let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::parse(path, &source)
    }

    /// Parse catalog JSON. Keys may be written with or without backticks.
    pub fn parse(origin: &str, source: &str) -> Result<CatalogFile, SchemaError> {
        let raw: FxHashMap<String, Vec<SchemaField>> =
            serde_json::from_str(source).map_err(|source| SchemaError::Malformed {
                origin: origin.to_string(),
                source,
            })?;
        let tables = raw
            .into_iter()
            .map(|(path, columns)| (path.trim_matches('`').to_string(), columns))
            .collect();
        Ok(CatalogFile { tables })
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl SchemaResolver for CatalogFile {
    fn fetch_schema(&mut self, table: &str) -> Result<Vec<SchemaField>, SchemaError> {
        let query = SchemaQuery::parse(table)?;
        tracing::debug!(table, path = %query.path(), "looking up table in catalog");
        self.tables
            .get(&query.path())
            .cloned()
            .ok_or_else(|| SchemaError::UnknownTable {
                table: table.to_string(),
            })
    }
}

/// External program that answers schema queries.
///
/// The command line is split on whitespace; the SQL text is appended as
/// the last argument. Stdout must hold a JSON `[{"field", "type"}]` array.
#[derive(Clone, Debug)]
pub struct QueryCommand {
    program: String,
    args: Vec<String>,
}

impl QueryCommand {
    /// Returns `None` for a blank command line.
    pub fn parse(command_line: &str) -> Option<QueryCommand> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(QueryCommand {
            program,
            args: words.collect(),
        })
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl SchemaResolver for QueryCommand {
    fn fetch_schema(&mut self, table: &str) -> Result<Vec<SchemaField>, SchemaError> {
        let sql = SchemaQuery::parse(table)?.sql();
        tracing::debug!(table, sql = %sql, "running schema query");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&sql)
            .output()
            .map_err(|e| SchemaError::Query {
                command: self.command_line(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SchemaError::Query {
                command: self.command_line(),
                detail: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|source| SchemaError::Malformed {
            origin: self.command_line(),
            source,
        })
    }
}

/// The resolver chosen by command-line options.
#[derive(Clone, Debug)]
pub enum SchemaSource {
    Unconfigured,
    Catalog(CatalogFile),
    Command(QueryCommand),
}

impl SchemaSource {
    /// Build from `--catalog` and `--schema-command` values.
    pub fn from_options(
        catalog: Option<&str>,
        command: Option<&str>,
    ) -> Result<SchemaSource, CliError> {
        match (catalog, command) {
            (Some(_), Some(_)) => Err(CliError::Usage(
                "--catalog and --schema-command cannot be combined".to_string(),
            )),
            (Some(path), None) => Ok(SchemaSource::Catalog(CatalogFile::load(path)?)),
            (None, Some(command_line)) => QueryCommand::parse(command_line)
                .map(SchemaSource::Command)
                .ok_or_else(|| CliError::Usage("--schema-command must not be empty".to_string())),
            (None, None) => Ok(SchemaSource::Unconfigured),
        }
    }
}

impl SchemaResolver for SchemaSource {
    fn fetch_schema(&mut self, table: &str) -> Result<Vec<SchemaField>, SchemaError> {
        match self {
            SchemaSource::Unconfigured => Err(SchemaError::NoCatalog {
                table: table.to_string(),
            }),
            SchemaSource::Catalog(catalog) => catalog.fetch_schema(table),
            SchemaSource::Command(command) => command.fetch_schema(table),
        }
    }
}
