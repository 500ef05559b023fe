//! Predicate call-site consistency checking.
//!
//! Every predicate call in a parsed logic query is compared against a
//! reference signature for that predicate: the first call that opens a rule
//! (its *header*), a fetched external table schema, or a built-in operator
//! signature.
//!
//! # Architecture
//!
//! ```text
//! RuleEntry (head, body)
//!     │
//!     ▼
//! scan_entry() ──► [PredicateCall]        (depth-first, head then body)
//!     │
//!     ▼
//! PredicateChecker ──► references / pending / errors
//!     │   ├── SchemaResolver   (first sighting of `dataset.table`)
//!     │   └── validate()       (header or body rules, operator rules)
//!     ▼
//! CheckResult
//! ```
//!
//! `map_predicates()` is the validation-free sibling used for inspection:
//! it groups every call by predicate name.
//!
//! # State
//!
//! Reference and pending maps live in the `PredicateChecker` for exactly one
//! run. Independent runs start from fresh, empty maps.

mod checker;
mod classify;
mod mapper;
pub mod operators;
mod problem;
mod references;
mod scan;
mod schema;
mod validate;

pub use checker::{verify_predicates, CheckResult, PredicateChecker};
pub use classify::{annotate, classify, classify_expression};
pub use mapper::{map_predicates, PredicateMap};
pub use problem::{CallProblem, ProblemKind, ValidationError};
pub use references::{PendingCalls, PredicateReferences};
pub use scan::{scan, scan_entry, PredicateCall};
pub use schema::{
    is_external_table, schema_call, SchemaError, SchemaField, SchemaQuery, SchemaResolver,
};
pub use validate::validate;
