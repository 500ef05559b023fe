//! LGC IR - Syntax Tree Types
//!
//! This crate contains the data structures shared by every phase of the
//! predicate checker:
//! - `SyntaxNode` for the parser's tree (sequences, mappings, calls, scalars)
//! - `RuleEntry` for one parsed rule or fact
//! - `Field` and `Call` for predicate invocations
//! - `Expression` and `Literal` for field values
//! - `FieldType` for classified field values
//!
//! # Design Philosophy
//!
//! - **Decode Once**: the parser's JSON is turned into a closed tagged union
//!   at the boundary. Later phases match on variants instead of probing keys.
//! - **Owned Trees**: nodes own their children, so the tree is acyclic by
//!   construction.
//! - **Encounter Order**: mapping entries keep the order the parser wrote them.

mod decode;
mod entry;
mod expr;
mod field_type;
mod node;
pub mod visitor;

pub use decode::{decode_entries, decode_value, DecodeError};
pub use entry::{Call, Field, RuleEntry};
pub use expr::{Expression, Literal};
pub use field_type::{FieldType, Unresolved};
pub use node::{CallNode, Mapping, Scalar, SyntaxNode};
