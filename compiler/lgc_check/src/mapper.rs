//! Grouping of every predicate call by name, without validation.

use lgc_ir::{Call, RuleEntry};
use rustc_hash::FxHashMap;

use crate::classify::annotate;
use crate::scan::{scan_entry, PredicateCall};
use crate::schema::{is_external_table, schema_call};
use crate::{SchemaError, SchemaResolver};

/// Calls per predicate name, names in first-seen order.
#[derive(Clone, Default, Debug)]
pub struct PredicateMap {
    order: Vec<String>,
    calls: FxHashMap<String, Vec<Call>>,
}

impl PredicateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call to its predicate's bucket. Unnamed calls are dropped.
    pub fn add(&mut self, name: &str, call: Call) {
        if name.is_empty() {
            return;
        }
        match self.calls.get_mut(name) {
            Some(bucket) => bucket.push(call),
            None => {
                self.order.push(name.to_string());
                self.calls.insert(name.to_string(), vec![call]);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Call]> {
        self.calls.get(name).map(Vec::as_slice)
    }

    /// Buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Call])> {
        self.order.iter().filter_map(|name| {
            self.calls
                .get(name)
                .map(|calls| (name.as_str(), calls.as_slice()))
        })
    }

    /// Number of distinct predicates.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Classify the value of every untyped field.
    pub fn annotate_types(&mut self) {
        for call in self.calls.values_mut().flatten() {
            annotate(call);
        }
    }
}

/// Map every predicate call in `entries` by name.
///
/// Imperative (`@`) predicates are kept. Each occurrence of a table name
/// fetches its schema again and records it as a `Fetch` call just before
/// the occurrence itself.
///
/// # Errors
///
/// Fails on the first schema that cannot be fetched.
#[tracing::instrument(level = "debug", skip_all, fields(entries = entries.len()))]
pub fn map_predicates<R: SchemaResolver>(
    entries: &[RuleEntry],
    mut resolver: R,
) -> Result<PredicateMap, SchemaError> {
    let mut map = PredicateMap::new();
    for entry in entries {
        for PredicateCall { name, fields } in scan_entry(entry) {
            if is_external_table(&name) {
                tracing::debug!(table = %name, "fetching table schema");
                let schema = resolver.fetch_schema(&name)?;
                map.add(&name, schema_call(&name, schema));
            }
            map.add(&name, Call::new(entry.full_text.clone(), fields));
        }
    }
    Ok(map)
}
