//! Per-run checker state: reference signatures and unresolved calls.

use lgc_ir::Call;
use rustc_hash::FxHashMap;

use crate::operators;

/// Reference signature for each predicate, keyed by name.
///
/// Once installed, a reference is never replaced during a run.
#[derive(Clone, Default, Debug)]
pub struct PredicateReferences {
    map: FxHashMap<String, Call>,
}

impl PredicateReferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a reference unless the predicate already has one.
    ///
    /// Returns whether `call` was installed.
    pub fn install(&mut self, name: impl Into<String>, call: Call) -> bool {
        let name = name.into();
        if self.map.contains_key(&name) {
            return false;
        }
        tracing::trace!(predicate = %name, "installed reference");
        self.map.insert(name, call);
        true
    }

    /// Install the built-in operator signatures, overwriting any entry
    /// already present under an operator name.
    pub fn seed_operators(&mut self) {
        for (name, call) in operators::builtin_references() {
            self.map.insert(name.to_string(), call);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Call> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Predicate names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Calls seen before their predicate had a reference, in encounter order.
///
/// A bucket is removed as soon as its predicate receives a reference; what
/// remains after a run was never checked.
#[derive(Clone, Default, Debug)]
pub struct PendingCalls {
    map: FxHashMap<String, Vec<Call>>,
}

impl PendingCalls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, call: Call) {
        self.map.entry(name.into()).or_default().push(call);
    }

    /// Remove and return the bucket for `name`.
    pub fn take(&mut self, name: &str) -> Vec<Call> {
        self.map.remove(name).unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> &[Call] {
        self.map.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of predicates with pending calls.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Buckets sorted by predicate name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Call])> {
        let mut buckets: Vec<_> = self
            .map
            .iter()
            .map(|(name, calls)| (name.as_str(), calls.as_slice()))
            .collect();
        buckets.sort_unstable_by_key(|(name, _)| *name);
        buckets.into_iter()
    }
}

#[cfg(test)]
mod tests;
