//! Reference resolution and call checking across rule entries.
//!
//! Per predicate name, a run moves through three states:
//!
//! ```text
//! Unseen ──body call──► Pending ──header call──► Resolved
//!    │                                              ▲
//!    └──────────── header call / table fetch ───────┘
//! ```
//!
//! Calls seen while Pending are buffered and validated against the
//! reference once a header call installs it. Names still Pending at the end
//! of a run were never checked.

use lgc_ir::{Call, RuleEntry};
use rustc_hash::FxHashSet;

use crate::scan::{scan_entry, PredicateCall};
use crate::schema::{is_external_table, schema_call};
use crate::{
    validate, CallProblem, PendingCalls, PredicateReferences, SchemaError, SchemaResolver,
    ValidationError,
};

/// Outcome of a completed run.
#[derive(Clone, Debug)]
pub struct CheckResult {
    /// In detection order.
    pub errors: Vec<ValidationError>,
    pub references: PredicateReferences,
    /// Calls whose predicate never received a reference.
    pub pending: PendingCalls,
}

impl CheckResult {
    /// Number of errors that are not pure warnings.
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|e| !e.is_warning()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Checks predicate calls of rule entries, one entry at a time.
///
/// The state maps are supplied by the caller; [`PredicateChecker::new`]
/// starts from empty ones. Built-in operators are seeded on construction.
pub struct PredicateChecker<R> {
    references: PredicateReferences,
    pending: PendingCalls,
    errors: Vec<ValidationError>,
    resolver: R,
}

impl<R: SchemaResolver> PredicateChecker<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_state(PredicateReferences::new(), PendingCalls::new(), resolver)
    }

    pub fn with_state(
        mut references: PredicateReferences,
        pending: PendingCalls,
        resolver: R,
    ) -> Self {
        references.seed_operators();
        PredicateChecker {
            references,
            pending,
            errors: Vec::new(),
            resolver,
        }
    }

    /// Check every entry in order.
    ///
    /// # Errors
    ///
    /// Fails on the first schema that cannot be fetched.
    #[tracing::instrument(level = "debug", skip_all, fields(entries = entries.len()))]
    pub fn check_entries(&mut self, entries: &[RuleEntry]) -> Result<(), SchemaError> {
        for entry in entries {
            self.check_entry(entry)?;
        }
        Ok(())
    }

    /// Check the calls of one entry. Its first checked call is the header.
    pub fn check_entry(&mut self, entry: &RuleEntry) -> Result<(), SchemaError> {
        tracing::debug!(rule = %entry.full_text, "checking entry");
        let mut is_header = true;
        for PredicateCall { name, fields } in scan_entry(entry) {
            if name.is_empty() || name.starts_with('@') {
                tracing::debug!(predicate = %name, "ignoring imperative predicate");
                continue;
            }
            let call = Call::new(entry.full_text.clone(), fields);
            self.check_call(name, call, is_header)?;
            is_header = false;
        }
        Ok(())
    }

    fn check_call(&mut self, name: String, call: Call, is_header: bool) -> Result<(), SchemaError> {
        tracing::trace!(predicate = %name, is_header, "checking call");

        if is_external_table(&name) && !self.references.contains(&name) {
            tracing::debug!(table = %name, "creating reference for database table");
            let schema = self.resolver.fetch_schema(&name)?;
            let reference = schema_call(&name, schema);
            self.references.install(name.clone(), reference);
        }

        if let Some(field) = first_duplicate(&call) {
            self.errors.push(ValidationError::new(
                &name,
                None,
                call.clone(),
                vec![CallProblem::DuplicateField { field }],
            ));
        }

        if let Some(reference) = self.references.get(&name) {
            self.errors.extend(validate(&name, reference, &call, is_header));
        } else if is_header {
            for buffered in self.pending.take(&name) {
                self.errors.extend(validate(&name, &call, &buffered, false));
            }
            self.references.install(name, call);
        } else {
            tracing::trace!(predicate = %name, "no reference yet, call pending");
            self.pending.push(name, call);
        }
        Ok(())
    }

    /// Errors found so far, in detection order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn references(&self) -> &PredicateReferences {
        &self.references
    }

    pub fn pending(&self) -> &PendingCalls {
        &self.pending
    }

    pub fn finish(self) -> CheckResult {
        CheckResult {
            errors: self.errors,
            references: self.references,
            pending: self.pending,
        }
    }
}

/// The first field name that repeats an earlier one.
fn first_duplicate(call: &Call) -> Option<String> {
    let mut seen = FxHashSet::default();
    call.field_names()
        .find(|name| !seen.insert(*name))
        .map(str::to_string)
}

/// Check `entries` starting from the given state.
///
/// # Errors
///
/// Fails on the first schema that cannot be fetched; the errors collected up
/// to that point are discarded.
pub fn verify_predicates<R: SchemaResolver>(
    entries: &[RuleEntry],
    references: PredicateReferences,
    pending: PendingCalls,
    resolver: R,
) -> Result<CheckResult, SchemaError> {
    let mut checker = PredicateChecker::with_state(references, pending, resolver);
    checker.check_entries(entries)?;
    Ok(checker.finish())
}
