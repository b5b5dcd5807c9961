//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::automaton::AutomatonError;

/// Unwraps an automaton built from parts that are valid by construction.
///
/// Thompson construction and the conversions only ever reference states and
/// symbols of their own inputs, so a construction failure here is a bug.
#[inline]
pub(crate) fn ensure_valid<T>(built: Result<T, AutomatonError>, stage: &str) -> T {
    built.unwrap_or_else(|err| panic!("broken {stage} invariant: produced an invalid automaton: {err}"))
}
