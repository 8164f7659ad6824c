//! Precondition checks for raw label sequences.
//!
//! Unlike debug-only assertions these stay on in release builds: a malformed
//! tour handed to a verification routine must abort the run, not skew it.

/// Panics with `message` unless `condition` holds.
#[inline(always)]
#[track_caller]
pub(crate) fn precondition(condition: bool, message: &str) {
    assert!(condition, "Precondition violated: {message}");
}

/// Panics unless two tours have the same vertex count.
#[inline]
#[track_caller]
pub(crate) fn same_length(first: &[usize], second: &[usize]) {
    assert!(
        first.len() == second.len(),
        "Precondition violated: tours must have equal length (got {} and {})",
        first.len(),
        second.len()
    );
}
