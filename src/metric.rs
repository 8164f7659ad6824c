//! Edge lengths for uniformly spaced points.
//!
//! Vertex labels run over `1..=n`. On the line, label `i` sits at position `i`;
//! on the circle, label `i` sits at angle `2πi/n` and distances are measured in
//! units of the arc between neighbours.

use serde::{Deserialize, Serialize};

/// The metric space a tour is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Unit-spaced points on a line: `d(u, v) = |u - v|`.
    Line,
    /// Evenly spaced points on a circle: `d(u, v) = min(|u - v|, n - |u - v|)`.
    Circle,
}

impl Metric {
    /// Length of the edge `{u, v}` among `n` points.
    ///
    /// Symmetric in `u` and `v`.
    ///
    /// # Panics
    ///
    /// Panics if the labels are further apart than any two labels in `1..=n`.
    #[inline]
    #[track_caller]
    pub fn edge_cost(self, u: usize, v: usize, n: usize) -> usize {
        let diff = u.abs_diff(v);
        let back = arc_complement(diff, n);
        match self {
            Metric::Line => diff,
            Metric::Circle => diff.min(back),
        }
    }
}

/// Whether a chord with label difference `diff` is shorter going around the
/// back of the circle than along the labels.
///
/// A chord of length exactly `n/2` does not wrap.
///
/// # Panics
///
/// Panics unless `diff < n`.
#[inline]
#[track_caller]
pub fn wraps(diff: usize, n: usize) -> bool {
    diff > arc_complement(diff, n)
}

/// Length of the arc `n - diff` going the other way round.
///
/// # Panics
///
/// Panics unless `diff < n`; a larger gap means a label outside `1..=n`.
#[inline]
#[track_caller]
pub(crate) fn arc_complement(diff: usize, n: usize) -> usize {
    match n.checked_sub(diff) {
        Some(back) if back > 0 => back,
        _ => panic!("Precondition violated: label gap {diff} out of range for n = {n}"),
    }
}
