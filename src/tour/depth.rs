//! Depth parity of Hamiltonian cycles on the circle.
//!
//! Draw every edge of a cycle along its shorter arc. The depth of a segment
//! between neighbouring points is the number of edges passing over it. For
//! Hamiltonian cycles on evenly spaced points all segments share one parity,
//! so the cycle is classified by the reference segment `(1, 2)`: its depth is
//! the number of times vertex `1` is covered, plus the number of times vertex
//! `2` is covered, plus one if the edge `(1, 2)` itself is used.
//!
//! An edge of length exactly `n/2` can be drawn either way round at equal cost,
//! so a cycle containing one may be realisable with either parity. The
//! classification fixes one drawing: a half-length edge is non-wrapping,
//! except for the edge closing back into `1`, which is drawn wrapping.

use serde::{Deserialize, Serialize};

use super::cycle::check_start;
use crate::metric::{arc_complement, wraps};

/// Parity class shared by all segment depths of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthParity {
    /// Every segment is covered an odd number of times.
    Odd,
    /// Every segment is covered an even number of times.
    Even,
}

impl DepthParity {
    /// Parity of a raw depth count.
    pub const fn of_depth(depth: usize) -> Self {
        if depth % 2 == 1 {
            DepthParity::Odd
        } else {
            DepthParity::Even
        }
    }
}

/// Depth of the reference segment `(1, 2)` of `cycle`.
///
/// # Panics
///
/// Panics unless `cycle` has at least three vertices and starts at `1`.
#[track_caller]
pub fn reference_depth(cycle: &[usize]) -> usize {
    check_start(cycle);
    let n = cycle.len();
    let mut depth = 0;

    for (i, pair) in cycle.windows(2).enumerate() {
        let diff = pair[0].abs_diff(pair[1]);
        if wraps(diff, n) {
            // Any wrapping edge other than the one leaving 1 passes over 1.
            if i > 0 {
                depth += 1;
            }
        } else if i == 0 {
            // A non-wrapping edge out of 1 passes over (or ends at) 2.
            depth += 1;
        }
    }

    // Closing edge into 1; strict so that a half-length edge wraps here.
    let closing = cycle[n - 1].abs_diff(1);
    if closing < arc_complement(closing, n) {
        depth += 1;
    }

    depth
}

/// Whether `cycle` is an odd-depth tour.
///
/// # Panics
///
/// Panics unless `cycle` has at least three vertices and starts at `1`.
#[track_caller]
pub fn is_odd_depth_cycle(cycle: &[usize]) -> bool {
    DepthParity::of_depth(reference_depth(cycle)) == DepthParity::Odd
}
