//! Existence search for edge-disjoint tour pairs.
//!
//! The driver materialises the canonical tour set for `n` once, then visits
//! every unordered pair `(i, j)` with `i < j` in enumeration order and stops at
//! the first pair satisfying the [`SearchCriteria`]. The work is quadratic in
//! the number of tours and factorial in `n`; it is meant for `n <= ~11`.
//!
//! | Operation | Tours | Predicate |
//! |-----------|-------|-----------|
//! | [`disjoint_paths_exist`] | paths | disjoint |
//! | [`disjoint_paths_exist_within_bound`] | paths | disjoint, cost < bound |
//! | [`disjoint_cycles_exist`] | cycles | disjoint |
//! | [`disjoint_cycles_exist_within_bound`] | cycles | both odd-depth, disjoint, cost < bound |

use crate::enumerate::{enumerate_cycles, enumerate_paths};
use crate::tour::{costs_within_bound, sequences_disjoint, HamiltonianCycle, Tour, TourKind};

mod witness;


pub use witness::Witness;

/// Conditions a pair of tours must meet, in addition to sharing no edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchCriteria {
    /// Strict upper bound on the combined cost of the pair.
    pub bound: Option<f64>,
    /// Only consider odd-depth tours. Meaningful for cycles only.
    pub odd_depth_only: bool,
}

impl SearchCriteria {
    /// Disjointness alone.
    pub const fn disjoint() -> Self {
        Self {
            bound: None,
            odd_depth_only: false,
        }
    }

    /// Disjointness with combined cost strictly below `bound`.
    pub const fn within(bound: f64) -> Self {
        Self {
            bound: Some(bound),
            odd_depth_only: false,
        }
    }

    /// Restricts the search to odd-depth tours.
    #[must_use]
    pub const fn odd_depth(mut self) -> Self {
        self.odd_depth_only = true;
        self
    }
}

/// Finds the first pair of tours, in enumeration order, that share no edge and
/// cost strictly less than `bound` together (when a bound is given).
///
/// Tours rejected by `admit` never take part in a pair. All tours must have the
/// same vertex count.
///
/// # Panics
///
/// Panics if two compared tours have different vertex counts.
pub fn find_disjoint_pair<T, F>(tours: &[T], bound: Option<f64>, admit: F) -> Option<Witness>
where
    T: Tour,
    F: Fn(&T) -> bool,
{
    let closed = T::KIND.is_closed();
    let candidates: Vec<(&T, usize)> = tours
        .iter()
        .filter(|&tour| admit(tour))
        .map(|tour| (tour, tour.cost()))
        .collect();
    log_event!(
        debug,
        kind = ?T::KIND,
        total = tours.len(),
        admitted = candidates.len(),
        "searching tour pairs"
    );

    for (i, &(first, first_cost)) in candidates.iter().enumerate() {
        for &(second, second_cost) in &candidates[i + 1..] {
            // Cost is cached, so the bound is the cheap half of the conjunction.
            if let Some(bound) = bound {
                if !costs_within_bound(first_cost, second_cost, bound) {
                    continue;
                }
            }
            if sequences_disjoint(first.vertices(), second.vertices(), closed) {
                let witness = Witness::new(T::KIND, first, first_cost, second, second_cost);
                log_event!(trace, ?witness, "found disjoint pair");
                return Some(witness);
            }
        }
    }
    None
}

/// Searches the canonical `(1, n)`-paths for a disjoint pair.
///
/// `criteria.odd_depth_only` has no effect on paths.
///
/// # Panics
///
/// Panics if `n < 2`.
#[track_caller]
pub fn find_disjoint_paths(n: usize, criteria: SearchCriteria) -> Option<Witness> {
    log_span!(DEBUG, "search", kind = ?TourKind::Path, n);
    find_disjoint_pair(&enumerate_paths(n), criteria.bound, |_| true)
}

/// Searches the canonical cycles for a disjoint pair.
///
/// # Panics
///
/// Panics if `n < 3`.
#[track_caller]
pub fn find_disjoint_cycles(n: usize, criteria: SearchCriteria) -> Option<Witness> {
    log_span!(DEBUG, "search", kind = ?TourKind::Cycle, n);
    let cycles = enumerate_cycles(n);
    if criteria.odd_depth_only {
        find_disjoint_pair(&cycles, criteria.bound, HamiltonianCycle::is_odd_depth)
    } else {
        find_disjoint_pair(&cycles, criteria.bound, |_| true)
    }
}

/// Whether two edge-disjoint Hamiltonian `(1, n)`-paths exist.
///
/// # Panics
///
/// Panics if `n < 2`.
#[track_caller]
pub fn disjoint_paths_exist(n: usize) -> bool {
    find_disjoint_paths(n, SearchCriteria::disjoint()).is_some()
}

/// Whether two edge-disjoint Hamiltonian `(1, n)`-paths exist whose combined
/// cost is strictly below `bound`.
///
/// # Panics
///
/// Panics if `n < 2`.
#[track_caller]
pub fn disjoint_paths_exist_within_bound(n: usize, bound: f64) -> bool {
    find_disjoint_paths(n, SearchCriteria::within(bound)).is_some()
}

/// Whether two edge-disjoint Hamiltonian cycles on `n` points exist.
///
/// # Panics
///
/// Panics if `n < 3`.
#[track_caller]
pub fn disjoint_cycles_exist(n: usize) -> bool {
    find_disjoint_cycles(n, SearchCriteria::disjoint()).is_some()
}

/// Whether two edge-disjoint odd-depth Hamiltonian cycles exist whose combined
/// cost is strictly below `bound`.
///
/// # Panics
///
/// Panics if `n < 3`.
#[track_caller]
pub fn disjoint_cycles_exist_within_bound(n: usize, bound: f64) -> bool {
    find_disjoint_cycles(n, SearchCriteria::within(bound).odd_depth()).is_some()
}
