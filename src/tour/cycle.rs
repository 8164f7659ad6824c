//! Hamiltonian cycles on the circle.

use serde::Serialize;

use super::depth::{reference_depth, DepthParity};
use super::{costs_within_bound, sequence_contains, sequence_cost, sequences_disjoint, validate, Tour, TourKind};
use crate::error::TourError;
use crate::invariant::precondition;

/// A Hamiltonian cycle through `n` evenly spaced points on a circle.
///
/// The sequence always starts at vertex `1`; the closing edge from the last
/// vertex back to `1` is implicit. A cycle and its reversal describe the same
/// tour; [`HamiltonianCycle::canonicalize`] picks the representative whose
/// second vertex is smaller than its last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HamiltonianCycle {
    vertices: Vec<usize>,
}

impl HamiltonianCycle {
    /// Builds a cycle from a vertex sequence starting at `1`.
    ///
    /// The orientation is kept as given.
    ///
    /// # Errors
    ///
    /// Fails if the sequence has fewer than three vertices, does not start at
    /// `1`, or is not a permutation of `1..=n`.
    pub fn new(vertices: Vec<usize>) -> Result<Self, TourError> {
        validate(&vertices, TourKind::Cycle)?;
        Ok(Self { vertices })
    }

    /// Builds a cycle from any rotation or reflection of its vertex sequence,
    /// returning the canonical representative.
    ///
    /// # Errors
    ///
    /// Fails if the sequence has fewer than three vertices or is not a
    /// permutation of `1..=n`.
    pub fn canonicalize(mut vertices: Vec<usize>) -> Result<Self, TourError> {
        if let Some(start) = vertices.iter().position(|&v| v == 1) {
            vertices.rotate_left(start);
        }
        validate(&vertices, TourKind::Cycle)?;
        if !is_canonical_orientation(&vertices) {
            vertices[1..].reverse();
        }
        Ok(Self { vertices })
    }

    pub(crate) fn from_canonical(vertices: Vec<usize>) -> Self {
        debug_assert!(validate(&vertices, TourKind::Cycle).is_ok());
        Self { vertices }
    }

    /// The same tour traversed in the opposite direction, still starting at `1`.
    pub fn reflected(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices[1..].reverse();
        Self { vertices }
    }

    /// Whether this is the representative kept by cycle enumeration: the
    /// second vertex is smaller than the last.
    pub fn is_canonical(&self) -> bool {
        is_canonical_orientation(&self.vertices)
    }

    /// Depth parity of the cycle's segments.
    pub fn depth_parity(&self) -> DepthParity {
        DepthParity::of_depth(reference_depth(&self.vertices))
    }

    /// Shorthand for `depth_parity() == DepthParity::Odd`.
    pub fn is_odd_depth(&self) -> bool {
        self.depth_parity() == DepthParity::Odd
    }

    /// Consumes the cycle, returning its vertex sequence.
    pub fn into_vertices(self) -> Vec<usize> {
        self.vertices
    }
}

impl Tour for HamiltonianCycle {
    const KIND: TourKind = TourKind::Cycle;

    fn vertices(&self) -> &[usize] {
        &self.vertices
    }
}

impl AsRef<[usize]> for HamiltonianCycle {
    fn as_ref(&self) -> &[usize] {
        &self.vertices
    }
}

impl TryFrom<Vec<usize>> for HamiltonianCycle {
    type Error = TourError;

    fn try_from(vertices: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

/// Reflection tie-break shared with the enumerator.
#[inline]
pub(crate) fn is_canonical_orientation(vertices: &[usize]) -> bool {
    vertices[1] < vertices[vertices.len() - 1]
}

#[track_caller]
pub(crate) fn check_start(cycle: &[usize]) {
    precondition(
        cycle.len() >= TourKind::Cycle.min_vertices(),
        "a cycle needs at least three vertices",
    );
    precondition(cycle[0] == 1, "a cycle must start at vertex 1");
}

/// Sum of circular edge lengths of `cycle`, including the closing edge.
///
/// # Panics
///
/// Panics unless `cycle` has at least three vertices and starts at `1`.
#[track_caller]
pub fn cycle_cost(cycle: &[usize]) -> usize {
    check_start(cycle);
    sequence_cost(cycle, TourKind::Cycle)
}

/// Whether the two cycles together cost strictly less than `bound`.
///
/// # Panics
///
/// Panics unless both cycles have at least three vertices and start at `1`.
#[track_caller]
pub fn cycles_within_bound(cycle1: &[usize], cycle2: &[usize], bound: f64) -> bool {
    costs_within_bound(cycle_cost(cycle1), cycle_cost(cycle2), bound)
}

/// Whether `cycle` uses the edge `{tail, head}` in either direction, the
/// closing edge included.
///
/// # Panics
///
/// Panics unless `cycle` has at least three vertices and starts at `1`.
#[track_caller]
pub fn edge_exists_in_cycle(tail: usize, head: usize, cycle: &[usize]) -> bool {
    check_start(cycle);
    sequence_contains(cycle, true, tail, head)
}

/// Whether no edge of `cycle1` appears in `cycle2`.
///
/// # Panics
///
/// Panics if the cycles have different lengths, or either is shorter than
/// three vertices or does not start at `1`.
#[track_caller]
pub fn are_disjoint_cycles(cycle1: &[usize], cycle2: &[usize]) -> bool {
    check_start(cycle1);
    check_start(cycle2);
    sequences_disjoint(cycle1, cycle2, true)
}
