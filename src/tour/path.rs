//! Hamiltonian `(1, n)`-paths on the line.

use serde::Serialize;

use super::{costs_within_bound, sequence_contains, sequence_cost, sequences_disjoint, validate, Tour, TourKind};
use crate::error::TourError;
use crate::invariant::precondition;

/// A Hamiltonian path through points `1..=n` on a line, starting at `1` and
/// ending at `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HamiltonianPath {
    vertices: Vec<usize>,
}

impl HamiltonianPath {
    /// Builds a path from its vertex sequence.
    ///
    /// # Errors
    ///
    /// Fails if the sequence has fewer than two vertices, does not start at
    /// `1`, does not end at `n`, or is not a permutation of `1..=n`.
    pub fn new(vertices: Vec<usize>) -> Result<Self, TourError> {
        validate(&vertices, TourKind::Path)?;
        Ok(Self { vertices })
    }

    /// The straight path `1, 2, ..., n`.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2`.
    pub fn identity(n: usize) -> Self {
        precondition(n >= 2, "a path needs at least two vertices");
        Self {
            vertices: (1..=n).collect(),
        }
    }

    pub(crate) fn from_canonical(vertices: Vec<usize>) -> Self {
        debug_assert!(validate(&vertices, TourKind::Path).is_ok());
        Self { vertices }
    }

    /// Consumes the path, returning its vertex sequence.
    pub fn into_vertices(self) -> Vec<usize> {
        self.vertices
    }
}

impl Tour for HamiltonianPath {
    const KIND: TourKind = TourKind::Path;

    fn vertices(&self) -> &[usize] {
        &self.vertices
    }
}

impl AsRef<[usize]> for HamiltonianPath {
    fn as_ref(&self) -> &[usize] {
        &self.vertices
    }
}

impl TryFrom<Vec<usize>> for HamiltonianPath {
    type Error = TourError;

    fn try_from(vertices: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

#[track_caller]
fn check_endpoints(path: &[usize]) {
    precondition(path.len() >= 2, "a path needs at least two vertices");
    precondition(path[0] == 1, "a path must start at vertex 1");
    precondition(path[path.len() - 1] == path.len(), "a path must end at vertex n");
}

/// Sum of `|u - v|` over consecutive vertices of `path`.
///
/// # Panics
///
/// Panics unless `path` runs from `1` to `n`.
#[track_caller]
pub fn path_cost(path: &[usize]) -> usize {
    check_endpoints(path);
    sequence_cost(path, TourKind::Path)
}

/// Whether the two paths together cost strictly less than `bound`.
///
/// # Panics
///
/// Panics unless both paths run from `1` to `n`.
#[track_caller]
pub fn paths_within_bound(path1: &[usize], path2: &[usize], bound: f64) -> bool {
    costs_within_bound(path_cost(path1), path_cost(path2), bound)
}

/// Whether `path` uses the edge `{tail, head}` in either direction.
///
/// # Panics
///
/// Panics unless `path` runs from `1` to `n`.
#[track_caller]
pub fn edge_exists_in_path(tail: usize, head: usize, path: &[usize]) -> bool {
    check_endpoints(path);
    sequence_contains(path, false, tail, head)
}

/// Whether no edge of `path1` appears in `path2`.
///
/// # Panics
///
/// Panics if the paths have different lengths or either does not run from `1`
/// to `n`.
#[track_caller]
pub fn are_disjoint_paths(path1: &[usize], path2: &[usize]) -> bool {
    check_endpoints(path1);
    check_endpoints(path2);
    sequences_disjoint(path1, path2, false)
}
