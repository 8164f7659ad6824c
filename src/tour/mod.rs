//! Hamiltonian paths and cycles over uniformly spaced points.
//!
//! A tour is stored as its vertex sequence. Paths are open and run from `1` to
//! `n`; cycles are closed by an implicit edge from the last vertex back to `1`.
//! Edges are undirected throughout: `(u, v)` and `(v, u)` name the same edge.
//!
//! Every operation exists twice: on the typed [`HamiltonianPath`] /
//! [`HamiltonianCycle`] through the [`Tour`] trait, and as a free function over
//! a raw `&[usize]` sequence (`path_cost`, `are_disjoint_cycles`, ...). The free
//! functions panic on malformed input.

use serde::{Deserialize, Serialize};

use crate::error::TourError;
use crate::invariant::same_length;
use crate::metric::Metric;

mod cycle;
mod depth;
mod path;

#[cfg(test)]
mod tests;

pub(crate) use cycle::is_canonical_orientation;
pub use cycle::{are_disjoint_cycles, cycle_cost, cycles_within_bound, edge_exists_in_cycle, HamiltonianCycle};
pub use depth::{is_odd_depth_cycle, reference_depth, DepthParity};
pub use path::{are_disjoint_paths, edge_exists_in_path, path_cost, paths_within_bound, HamiltonianPath};

/// Which of the two tour families a sequence belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourKind {
    /// Open `(1, n)`-path on the line.
    Path,
    /// Closed tour on the circle.
    Cycle,
}

impl TourKind {
    /// Metric the tour's edges are measured in.
    pub const fn metric(self) -> Metric {
        match self {
            TourKind::Path => Metric::Line,
            TourKind::Cycle => Metric::Circle,
        }
    }

    /// Whether the last vertex is joined back to the first.
    pub const fn is_closed(self) -> bool {
        matches!(self, TourKind::Cycle)
    }

    /// Smallest vertex count for which the family is defined.
    pub const fn min_vertices(self) -> usize {
        match self {
            TourKind::Path => 2,
            TourKind::Cycle => 3,
        }
    }

    /// Plural noun used in reports.
    pub const fn plural(self) -> &'static str {
        match self {
            TourKind::Path => "paths",
            TourKind::Cycle => "cycles",
        }
    }
}

/// An undirected edge, stored with its smaller endpoint first.
///
/// Serialised as an endpoint pair; deserialisation goes through [`Edge::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Edge {
    low: usize,
    high: usize,
}

impl Edge {
    /// Creates the edge `{a, b}`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// Endpoints as `(smaller, larger)`.
    #[inline]
    pub fn endpoints(self) -> (usize, usize) {
        (self.low, self.high)
    }

    /// Whether this edge joins `tail` and `head`, in either orientation.
    #[inline]
    pub fn joins(self, tail: usize, head: usize) -> bool {
        (self.low == tail && self.high == head) || (self.low == head && self.high == tail)
    }

    /// Length of the edge in `metric` among `n` points.
    #[inline]
    pub fn cost(self, metric: Metric, n: usize) -> usize {
        metric.edge_cost(self.low, self.high, n)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        edge.endpoints()
    }
}

/// Iterator over the edges of a vertex sequence, in traversal order.
///
/// For a closed sequence the final item is the edge from the last vertex back
/// to the first.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    vertices: &'a [usize],
    next: usize,
    closed: bool,
}

impl<'a> Edges<'a> {
    /// Edges of `vertices`, including the closing edge when `closed` is set.
    pub fn new(vertices: &'a [usize], closed: bool) -> Self {
        Self {
            vertices,
            next: 0,
            closed,
        }
    }

    fn total(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            len if self.closed => len,
            len => len - 1,
        }
    }
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total() {
            return None;
        }
        let len = self.vertices.len();
        let tail = self.vertices[self.next];
        let head = self.vertices[(self.next + 1) % len];
        self.next += 1;
        Some(Edge::new(tail, head))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}

/// Common behaviour of Hamiltonian paths and cycles.
pub trait Tour {
    /// Family this tour belongs to.
    const KIND: TourKind;

    /// The vertex sequence.
    fn vertices(&self) -> &[usize];

    /// Number of points `n`.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Edges in traversal order.
    fn edges(&self) -> Edges<'_> {
        Edges::new(self.vertices(), Self::KIND.is_closed())
    }

    /// Total edge length under the family's metric.
    fn cost(&self) -> usize {
        sequence_cost(self.vertices(), Self::KIND)
    }

    /// Whether the undirected edge `{tail, head}` is used.
    fn contains_edge(&self, tail: usize, head: usize) -> bool {
        sequence_contains(self.vertices(), Self::KIND.is_closed(), tail, head)
    }

    /// Whether no edge of `self` is used by `other`.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::LengthMismatch`] if the tours have different
    /// vertex counts.
    fn is_disjoint_from(&self, other: &Self) -> Result<bool, TourError>
    where
        Self: Sized,
    {
        let (left, right) = (self.vertex_count(), other.vertex_count());
        if left != right {
            return Err(TourError::LengthMismatch { left, right });
        }
        Ok(sequences_disjoint(self.vertices(), other.vertices(), Self::KIND.is_closed()))
    }
}

/// Checks that `vertices` is a well-formed tour of the given kind.
pub(crate) fn validate(vertices: &[usize], kind: TourKind) -> Result<(), TourError> {
    let n = vertices.len();
    if n < kind.min_vertices() {
        return Err(TourError::TooShort {
            len: n,
            min: kind.min_vertices(),
        });
    }
    if vertices[0] != 1 {
        return Err(TourError::WrongStart { found: vertices[0] });
    }
    if kind == TourKind::Path && vertices[n - 1] != n {
        return Err(TourError::WrongEnd {
            expected: n,
            found: vertices[n - 1],
        });
    }
    let mut seen = vec![false; n + 1];
    for &label in vertices {
        if label == 0 || label > n || seen[label] {
            return Err(TourError::NotAPermutation { label });
        }
        seen[label] = true;
    }
    Ok(())
}

pub(crate) fn sequence_cost(vertices: &[usize], kind: TourKind) -> usize {
    let n = vertices.len();
    Edges::new(vertices, kind.is_closed())
        .map(|edge| edge.cost(kind.metric(), n))
        .sum()
}

pub(crate) fn sequence_contains(vertices: &[usize], closed: bool, tail: usize, head: usize) -> bool {
    Edges::new(vertices, closed).any(|edge| edge.joins(tail, head))
}

pub(crate) fn sequences_disjoint(first: &[usize], second: &[usize], closed: bool) -> bool {
    same_length(first, second);
    Edges::new(first, closed).all(|edge| {
        let (tail, head) = edge.endpoints();
        !sequence_contains(second, closed, tail, head)
    })
}

/// Whether two costs sum to strictly less than `bound`.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn costs_within_bound(first: usize, second: usize, bound: f64) -> bool {
    ((first + second) as f64) < bound
}
