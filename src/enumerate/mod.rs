//! Canonical enumeration of Hamiltonian paths and cycles.
//!
//! Both generators walk permutations in lexicographic order starting from the
//! identity, so their output is deterministic and sorted.
//!
//! | Generator | Fixed | Symmetry removed | Count |
//! |-----------|-------|------------------|-------|
//! | [`PathEnumerator`] | first `1`, last `n` | none needed | `(n - 2)!` |
//! | [`CycleEnumerator`] | first `1` | rotation, reflection | `(n - 1)! / 2` |
//!
//! ### Reflection tie-break
//!
//! Reversing a cycle that starts at `1` swaps its second and last vertices, so
//! exactly one of `c` and its reversal satisfies `c[1] < c[n - 1]`. The cycle
//! enumerator keeps precisely those sequences. This rule selects one member of
//! every reflection class independently of generation order.

use crate::invariant::precondition;
use crate::tour::{is_canonical_orientation, HamiltonianCycle, HamiltonianPath};


/// Rearranges `items` into the next permutation in lexicographic order.
///
/// Returns `false` and leaves `items` sorted ascending once the last
/// permutation has been passed.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let len = items.len();
    if len < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`.
    let Some(pivot) = (0..len - 1).rev().find(|&i| items[i] < items[i + 1]) else {
        items.reverse();
        return false;
    };

    let successor = (pivot + 1..len)
        .rev()
        .find(|&j| items[j] > items[pivot])
        .unwrap_or(pivot + 1);
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// Lazy generator of every Hamiltonian `(1, n)`-path.
///
/// Yields `1 ++ π ++ n` for each permutation `π` of `2..=n-1` in lexicographic
/// order. Restart by constructing a new enumerator.
#[derive(Debug, Clone)]
pub struct PathEnumerator {
    current: Option<Vec<usize>>,
}

impl PathEnumerator {
    /// Creates the generator for `n` points.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2`.
    #[track_caller]
    pub fn new(n: usize) -> Self {
        precondition(n >= 2, "path enumeration needs n >= 2");
        Self {
            current: Some((1..=n).collect()),
        }
    }
}

impl Iterator for PathEnumerator {
    type Item = HamiltonianPath;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let mut successor = current.clone();
        let last = successor.len() - 1;
        if next_permutation(&mut successor[1..last]) {
            self.current = Some(successor);
        }
        Some(HamiltonianPath::from_canonical(current))
    }
}

/// Lazy generator of every Hamiltonian cycle up to rotation and reflection.
///
/// Walks the permutations of `1..=n` that start with `1` in lexicographic order
/// and keeps those whose second vertex is smaller than their last (see the
/// module docs). Restart by constructing a new enumerator.
#[derive(Debug, Clone)]
pub struct CycleEnumerator {
    current: Option<Vec<usize>>,
}

impl CycleEnumerator {
    /// Creates the generator for `n` points.
    ///
    /// # Panics
    ///
    /// Panics if `n < 3`.
    #[track_caller]
    pub fn new(n: usize) -> Self {
        precondition(n >= 3, "cycle enumeration needs n >= 3");
        Self {
            current: Some((1..=n).collect()),
        }
    }
}

impl Iterator for CycleEnumerator {
    type Item = HamiltonianCycle;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.current.take()?;
            let mut successor = current.clone();
            if next_permutation(&mut successor[1..]) {
                self.current = Some(successor);
            }
            if is_canonical_orientation(&current) {
                return Some(HamiltonianCycle::from_canonical(current));
            }
        }
    }
}

/// Every Hamiltonian `(1, n)`-path, in lexicographic order.
///
/// # Panics
///
/// Panics if `n < 2`.
#[track_caller]
pub fn enumerate_paths(n: usize) -> Vec<HamiltonianPath> {
    let paths: Vec<_> = PathEnumerator::new(n).collect();
    log_event!(debug, n, count = paths.len(), "enumerated paths");
    paths
}

/// One representative of every Hamiltonian cycle, in lexicographic order.
///
/// # Panics
///
/// Panics if `n < 3`.
#[track_caller]
pub fn enumerate_cycles(n: usize) -> Vec<HamiltonianCycle> {
    let cycles: Vec<_> = CycleEnumerator::new(n).collect();
    log_event!(debug, n, count = cycles.len(), "enumerated cycles");
    cycles
}

fn factorial(k: usize) -> usize {
    (1..=k).product()
}

/// Size of the canonical path set, `(n - 2)!`.
///
/// # Panics
///
/// Panics if `n < 2`.
#[track_caller]
pub fn path_count(n: usize) -> usize {
    precondition(n >= 2, "path enumeration needs n >= 2");
    factorial(n - 2)
}

/// Size of the canonical cycle set, `(n - 1)! / 2`.
///
/// # Panics
///
/// Panics if `n < 3`.
#[track_caller]
pub fn cycle_count(n: usize) -> usize {
    precondition(n >= 3, "cycle enumeration needs n >= 3");
    factorial(n - 1) / 2
}
