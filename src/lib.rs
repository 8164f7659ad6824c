//! # `disjoint_tours` - Exhaustive Disjoint-Tour Verification
//!
//! Enumerates every combinatorially distinct Hamiltonian path or cycle on `n`
//! uniformly spaced points and searches for pairs of tours that share no edge,
//! optionally with a combined cost strictly below a bound. For small `n` this
//! is a proof by exhaustion of the finite base cases of two claims:
//!
//! - **Claim 3.1** (line): points `1..=n` on a line, paths from `1` to `n`.
//!   (i) no edge-disjoint pair exists for `n <= 5`;
//!   (ii) for `n` in `{6, 7, 8}` no edge-disjoint pair costs less than `16(n - 1)/5`.
//! - **Claim 4.1** (circle): points `1..=n` evenly spaced on a circle.
//!   (i) no edge-disjoint pair of cycles exists for `n <= 4`;
//!   (ii) for `n` in `{5, 6, 7, 8}` no edge-disjoint pair of odd-depth cycles
//!   costs less than `16n/5`.
//!
//! ## Architecture
//!
//! 1. **Cost model** ([`metric`]): edge length on the line (`|u - v|`) and on the
//!    circle (`min(|u - v|, n - |u - v|)`).
//! 2. **Tours** ([`tour`]): [`HamiltonianPath`] and [`HamiltonianCycle`], the
//!    [`Tour`] trait, edge membership, disjointness and cycle depth parity.
//!    Slice-level functions mirror the typed API for callers holding raw
//!    label sequences.
//! 3. **Enumeration** ([`enumerate`]): lazy lexicographic generators for the
//!    canonical path and cycle sets.
//! 4. **Search** ([`search`]): all-pairs existence search returning the first
//!    satisfying [`Witness`].
//! 5. **Claims** ([`claims`]): the expectation tables behind Claims 3.1 and 4.1
//!    and a serialisable [`ClaimReport`].
//!
//! Preconditions on raw sequences (wrong first vertex, mismatched lengths,
//! degenerate `n`) panic; they indicate a caller bug. The typed constructors
//! report malformed input through [`TourError`] instead.
//!
//! ## Example
//!
//! ```rust
//! use disjoint_tours::search::{disjoint_cycles_exist, disjoint_paths_exist};
//!
//! assert!(!disjoint_paths_exist(5));
//! assert!(disjoint_paths_exist(6));
//! assert!(disjoint_cycles_exist(5));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;
mod invariant;

pub mod claims;
pub mod enumerate;
pub mod error;
pub mod metric;
pub mod search;
pub mod tour;

pub use claims::{ClaimReport, Expectation};
pub use enumerate::{enumerate_cycles, enumerate_paths, CycleEnumerator, PathEnumerator};
pub use error::TourError;
pub use metric::Metric;
pub use search::{SearchCriteria, Witness};
pub use tour::{DepthParity, Edge, HamiltonianCycle, HamiltonianPath, Tour, TourKind};
