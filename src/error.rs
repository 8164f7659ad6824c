//! Errors reported by the checked tour constructors.

use core::fmt;

/// The error type for malformed tours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourError {
    /// The sequence has fewer vertices than the tour kind requires.
    TooShort {
        /// Vertices supplied.
        len: usize,
        /// Minimum vertex count for this kind of tour.
        min: usize,
    },
    /// The first vertex is not `1`.
    WrongStart {
        /// Vertex found in first position.
        found: usize,
    },
    /// A path does not end at `n`.
    WrongEnd {
        /// Expected final vertex (the vertex count).
        expected: usize,
        /// Vertex found in last position.
        found: usize,
    },
    /// The sequence is not a permutation of `1..=n`.
    NotAPermutation {
        /// First offending label (out of range or repeated).
        label: usize,
    },
    /// Two tours that must be compared have different vertex counts.
    LengthMismatch {
        /// Vertex count of the first tour.
        left: usize,
        /// Vertex count of the second tour.
        right: usize,
    },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TourError::TooShort { len, min } => {
                write!(f, "tour has {len} vertices, at least {min} required")
            }
            TourError::WrongStart { found } => {
                write!(f, "tour must start at vertex 1, found {found}")
            }
            TourError::WrongEnd { expected, found } => {
                write!(f, "path must end at vertex {expected}, found {found}")
            }
            TourError::NotAPermutation { label } => {
                write!(f, "label {label} is out of range or repeated")
            }
            TourError::LengthMismatch { left, right } => {
                write!(f, "tours have different lengths ({left} and {right})")
            }
        }
    }
}

impl std::error::Error for TourError {}
