//! Witness pairs found by the search driver.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::tour::{Tour, TourKind};

/// An edge-disjoint pair of tours together with their costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    /// Family both tours belong to.
    pub kind: TourKind,
    /// Number of points.
    pub n: usize,
    /// Vertex sequence of the earlier tour in enumeration order.
    pub first: Vec<usize>,
    /// Cost of `first`.
    pub first_cost: usize,
    /// Vertex sequence of the later tour in enumeration order.
    pub second: Vec<usize>,
    /// Cost of `second`.
    pub second_cost: usize,
}

impl Witness {
    pub(crate) fn new<T: Tour>(kind: TourKind, first: &T, first_cost: usize, second: &T, second_cost: usize) -> Self {
        Self {
            kind,
            n: first.vertex_count(),
            first: first.vertices().to_vec(),
            first_cost,
            second: second.vertices().to_vec(),
            second_cost,
        }
    }

    /// Combined cost of the pair.
    pub fn total_cost(&self) -> usize {
        self.first_cost + self.second_cost
    }
}

struct Sequence<'a>(&'a [usize]);

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{vertex}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n = {}: {} (cost {}) and {} (cost {}), total {}",
            self.n,
            Sequence(&self.first),
            self.first_cost,
            Sequence(&self.second),
            self.second_cost,
            self.total_cost()
        )
    }
}
