//! Expectation tables for Claims 3.1 and 4.1 and the report they produce.
//!
//! An [`Expectation`] fixes a claim part, a vertex count and an optional bound,
//! and records whether the exhaustive search should find a qualifying pair.
//! [`verify`] runs every expectation and collects the outcomes into a
//! [`ClaimReport`]; the run as a whole holds only if every outcome does.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::search::{find_disjoint_cycles, find_disjoint_paths, SearchCriteria, Witness};
use crate::tour::TourKind;

pub mod theorems;


/// The two claims under verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Claim {
    /// Claim 3.1: Hamiltonian `(1, n)`-paths on the line.
    LinePaths,
    /// Claim 4.1: Hamiltonian cycles on the circle.
    CircleCycles,
}

impl Claim {
    /// Both claims, in report order.
    pub const ALL: [Claim; 2] = [Claim::LinePaths, Claim::CircleCycles];

    /// Tour family the claim is about.
    pub const fn kind(self) -> TourKind {
        match self {
            Claim::LinePaths => TourKind::Path,
            Claim::CircleCycles => TourKind::Cycle,
        }
    }

    /// Heading used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Claim::LinePaths => "Claim 3.1",
            Claim::CircleCycles => "Claim 4.1",
        }
    }

    /// Statement of one part of the claim.
    pub const fn statement(self, part: Part) -> &'static str {
        match (self, part) {
            (Claim::LinePaths, Part::NoDisjointPair) => {
                "There is no pair of edge-disjoint Hamiltonian paths when n <= 5."
            }
            (Claim::LinePaths, Part::NoPairBelowBound) => {
                "There is no pair of edge-disjoint Hamiltonian paths with total cost less than 16(n - 1)/5 when n in {6, 7, 8}."
            }
            (Claim::CircleCycles, Part::NoDisjointPair) => {
                "There is no pair of edge-disjoint Hamiltonian cycles when n <= 4."
            }
            (Claim::CircleCycles, Part::NoPairBelowBound) => {
                "There is no pair of (odd-depth) edge-disjoint Hamiltonian cycles with total cost less than 16n/5 when n in {5, 6, 7, 8}."
            }
        }
    }
}

/// Part of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// (i): no edge-disjoint pair exists for small `n`.
    NoDisjointPair,
    /// (ii): no edge-disjoint pair beats the lower bound.
    NoPairBelowBound,
}

impl Part {
    /// Both parts, in report order.
    pub const ALL: [Part; 2] = [Part::NoDisjointPair, Part::NoPairBelowBound];

    /// Roman numeral used in reports.
    pub const fn numeral(self) -> &'static str {
        match self {
            Part::NoDisjointPair => "(i)",
            Part::NoPairBelowBound => "(ii)",
        }
    }
}

/// Which bound an expectation searches under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundKind {
    /// The claimed lower bound, see [`theorems::lower_bound`].
    Tight,
    /// The control bound, see [`theorems::loose_bound`].
    Loose,
}

/// One search together with its predicted result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    /// Claim under test.
    pub claim: Claim,
    /// Part of the claim under test.
    pub part: Part,
    /// Number of points.
    pub n: usize,
    /// Cost bound, if the search is bounded.
    pub bound: Option<BoundKind>,
    /// Whether a qualifying pair should be found.
    pub expect_pair: bool,
}

impl Expectation {
    /// Numeric value of the bound for this expectation.
    pub fn bound_value(&self) -> Option<f64> {
        let kind = self.claim.kind();
        self.bound.map(|bound| match bound {
            BoundKind::Tight => theorems::lower_bound(kind, self.n),
            BoundKind::Loose => theorems::loose_bound(kind, self.n),
        })
    }

    /// Search criteria this expectation runs under. Bounded cycle searches are
    /// restricted to odd-depth tours.
    pub fn criteria(&self) -> SearchCriteria {
        match (self.bound_value(), self.claim) {
            (None, _) => SearchCriteria::disjoint(),
            (Some(bound), Claim::LinePaths) => SearchCriteria::within(bound),
            (Some(bound), Claim::CircleCycles) => SearchCriteria::within(bound).odd_depth(),
        }
    }

    /// Runs the search, returning the witness pair if one exists.
    pub fn search(&self) -> Option<Witness> {
        match self.claim.kind() {
            TourKind::Path => find_disjoint_paths(self.n, self.criteria()),
            TourKind::Cycle => find_disjoint_cycles(self.n, self.criteria()),
        }
    }
}

fn unbounded(claim: Claim, sizes: impl IntoIterator<Item = usize>) -> impl Iterator<Item = Expectation> {
    sizes.into_iter().map(move |n| Expectation {
        claim,
        part: Part::NoDisjointPair,
        n,
        bound: None,
        expect_pair: theorems::disjoint_pair_exists(claim.kind(), n),
    })
}

fn bounded(
    claim: Claim,
    bound: BoundKind,
    sizes: impl IntoIterator<Item = usize>,
) -> impl Iterator<Item = Expectation> {
    sizes.into_iter().map(move |n| Expectation {
        claim,
        part: Part::NoPairBelowBound,
        n,
        bound: Some(bound),
        expect_pair: bound == BoundKind::Loose,
    })
}

/// Expectations behind Claim 3.1.
///
/// Part (i) searches `n = 3..=8` unbounded; part (ii) searches `n = 6..=8` under
/// both the tight and the control bound.
pub fn claim_3_1() -> Vec<Expectation> {
    let claim = Claim::LinePaths;
    unbounded(claim, 3..=8)
        .chain(bounded(claim, BoundKind::Tight, 6..=8))
        .chain(bounded(claim, BoundKind::Loose, 6..=8))
        .collect()
}

/// Expectations behind Claim 4.1.
///
/// Part (i) searches `n = 3..=8` unbounded; part (ii) searches `n = 5..=8` under
/// the tight bound and `n = 6..=8` under the control bound (for `n = 5` no
/// odd-depth disjoint pair exists at any cost).
pub fn claim_4_1() -> Vec<Expectation> {
    let claim = Claim::CircleCycles;
    unbounded(claim, 3..=8)
        .chain(bounded(claim, BoundKind::Tight, 5..=8))
        .chain(bounded(claim, BoundKind::Loose, 6..=8))
        .collect()
}

/// Expectations of both claims, in report order.
pub fn all_expectations() -> Vec<Expectation> {
    let mut expectations = claim_3_1();
    expectations.extend(claim_4_1());
    expectations
}

/// Result of running one expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// The expectation that was run.
    pub expectation: Expectation,
    /// Numeric bound used, if any.
    pub bound: Option<f64>,
    /// First qualifying pair, if the search found one.
    pub witness: Option<Witness>,
}

impl Outcome {
    /// Whether the search found a qualifying pair.
    pub fn found_pair(&self) -> bool {
        self.witness.is_some()
    }

    /// Whether the search result matches the prediction.
    pub fn held(&self) -> bool {
        self.found_pair() == self.expectation.expect_pair
    }
}

/// Outcomes of a verification run, in the order the expectations were given.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClaimReport {
    /// One entry per expectation.
    pub outcomes: Vec<Outcome>,
}

impl ClaimReport {
    /// Whether every expectation held.
    pub fn all_held(&self) -> bool {
        self.outcomes.iter().all(Outcome::held)
    }

    /// Outcomes whose prediction was violated.
    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|outcome| !outcome.held())
    }

    /// Whether every expectation of one claim part held.
    pub fn part_held(&self, claim: Claim, part: Part) -> bool {
        self.part_outcomes(claim, part).all(Outcome::held)
    }

    fn part_outcomes(&self, claim: Claim, part: Part) -> impl Iterator<Item = &Outcome> {
        self.outcomes
            .iter()
            .filter(move |o| o.expectation.claim == claim && o.expectation.part == part)
    }
}

/// Runs every expectation in order.
pub fn verify(expectations: impl IntoIterator<Item = Expectation>) -> ClaimReport {
    let outcomes = expectations
        .into_iter()
        .map(|expectation| {
            let witness = expectation.search();
            let outcome = Outcome {
                bound: expectation.bound_value(),
                expectation,
                witness,
            };
            log_event!(
                info,
                claim = expectation.claim.label(),
                part = expectation.part.numeral(),
                n = expectation.n,
                bound = ?outcome.bound,
                found = outcome.found_pair(),
                held = outcome.held(),
                "verified expectation"
            );
            outcome
        })
        .collect();
    ClaimReport { outcomes }
}

impl fmt::Display for ClaimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for claim in Claim::ALL {
            let mut parts = Part::ALL
                .into_iter()
                .filter(|&part| self.part_outcomes(claim, part).next().is_some())
                .peekable();
            if parts.peek().is_none() {
                continue;
            }

            writeln!(f, "Proof of {}:", claim.label())?;
            for part in parts {
                let status = if self.part_held(claim, part) { "proved" } else { "FAILED" };
                writeln!(f, "\t{} {} [{status}]", part.numeral(), claim.statement(part))?;
                for outcome in self.part_outcomes(claim, part) {
                    let e = &outcome.expectation;
                    let bound = outcome.bound.map_or_else(|| "unbounded".to_owned(), |b| format!("bound {b:.2}"));
                    let found = if outcome.found_pair() { "pair found" } else { "no pair" };
                    let mark = if outcome.held() { "ok" } else { "UNEXPECTED" };
                    writeln!(f, "\t\tn = {}, {bound}: {found} ({mark})", e.n)?;
                    if !outcome.held() {
                        if let Some(witness) = &outcome.witness {
                            writeln!(f, "\t\t\twitness {witness}")?;
                        }
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
