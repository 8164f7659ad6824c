//! Property tests over randomly shuffled tours.

use disjoint_tours::metric::Metric;
use disjoint_tours::tour::{
    are_disjoint_cycles, are_disjoint_paths, cycle_cost, is_odd_depth_cycle, path_cost,
};
use disjoint_tours::{HamiltonianCycle, HamiltonianPath, Tour, TourError};
use proptest::prelude::*;

fn arb_path(n: usize) -> impl Strategy<Value = Vec<usize>> {
    Just((2..n).collect::<Vec<_>>()).prop_shuffle().prop_map(move |interior| {
        let mut path = Vec::with_capacity(n);
        path.push(1);
        path.extend(interior);
        path.push(n);
        path
    })
}

fn arb_cycle(n: usize) -> impl Strategy<Value = Vec<usize>> {
    Just((2..=n).collect::<Vec<_>>()).prop_shuffle().prop_map(|tail| {
        let mut cycle = vec![1];
        cycle.extend(tail);
        cycle
    })
}

fn arb_path_pair() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (3usize..=10).prop_flat_map(|n| (arb_path(n), arb_path(n)))
}

fn arb_cycle_pair() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (3usize..=10).prop_flat_map(|n| (arb_cycle(n), arb_cycle(n)))
}

fn reflect(cycle: &[usize]) -> Vec<usize> {
    let mut reflected = cycle.to_vec();
    reflected[1..].reverse();
    reflected
}

proptest! {
    #[test]
    fn test_edge_cost_symmetry((n, u, v) in (2usize..=20).prop_flat_map(|n| (Just(n), 1..=n, 1..=n))) {
        prop_assert_eq!(Metric::Line.edge_cost(u, v, n), Metric::Line.edge_cost(v, u, n));
        prop_assert_eq!(Metric::Circle.edge_cost(u, v, n), Metric::Circle.edge_cost(v, u, n));
        prop_assert!(Metric::Circle.edge_cost(u, v, n) <= Metric::Line.edge_cost(u, v, n));
    }

    #[test]
    fn test_path_disjointness_is_symmetric((a, b) in arb_path_pair()) {
        prop_assert_eq!(are_disjoint_paths(&a, &b), are_disjoint_paths(&b, &a));
    }

    #[test]
    fn test_cycle_disjointness_is_symmetric((a, b) in arb_cycle_pair()) {
        prop_assert_eq!(are_disjoint_cycles(&a, &b), are_disjoint_cycles(&b, &a));
    }

    #[test]
    fn test_tour_is_never_disjoint_from_itself(
        path in (3usize..=10).prop_flat_map(arb_path),
        cycle in (3usize..=10).prop_flat_map(arb_cycle),
    ) {
        prop_assert!(!are_disjoint_paths(&path, &path));
        prop_assert!(!are_disjoint_cycles(&cycle, &cycle));
    }

    #[test]
    fn test_path_cost_bounds(path in (2usize..=12).prop_flat_map(arb_path)) {
        let n = path.len();
        let cost = path_cost(&path);
        // The straight path is optimal; each edge is at most n - 1 long.
        prop_assert!(cost >= n - 1);
        prop_assert!(cost <= (n - 1) * (n - 1));
        prop_assert_eq!(cost % 2, (n - 1) % 2);
    }

    #[test]
    fn test_cycle_cost_reflection_invariant(cycle in (3usize..=12).prop_flat_map(arb_cycle)) {
        let reflected = reflect(&cycle);
        prop_assert_eq!(cycle_cost(&cycle), cycle_cost(&reflected));
        prop_assert!(cycle_cost(&cycle) >= cycle.len());
    }

    #[test]
    fn test_canonical_cycle_is_stable(cycle in (3usize..=10).prop_flat_map(arb_cycle), shift in 0usize..10) {
        let canonical = HamiltonianCycle::canonicalize(cycle.clone()).unwrap();
        prop_assert!(canonical.is_canonical());

        let mut rotated = reflect(&cycle);
        let len = rotated.len();
        rotated.rotate_left(shift % len);
        let again = HamiltonianCycle::canonicalize(rotated).unwrap();
        prop_assert_eq!(&again, &canonical);
        prop_assert_eq!(again.cost(), cycle_cost(&cycle));
    }

    #[test]
    fn test_odd_depth_matches_typed_api(cycle in (3usize..=10).prop_flat_map(arb_cycle)) {
        let typed = HamiltonianCycle::new(cycle.clone()).unwrap();
        prop_assert_eq!(typed.is_odd_depth(), is_odd_depth_cycle(&cycle));
    }

    #[test]
    fn test_swapping_endpoint_breaks_path(path in (3usize..=10).prop_flat_map(arb_path)) {
        let n = path.len();
        let mut broken = path.clone();
        broken.swap(0, 1);
        prop_assert_eq!(HamiltonianPath::new(broken), Err(TourError::WrongStart { found: path[1] }));
        prop_assert!(HamiltonianPath::new(path.clone()).is_ok());

        // Dropping n leaves a valid path only if n - 1 was already last.
        let mut truncated = path;
        truncated.pop();
        let ends_at_new_n = truncated.last() == Some(&(n - 1));
        prop_assert_eq!(HamiltonianPath::new(truncated).is_ok(), ends_at_new_n);
    }
}
