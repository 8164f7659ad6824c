//! Tests for tour costs, edge predicates and depth parity.

use super::*;

#[test]
fn test_path_cost() {
    assert_eq!(path_cost(&[1, 2, 3, 4, 5, 6]), 5);
    assert_eq!(path_cost(&[1, 3, 5, 2, 4, 6]), 11);
    assert_eq!(path_cost(&[1, 3, 6, 4, 2, 5, 7]), 14);
    assert_eq!(path_cost(&[1, 3, 5, 2, 4, 6, 7, 8, 9, 10, 11]), 16);
    assert_eq!(path_cost(&[1, 2, 3, 4, 5, 6, 8, 10, 7, 9, 11]), 16);
}

#[test]
fn test_cycle_cost() {
    assert_eq!(cycle_cost(&[1, 3, 2, 5, 4]), 8);
    assert_eq!(cycle_cost(&[1, 2, 3, 4, 5, 6]), 6);
    assert_eq!(cycle_cost(&[1, 2, 4, 3, 5, 6]), 8);
    assert_eq!(cycle_cost(&[1, 3, 4, 2, 5, 6, 7]), 11);
    assert_eq!(cycle_cost(&[1, 2, 3, 6, 4, 5, 7]), 11);
    assert_eq!(cycle_cost(&[1, 2, 3, 4, 5, 6, 8, 10, 7, 9, 11]), 17);
}

#[test]
fn test_paths_within_bound() {
    let n = 8.0;
    let straight = [1, 2, 3, 4, 5, 6, 7, 8];
    let zigzag = [1, 3, 5, 7, 2, 4, 6, 8];
    assert!(!paths_within_bound(&straight, &zigzag, 16.0 * (n - 1.0) / 5.0));
    assert!(paths_within_bound(&straight, &zigzag, 4.0 * (n - 1.0)));

    // 16 + 16 against a bound of exactly 32: strict inequality fails.
    let n = 11.0;
    let first = [1, 3, 5, 2, 4, 6, 7, 8, 9, 10, 11];
    let second = [1, 2, 3, 4, 5, 6, 8, 10, 7, 9, 11];
    assert!(!paths_within_bound(&first, &second, 16.0 * (n - 1.0) / 5.0));
    assert!(paths_within_bound(&first, &second, 4.0 * (n - 1.0)));
}

#[test]
fn test_cycles_within_bound() {
    let n = 8.0;
    let c1 = [1, 3, 4, 5, 6, 7, 8, 2];
    let c2 = [1, 7, 5, 3, 2, 4, 6, 8];
    assert!(cycles_within_bound(&c1, &c2, 16.0 * n / 5.0));
    assert!(cycles_within_bound(&c1, &c2, 4.0 * n));

    let c3 = [1, 2, 4, 5, 6, 7, 8, 3];
    let c4 = [1, 7, 5, 2, 3, 4, 6, 8];
    assert!(!cycles_within_bound(&c3, &c4, 16.0 * (n - 1.0) / 5.0));
    assert!(cycles_within_bound(&c3, &c4, 4.0 * (n - 1.0)));
}

#[test]
fn test_edge_exists_in_path() {
    let path = [1, 3, 2, 4];
    for (u, v) in [(1, 3), (2, 3), (2, 4)] {
        assert!(edge_exists_in_path(u, v, &path));
        assert!(edge_exists_in_path(v, u, &path));
    }
    for (u, v) in [(1, 4), (1, 2), (3, 4)] {
        assert!(!edge_exists_in_path(u, v, &path));
        assert!(!edge_exists_in_path(v, u, &path));
    }
}

#[test]
fn test_edge_exists_in_cycle_includes_closing_edge() {
    let cycle = [1, 3, 2, 4];
    for (u, v) in [(1, 3), (2, 3), (2, 4), (1, 4)] {
        assert!(edge_exists_in_cycle(u, v, &cycle));
        assert!(edge_exists_in_cycle(v, u, &cycle));
    }
    for (u, v) in [(1, 2), (3, 4)] {
        assert!(!edge_exists_in_cycle(u, v, &cycle));
        assert!(!edge_exists_in_cycle(v, u, &cycle));
    }
}

#[test]
fn test_are_disjoint_paths() {
    let p1 = [1, 2, 3, 4, 5, 6];
    let p2 = [1, 3, 5, 2, 4, 6];
    let p3 = [1, 3, 2, 5, 4, 6];
    assert!(are_disjoint_paths(&p1, &p2));
    assert!(are_disjoint_paths(&p2, &p1));
    assert!(!are_disjoint_paths(&p1, &p3));
    assert!(!are_disjoint_paths(&p2, &p3));
}

#[test]
fn test_are_disjoint_cycles() {
    let c1 = [1, 3, 4, 5, 6, 7, 8, 2];
    let c2 = [1, 7, 5, 3, 2, 4, 6, 8];
    let c3 = [1, 2, 4, 5, 6, 7, 8, 3];
    let c4 = [1, 7, 5, 2, 3, 4, 6, 8];
    assert!(are_disjoint_cycles(&c1, &c2));
    assert!(are_disjoint_cycles(&c3, &c4));
    assert!(!are_disjoint_cycles(&c1, &c3));
    assert!(!are_disjoint_cycles(&c2, &c3));
}

#[test]
fn test_closing_edge_breaks_cycle_disjointness() {
    // As paths these share nothing; as cycles both close with {1, 4}.
    let a = [1, 2, 3, 4];
    let b = [1, 3, 2, 4];
    assert!(!are_disjoint_cycles(&a, &b));
}

#[test]
#[should_panic(expected = "equal length")]
fn test_disjointness_rejects_length_mismatch() {
    are_disjoint_paths(&[1, 2, 3], &[1, 2, 3, 4]);
}

#[test]
#[should_panic(expected = "start at vertex 1")]
fn test_cycle_cost_rejects_wrong_start() {
    cycle_cost(&[2, 1, 3]);
}

#[test]
#[should_panic(expected = "end at vertex n")]
fn test_path_cost_rejects_wrong_end() {
    path_cost(&[1, 4, 2, 3]);
}

#[test]
#[should_panic(expected = "start at vertex 1")]
fn test_are_disjoint_paths_rejects_wrong_start() {
    are_disjoint_paths(&[2, 1, 3], &[1, 2, 3]);
}

#[test]
#[should_panic(expected = "start at vertex 1")]
fn test_edge_exists_in_path_rejects_wrong_start() {
    edge_exists_in_path(1, 2, &[3, 1, 2]);
}

#[test]
#[should_panic(expected = "end at vertex n")]
fn test_edge_exists_in_path_rejects_wrong_end() {
    edge_exists_in_path(1, 3, &[1, 3, 2]);
}

#[test]
#[should_panic(expected = "at least three vertices")]
fn test_cycle_cost_rejects_single_vertex() {
    cycle_cost(&[1]);
}

#[test]
#[should_panic(expected = "at least three vertices")]
fn test_depth_rejects_two_vertex_cycle() {
    is_odd_depth_cycle(&[1, 2]);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_depth_rejects_label_beyond_n() {
    reference_depth(&[1, 2, 9]);
}

#[test]
fn test_is_odd_depth_cycle() {
    assert!(!is_odd_depth_cycle(&[1, 3, 2, 5, 4]));
    assert!(is_odd_depth_cycle(&[1, 3, 4, 5, 6, 7, 8, 2]));
    assert!(!is_odd_depth_cycle(&[1, 7, 5, 3, 2, 4, 6, 8]));
}

#[test]
fn test_half_length_edge_counts_as_odd() {
    // Edge {1, 5} has length exactly n/2.
    let cycle = [1, 5, 3, 4, 6, 7, 8, 2];
    assert_eq!(reference_depth(&cycle), 3);
    assert!(is_odd_depth_cycle(&cycle));
}

#[test]
fn test_identity_cycle_has_depth_one() {
    let cycle: Vec<usize> = (1..=7).collect();
    assert_eq!(reference_depth(&cycle), 1);
    assert_eq!(
        HamiltonianCycle::new(cycle).unwrap().depth_parity(),
        DepthParity::Odd
    );
}

#[test]
fn test_edges_iterator_lengths() {
    let vertices = [1, 3, 2, 4];
    let open = Edges::new(&vertices, false);
    assert_eq!(open.len(), 3);
    let closed: Vec<_> = Edges::new(&vertices, true).collect();
    assert_eq!(closed.len(), 4);
    assert_eq!(closed[3], Edge::new(4, 1));
    assert_eq!(closed[3].endpoints(), (1, 4));
}

#[test]
fn test_typed_path_matches_slice_functions() {
    let path = HamiltonianPath::new(vec![1, 3, 5, 2, 4, 6]).unwrap();
    assert_eq!(path.cost(), 11);
    assert!(path.contains_edge(5, 2));
    let straight = HamiltonianPath::identity(6);
    assert_eq!(path.is_disjoint_from(&straight), Ok(true));
    assert_eq!(
        path.is_disjoint_from(&HamiltonianPath::identity(5)),
        Err(TourError::LengthMismatch { left: 6, right: 5 })
    );
}

#[test]
fn test_path_validation() {
    assert_eq!(HamiltonianPath::new(vec![1]), Err(TourError::TooShort { len: 1, min: 2 }));
    assert_eq!(HamiltonianPath::new(vec![2, 1, 3]), Err(TourError::WrongStart { found: 2 }));
    assert_eq!(
        HamiltonianPath::new(vec![1, 3, 2]),
        Err(TourError::WrongEnd { expected: 3, found: 2 })
    );
    assert_eq!(
        HamiltonianPath::new(vec![1, 2, 2, 4]),
        Err(TourError::NotAPermutation { label: 2 })
    );
    assert!(HamiltonianPath::try_from(vec![1, 2]).is_ok());
}

#[test]
fn test_cycle_validation() {
    assert_eq!(HamiltonianCycle::new(vec![1, 2]), Err(TourError::TooShort { len: 2, min: 3 }));
    assert_eq!(HamiltonianCycle::new(vec![3, 1, 2]), Err(TourError::WrongStart { found: 3 }));
    assert_eq!(
        HamiltonianCycle::new(vec![1, 2, 7]),
        Err(TourError::NotAPermutation { label: 7 })
    );
}

#[test]
fn test_canonicalize_rotation_and_reflection() {
    let expected = vec![1, 3, 2, 5, 4];
    let rotated = HamiltonianCycle::canonicalize(vec![3, 2, 5, 4, 1]).unwrap();
    let reflected = HamiltonianCycle::canonicalize(vec![1, 4, 5, 2, 3]).unwrap();
    assert_eq!(rotated.vertices(), expected.as_slice());
    assert_eq!(reflected.vertices(), expected.as_slice());
    assert!(rotated.is_canonical());
    assert!(!rotated.reflected().is_canonical());
    assert_eq!(rotated.reflected().cost(), rotated.cost());
}

#[test]
fn test_error_display() {
    let err = TourError::WrongEnd { expected: 6, found: 4 };
    assert_eq!(err.to_string(), "path must end at vertex 6, found 4");
}

#[test]
fn test_edge_deserialises_normalised() {
    let edge: Edge = serde_json::from_str("[5, 2]").unwrap();
    assert_eq!(edge.endpoints(), (2, 5));
    assert_eq!(edge, Edge::new(2, 5));
    assert_eq!(serde_json::to_string(&Edge::new(4, 1)).unwrap(), "[1,4]");
}
