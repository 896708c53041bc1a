// tests/scenarios.rs
//! Scenario's op kleine, met de hand na te rekenen grafen: ster, cyclus,
//! rooster en het voorbeeld met twaalf knopen.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rlp::{
    find_articulation_points, multi_start_constructive, purge_all, solve, solve_runs, Budget,
    Constructive, Graph, Grasp, Params, Solution, SolverError,
};

fn star(leaves: usize) -> Graph {
    let edges: Vec<_> = (1..=leaves).map(|v| (0, v)).collect();
    Graph::from_edge_list(leaves + 1, &edges).unwrap()
}

fn cycle(n: usize) -> Graph {
    let edges: Vec<_> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    Graph::from_edge_list(n, &edges).unwrap()
}

fn grid(rows: usize, cols: usize) -> Graph {
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                edges.push((v, v + 1));
            }
            if r + 1 < rows {
                edges.push((v, v + cols));
            }
        }
    }
    Graph::from_edge_list(rows * cols, &edges).unwrap()
}

#[test]
fn star_collapses_to_its_centre() {
    let g = star(9);
    let grasp = Grasp::new(Some(0.0)).unwrap();
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut s = grasp.construct(&g, &mut rng);
        assert!(s.validate());
        assert!(s.cost() <= 2);
        purge_all(&mut s, &mut rng);
        assert_eq!(s.labeled_vertices(), vec![0]);
    }
}

#[test]
fn five_cycle_needs_three_regenerators() {
    // Drie opeenvolgende knopen zijn nodig én voldoende op C5.
    let g = cycle(5);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let outcome = multi_start_constructive(
        &g,
        &Constructive::Grasp(Grasp::new(None).unwrap()),
        true,
        false,
        &Budget::new(25, None),
        &mut rng,
    );
    assert_eq!(outcome.cost(), 3);

    let grasp = Grasp::new(Some(0.5)).unwrap();
    for seed in 0..25 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut s = grasp.construct(&g, &mut rng);
        purge_all(&mut s, &mut rng);
        assert!(s.validate());
        assert_eq!(s.cost(), 3);
    }
}

#[test]
fn twelve_vertex_example() {
    let edges = [
        (0, 1),
        (0, 4),
        (1, 2),
        (1, 4),
        (2, 3),
        (3, 4),
        (3, 5),
        (4, 8),
        (5, 6),
        (5, 7),
        (8, 9),
        (8, 10),
        (9, 11),
    ];
    let g = Graph::from_edge_list(12, &edges).unwrap();
    let s = Solution::from_vertices(&g, &[3, 4, 5, 8, 9]);
    assert!(s.validate());
    let ap: Vec<_> = find_articulation_points(&s).iter().collect();
    assert_eq!(ap, vec![3, 4, 8]);

    let mut params = Params::default();
    params.ms_iterations = 5;
    params.ig_iterations = 20;
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let outcome = solve(&g, &params, &mut rng).unwrap();
    assert!(outcome.solution.validate());
    // 3, 4, 5, 8 en 9 zijn snijpunten van de graaf zelf en dus altijd nodig
    assert_eq!(outcome.solution.labeled_vertices(), vec![3, 4, 5, 8, 9]);
}

#[test]
fn grid_runs_are_reproducible() {
    let g = grid(5, 6);
    let mut params = Params::default();
    params.ms_iterations = 4;
    params.ig_iterations = 15;
    params.runs = 2;
    params.enable_local_search();

    let first = solve_runs(&g, &params).unwrap();
    let second = solve_runs(&g, &params).unwrap();
    assert!(first.solution.validate());
    assert!(!first.timed_out);
    assert_eq!(first.cost(), second.cost());
    assert_eq!(first.solution.labeled_vertices(), second.solution.labeled_vertices());
}

#[test]
fn single_vertex_graph_is_solved_by_itself() {
    let g = Graph::with_vertices(1);
    let outcome = solve_runs(&g, &Params::default()).unwrap();
    assert_eq!(outcome.solution.labeled_vertices(), vec![0]);
    assert!(outcome.solution.validate());
}

#[test]
fn invalid_input_is_reported() {
    let mut params = Params::default();
    params.alpha = Some(1.5);
    assert_eq!(
        solve_runs(&cycle(4), &params).unwrap_err(),
        SolverError::InvalidAlpha(1.5)
    );
    assert_eq!(
        Graph::from_edge_list(3, &[(0, 3)]).unwrap_err(),
        SolverError::VertexOutOfRange { vertex: 3, n: 3 }
    );
}
