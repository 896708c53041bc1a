//! src/purge.rs
//!
//! Verwijdert overbodige regeneratoren uit een haalbare oplossing, zonder de
//! haalbaarheid te breken. Een gelabelde knoop `r` mag weg als:
//! 1. `r` geen articulatiepunt is van de gelabelde subgraaf, en
//! 2. `r` niet de enige gelabelde buur is van een ongelabelde knoop.
//!
//! Het resultaat hangt af van de volgorde, die daarom willekeurig is.
//! Articulatiepunten worden alleen herberekend na het verwijderen van een
//! "interne" knoop (meer dan één gelabelde buur). O(V * R^2).

use crate::articulation::find_articulation_points;
use crate::graph::Graph;
use crate::solution::Solution;
use bitvec::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Purge zonder uitgesloten knopen.
pub fn purge_all<R>(solution: &mut Solution<'_>, rng: &mut R)
where
    R: Rng + ?Sized,
{
    purge(solution, &[], rng);
}

/// Verwijdert zoveel mogelijk overbodige gelabelde knopen; knopen in
/// `excluded` blijven altijd staan. De kost stijgt nooit.
pub fn purge<R>(solution: &mut Solution<'_>, excluded: &[usize], rng: &mut R)
where
    R: Rng + ?Sized,
{
    let graph = solution.graph();
    let mut keep = bitvec![0; graph.n()];
    for &v in excluded {
        keep.set(v, true);
    }

    let mut unlabeled_edges = edges_to_unlabeled(solution);
    let mut articulation = find_articulation_points(solution);

    let mut order = solution.labeled_vertices();
    order.shuffle(rng);

    for r in order {
        // De laatste regenerator blijft altijd staan.
        if solution.cost() <= 1 {
            break;
        }
        if keep[r] || articulation.contains(r) || has_dependent(solution, r, &unlabeled_edges) {
            continue;
        }
        let internal = graph.degree(r) - unlabeled_edges[r] > 1;
        solution.unlabel(r);
        for &adj in graph.neighbors(r) {
            unlabeled_edges[adj] += 1;
        }
        if internal {
            articulation = find_articulation_points(solution);
        }
    }
}

/// `true` als een ongelabelde buur van `r` geen andere gelabelde buur heeft.
fn has_dependent(solution: &Solution<'_>, r: usize, unlabeled_edges: &[usize]) -> bool {
    let graph = solution.graph();
    graph
        .neighbors(r)
        .iter()
        .any(|&adj| !solution.is_labeled(adj) && labeled_degree(graph, adj, unlabeled_edges) == 1)
}

#[inline]
fn labeled_degree(graph: &Graph, v: usize, unlabeled_edges: &[usize]) -> usize {
    graph.degree(v) - unlabeled_edges[v]
}

/// Per knoop het aantal kanten naar ongelabelde knopen. O(V + E).
fn edges_to_unlabeled(solution: &Solution<'_>) -> Vec<usize> {
    let graph = solution.graph();
    let mut counts: Vec<usize> = (0..graph.n()).map(|v| graph.degree(v)).collect();
    for r in solution.bitset().iter_ones() {
        for &adj in graph.neighbors(r) {
            counts[adj] -= 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn star_reduces_to_center() {
        let edges: Vec<_> = (1..10).map(|v| (0, v)).collect();
        let g = Graph::from_edge_list(10, &edges).unwrap();
        let all: Vec<usize> = (0..10).collect();
        for seed in 0..5 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut s = Solution::from_vertices(&g, &all);
            purge_all(&mut s, &mut rng);
            assert_eq!(s.labeled_vertices(), vec![0]);
        }
    }

    #[test]
    fn path_keeps_inner_vertices() {
        let g = Graph::from_edge_list(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut s = Solution::from_vertices(&g, &[0, 1, 2, 3, 4]);
        purge_all(&mut s, &mut rng);
        assert_eq!(s.labeled_vertices(), vec![1, 2, 3]);
        assert!(s.validate());
    }

    #[test]
    fn excluded_vertices_survive() {
        let edges: Vec<_> = (1..6).map(|v| (0, v)).collect();
        let g = Graph::from_edge_list(6, &edges).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut s = Solution::from_vertices(&g, &[0, 3, 4]);
        purge(&mut s, &[4], &mut rng);
        assert_eq!(s.labeled_vertices(), vec![0, 4]);
    }

    #[test]
    fn single_vertex_is_never_removed() {
        let g = Graph::with_vertices(1);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut s = Solution::from_vertices(&g, &[0]);
        purge_all(&mut s, &mut rng);
        assert_eq!(s.cost(), 1);
        assert!(s.validate());
    }

    #[test]
    fn counts_edges_to_unlabeled() {
        let g = Graph::from_edge_list(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let s = Solution::from_vertices(&g, &[1, 2]);
        assert_eq!(edges_to_unlabeled(&s), vec![0, 1, 1, 0]);
    }
}
