//! src/components.rs
//!
//! Samenhangscomponenten van de gelabelde knopen. Wordt alleen gebruikt voor
//! validatie, niet op het hete pad van de zoektocht.

use crate::solution::Solution;
use bitvec::prelude::*;

/// Alle componenten van de door gelabelde knopen geïnduceerde subgraaf.
/// Elke component is oplopend gesorteerd; de componenten staan op kleinste lid.
pub fn connected_components(solution: &Solution<'_>) -> Vec<Vec<usize>> {
    let n = solution.graph().n();
    let mut visited = bitvec![0; n];
    let mut components = Vec::new();

    for start in solution.bitset().iter_ones() {
        if visited[start] {
            continue;
        }
        let mut component = collect_component(solution, start, &mut visited);
        component.sort_unstable();
        components.push(component);
    }
    debug_assert_eq!(
        components.iter().map(Vec::len).sum::<usize>(),
        solution.cost()
    );
    components
}

/// `true` zodra er een tweede component gevonden wordt.
pub fn has_many_components(solution: &Solution<'_>) -> bool {
    let mut visited = bitvec![0; solution.graph().n()];
    let mut found = 0usize;
    for start in solution.bitset().iter_ones() {
        if visited[start] {
            continue;
        }
        found += 1;
        if found > 1 {
            return true;
        }
        collect_component(solution, start, &mut visited);
    }
    false
}

/// Iteratieve DFS die alleen over gelabelde knopen loopt.
fn collect_component(solution: &Solution<'_>, start: usize, visited: &mut BitVec) -> Vec<usize> {
    let graph = solution.graph();
    let mut component = Vec::new();
    let mut stack = vec![start];
    visited.set(start, true);

    while let Some(u) = stack.pop() {
        component.push(u);
        for &w in graph.neighbors(u) {
            if !visited[w] && solution.is_labeled(w) {
                visited.set(w, true);
                stack.push(w);
            }
        }
    }
    component
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn splits_labeled_vertices_into_components() {
        // 0-1-2-3-4-5
        let g = Graph::from_edge_list(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]).unwrap();
        let s = Solution::from_vertices(&g, &[4, 0, 1, 5]);
        assert_eq!(connected_components(&s), vec![vec![0, 1], vec![4, 5]]);
        assert!(has_many_components(&s));

        let s = Solution::from_vertices(&g, &[2, 3, 1]);
        assert_eq!(connected_components(&s), vec![vec![1, 2, 3]]);
        assert!(!has_many_components(&s));
    }

    #[test]
    fn empty_labeling_has_no_components() {
        let g = Graph::from_edge_list(2, &[(0, 1)]).unwrap();
        let s = Solution::new(&g);
        assert!(connected_components(&s).is_empty());
        assert!(!has_many_components(&s));
    }
}
