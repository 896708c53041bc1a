//! src/articulation.rs
//!
//! Articulatiepunten van de subgraaf die door de gelabelde knopen wordt
//! geïnduceerd (Tarjan: ontdekkingstijd + low-link in één DFS). Een
//! gelabelde knoop die géén articulatiepunt is, kan verwijderd worden zonder
//! de gelabelde knopen op te splitsen.
//!
//! De DFS gebruikt een expliciete stapel zodat lange paden van gelabelde
//! knopen de call-stack niet kunnen opblazen.

use crate::solution::Solution;
use bitvec::prelude::*;

const NO_PARENT: usize = usize::MAX;

/// Verzameling articulatiepunten, opnieuw berekend bij elke aanroep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticulationPoints {
    points: BitVec,
    count: usize,
}

impl ArticulationPoints {
    fn empty(n: usize) -> Self {
        Self {
            points: bitvec![0; n],
            count: 0,
        }
    }

    fn insert(&mut self, v: usize) {
        if !self.points[v] {
            self.points.set(v, true);
            self.count += 1;
        }
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.points[v]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// De articulatiepunten in oplopende volgorde.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.points.iter_ones()
    }
}

/// Zoekt de articulatiepunten van de gelabelde knopen.
///
/// Voorwaarde: de gelabelde knopen vormen één component (geldt voor elke
/// haalbare oplossing). Met minder dan twee gelabelde knopen is de
/// verzameling leeg. O(R + E(R)).
pub fn find_articulation_points(solution: &Solution<'_>) -> ArticulationPoints {
    let graph = solution.graph();
    let n = graph.n();
    let mut result = ArticulationPoints::empty(n);
    if solution.cost() < 2 {
        return result;
    }
    let root = match solution.bitset().first_one() {
        Some(r) => r,
        None => return result,
    };

    // disc[v] == 0 betekent: nog niet bezocht.
    let mut disc = vec![0usize; n];
    let mut low = vec![0usize; n];
    let mut parent = vec![NO_PARENT; n];
    let mut time = 1usize;
    let mut root_children = 0usize;

    disc[root] = time;
    low[root] = time;
    // (knoop, index van de volgende buur)
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

    while let Some(top) = stack.last_mut() {
        let u = top.0;
        let adj = graph.neighbors(u);
        if top.1 < adj.len() {
            let v = adj[top.1];
            top.1 += 1;
            if !solution.is_labeled(v) {
                continue;
            }
            if disc[v] == 0 {
                parent[v] = u;
                time += 1;
                disc[v] = time;
                low[v] = time;
                stack.push((v, 0));
            } else if parent[u] != v {
                // terugkant: slechts één stap omhoog
                low[u] = low[u].min(disc[v]);
            }
        } else {
            stack.pop();
            let p = parent[u];
            if p == NO_PARENT {
                continue;
            }
            low[p] = low[p].min(low[u]);
            if p == root {
                root_children += 1;
            } else if low[u] >= disc[p] {
                result.insert(p);
            }
        }
    }

    if root_children > 1 {
        result.insert(root);
    }
    result
}
