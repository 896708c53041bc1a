//! src/candidate.rs
//!
//! Kandidatenlijst voor de greedy (re)constructie.
//!
//! De score van een knoop is het aantal buren dat nog niet "verbonden" is
//! (niet gelabeld en niet grenzend aan een gelabelde knoop). Kandidaten zijn
//! verbonden maar ongelabelde knopen. Selectie gebeurt uit de Restricted
//! Candidate List (RCL): alle kandidaten met score >= drempel, waarbij
//! `drempel = max - floor(alpha * (max - min))`.
//! `alpha = 0` is puur greedy, `alpha = 1` puur willekeurig.

use crate::graph::Graph;
use crate::solution::Solution;
use bitvec::prelude::*;
use rand::Rng;

/// Tijdelijk paar (score, knoop). De afgeleide ordening sorteert eerst op
/// score en daarna op knoop, een totale orde waarop binair gezocht kan worden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    pub score: usize,
    pub vertex: usize,
}

/// Incrementele toestand van één greedy (re)constructie.
pub(crate) struct GreedyState<'g> {
    graph: &'g Graph,
    solution: Solution<'g>,
    /// Aantal nog niet verbonden buren per knoop.
    scores: Vec<usize>,
    connected: BitVec,
    connected_count: usize,
    candidates: Vec<Candidate>,
}

impl<'g> GreedyState<'g> {
    pub(crate) fn new(graph: &'g Graph) -> Self {
        let n = graph.n();
        Self {
            graph,
            solution: Solution::new(graph),
            scores: (0..n).map(|v| graph.degree(v)).collect(),
            connected: bitvec![0; n],
            connected_count: 0,
            candidates: Vec::with_capacity(n),
        }
    }

    /// Elke knoop is gelabeld of grenst aan een gelabelde knoop.
    #[inline]
    pub(crate) fn is_feasible(&self) -> bool {
        self.connected_count == self.graph.n()
    }

    #[inline]
    pub(crate) fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    #[inline]
    pub(crate) fn nothing_connected(&self) -> bool {
        self.connected_count == 0
    }

    #[cfg(test)]
    pub(crate) fn score(&self, v: usize) -> usize {
        self.scores[v]
    }

    /// Zet een (nog niet verbonden) startknoop als enige kandidaat.
    pub(crate) fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.graph.n() == 0 {
            return;
        }
        let start = rng.gen_range(0..self.graph.n());
        self.candidates.push(Candidate {
            score: self.scores[start],
            vertex: start,
        });
    }

    /// Labelt `v` en verbindt zijn buren. Nieuw verbonden buren worden
    /// kandidaat, behalve als `withheld` ze uitsluit.
    pub(crate) fn label(&mut self, v: usize, withheld: Option<&BitSlice>) {
        self.solution.label(v);
        if !self.connected[v] {
            self.connect(v);
        }
        let graph = self.graph;
        for &w in graph.neighbors(v) {
            if self.connected[w] {
                continue;
            }
            self.connect(w);
            if !withheld.is_some_and(|mask| mask[w]) {
                self.candidates.push(Candidate {
                    score: self.scores[w],
                    vertex: w,
                });
            }
        }
    }

    fn connect(&mut self, v: usize) {
        self.connected.set(v, true);
        self.connected_count += 1;
        for &adj in self.graph.neighbors(v) {
            self.scores[adj] -= 1;
        }
    }

    /// Vervangt de kandidatenlijst door alle verbonden, ongelabelde knopen.
    pub(crate) fn rebuild_candidates(&mut self) {
        self.candidates = self
            .connected
            .iter_ones()
            .filter(|&v| !self.solution.is_labeled(v))
            .map(|v| Candidate {
                score: self.scores[v],
                vertex: v,
            })
            .collect();
    }

    /// Kiest willekeurig uit de RCL en haalt de kandidaat uit de lijst.
    /// Geeft `None` als er geen kandidaten meer zijn.
    pub(crate) fn select_rcl<R: Rng + ?Sized>(&mut self, alpha: f64, rng: &mut R) -> Option<usize> {
        if self.candidates.is_empty() {
            return None;
        }
        for c in self.candidates.iter_mut() {
            c.score = self.scores[c.vertex];
        }
        self.candidates.sort_unstable();

        let min = self.candidates[0].score;
        let max = self.candidates[self.candidates.len() - 1].score;
        let threshold = rcl_threshold(min, max, alpha);
        let start = self.candidates.partition_point(|c| c.score < threshold);

        let index = rng.gen_range(start..self.candidates.len());
        Some(self.candidates.swap_remove(index).vertex)
    }

    /// Kiest uniform uit de volledige kandidatenlijst (zonder sorteren).
    pub(crate) fn select_uniform<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.candidates.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.candidates.len());
        Some(self.candidates.swap_remove(index).vertex)
    }

    pub(crate) fn into_solution(self) -> Solution<'g> {
        self.solution
    }
}

/// `max - floor(alpha * (max - min))`; ligt altijd in `[min, max]`.
#[inline]
pub(crate) fn rcl_threshold(min: usize, max: usize, alpha: f64) -> usize {
    let spread = max - min;
    let drop = ((alpha * spread as f64).floor() as usize).min(spread);
    max - drop
}
