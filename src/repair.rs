//! src/repair.rs
//!
//! Reconstructie van een gedeeltelijke oplossing na de destructiefase.
//!
//! Fase 1: label eerst de behouden knopen, en vul daarna greedy aan met de
//! RCL, maar zonder de zojuist verwijderde knopen als kandidaat. Dit duwt de
//! reparatie weg van de oude oplossing. Maximaal `ceil(|excluded| * delta)`
//! toevoegingen.
//! Fase 2: als de oplossing dan nog niet haalbaar is, wordt de
//! kandidatenlijst opnieuw opgebouwd uit alle verbonden, ongelabelde knopen
//! (zonder uitsluiting) en greedy verder gevuld tot alles gedomineerd is.

use crate::candidate::GreedyState;
use crate::construct::{check_alpha, resolve_alpha};
use crate::error::{Result, SolverError};
use crate::graph::Graph;
use crate::solution::Solution;
use bitvec::prelude::*;
use log::warn;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repairer {
    alpha: Option<f64>,
    /// Deterioratiefactor: hoeveel toevoegingen fase 1 mag doen per uitgesloten knoop.
    delta: f64,
}

impl Repairer {
    pub fn new(alpha: Option<f64>, delta: f64) -> Result<Self> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(SolverError::InvalidDeterioration(delta));
        }
        Ok(Self {
            alpha: check_alpha(alpha)?,
            delta,
        })
    }

    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Maximaal aantal toevoegingen in fase 1.
    #[inline]
    pub fn phase_one_limit(&self, excluded: usize) -> usize {
        (excluded as f64 * self.delta).ceil() as usize
    }

    /// Bouwt vanaf nul een haalbare oplossing met dezelfde machinerie
    /// (zonder behouden of uitgesloten knopen).
    pub fn construct<'g, R>(&self, graph: &'g Graph, rng: &mut R) -> Solution<'g>
    where
        R: Rng + ?Sized,
    {
        self.repair(graph, &[], &[], rng)
    }

    /// Repareert de gedeeltelijke oplossing `retained` tot een haalbare oplossing.
    ///
    /// Voorwaarde: `retained` induceert een samenhangende subgraaf van een
    /// samenhangende `graph` (zoals na de destructiefase van de iterated greedy).
    pub fn repair<'g, R>(
        &self,
        graph: &'g Graph,
        retained: &[usize],
        excluded: &[usize],
        rng: &mut R,
    ) -> Solution<'g>
    where
        R: Rng + ?Sized,
    {
        let alpha = resolve_alpha(self.alpha, rng);
        let n = graph.n();
        let mut state = GreedyState::new(graph);

        let mut excluded_mask = bitvec![0; n];
        for &v in excluded {
            excluded_mask.set(v, true);
        }
        let limit = self.phase_one_limit(excluded_mask.count_ones());

        // Behouden knopen mogen zelf nooit kandidaat worden.
        let mut withheld = excluded_mask.clone();
        for &v in retained {
            withheld.set(v, true);
        }
        for &v in retained {
            state.label(v, Some(&withheld));
        }
        if state.nothing_connected() {
            state.seed(rng);
        }

        // Fase 1: verwijderde knopen blijven buiten de kandidatenlijst.
        let mut added = 0usize;
        while !state.is_feasible() && state.has_candidates() && added < limit {
            let Some(v) = state.select_rcl(alpha, rng) else {
                break;
            };
            state.label(v, Some(&excluded_mask));
            added += 1;
        }

        // Fase 2: alle verbonden knopen mogen weer meedoen.
        if !state.is_feasible() && !state.nothing_connected() {
            state.rebuild_candidates();
        }
        while !state.is_feasible() {
            let Some(v) = state.select_rcl(alpha, rng) else {
                warn!("reparatie zonder kandidaten gestopt; is de graaf samenhangend?");
                break;
            };
            state.label(v, None);
        }

        state.into_solution()
    }
}
