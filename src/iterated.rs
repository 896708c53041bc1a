//! src/iterated.rs
//!
//! Iterated greedy: destructie → reparatie → purge → accepteer/verwerp.
//!
//! Elke iteratie verwijdert `ceil(cost * beta)` willekeurige gelabelde
//! knopen die geen articulatiepunt zijn (zodat de rest samenhangend blijft),
//! repareert met de `Repairer` (verwijderde knopen uitgesloten in fase 1) en
//! ruimt op met `purge`. Alleen een strikt goedkopere oplossing vervangt de
//! beste; daarna begint de teller van niet-verbeterende iteraties opnieuw.

use crate::articulation::find_articulation_points;
use crate::budget::Budget;
use crate::error::{Result, SolverError};
use crate::purge::purge_all;
use crate::repair::Repairer;
use crate::solution::Solution;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IteratedGreedy {
    /// Aantal opeenvolgende iteraties zonder verbetering voordat we stoppen.
    iterations: usize,
    beta: f64,
    repairer: Repairer,
}

impl IteratedGreedy {
    pub fn new(iterations: usize, beta: f64, repairer: Repairer) -> Result<Self> {
        if !(0.0..=1.0).contains(&beta) {
            return Err(SolverError::InvalidBeta(beta));
        }
        Ok(Self {
            iterations,
            beta,
            repairer,
        })
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn repairer(&self) -> &Repairer {
        &self.repairer
    }

    /// Verbetert `solution` tot `iterations` iteraties op rij niets opleveren.
    /// Het resultaat is nooit duurder dan de invoer.
    pub fn iterate<'g, R>(&self, solution: Solution<'g>, rng: &mut R) -> Solution<'g>
    where
        R: Rng + ?Sized,
    {
        self.iterate_within(solution, &Budget::unlimited(), rng)
    }

    /// Als `iterate`, maar stopt ook wanneer de tijd van `budget` op is
    /// (gecontroleerd tussen iteraties).
    pub fn iterate_within<'g, R>(
        &self,
        solution: Solution<'g>,
        budget: &Budget,
        rng: &mut R,
    ) -> Solution<'g>
    where
        R: Rng + ?Sized,
    {
        let graph = solution.graph();
        let mut best = solution;
        let mut stale = 0usize;

        while stale < self.iterations && !budget.time_exceeded() {
            stale += 1;

            let mut work = best.clone();
            let removed = destroy(&mut work, self.beta, rng);
            let retained = work.labeled_vertices();
            let mut repaired = self.repairer.repair(graph, &retained, &removed, rng);

            let rebuilt = repaired.cost();
            purge_all(&mut repaired, rng);
            debug_assert!(repaired.validate(), "iterated greedy produceerde een ongeldige oplossing");

            if repaired.cost() < best.cost() {
                debug!(
                    "IG verbetering: {} -> {} (gerepareerd {}, gepurged {})",
                    best.cost(),
                    repaired.cost(),
                    rebuilt,
                    rebuilt - repaired.cost()
                );
                best = repaired;
                stale = 0;
            }
        }
        best
    }
}

/// Verwijdert `ceil(cost * beta)` willekeurige niet-articulatiepunten, één
/// voor één met herberekening van de articulatiepunten. Stopt vroeg als alle
/// resterende gelabelde knopen articulatiepunten zijn. Geeft de verwijderde
/// knopen terug; er blijft altijd minstens één gelabelde knoop over.
pub fn destroy<R>(solution: &mut Solution<'_>, beta: f64, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let cost = solution.cost();
    let n_remove = (cost as f64 * beta).ceil() as usize;
    let mut removed = Vec::with_capacity(n_remove);
    if n_remove >= cost {
        return removed;
    }

    for _ in 0..n_remove {
        let articulation = find_articulation_points(solution);
        let removable: Vec<usize> = solution
            .bitset()
            .iter_ones()
            .filter(|&v| !articulation.contains(v))
            .collect();
        let Some(&chosen) = removable.choose(rng) else {
            break;
        };
        solution.unlabel(chosen);
        removed.push(chosen);
    }
    removed
}
