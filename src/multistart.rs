//! src/multistart.rs
//!
//! Multi-start drivers rond de constructieve methoden, de iterated greedy en
//! de lokale zoektocht, plus het gecontroleerde toegangspunt `solve`.
//! Elke herstart bouwt een nieuwe oplossing; de goedkoopste wordt bewaard.
//! Het budget wordt alleen tussen herstarts (en tussen IG-iteraties) bekeken.

use crate::budget::Budget;
use crate::construct::Constructive;
use crate::error::{Result, SolverError};
use crate::graph::Graph;
use crate::iterated::IteratedGreedy;
use crate::local_search::improve_until_stable;
use crate::params::Params;
use crate::purge::purge_all;
use crate::solution::Solution;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Resultaat van een multi-start run.
#[derive(Clone, Debug)]
pub struct Outcome<'g> {
    pub solution: Solution<'g>,
    /// Aantal uitgevoerde herstarts.
    pub iterations: usize,
    pub elapsed: Duration,
    /// Verstreken tijd op het moment dat de beste oplossing gevonden werd.
    pub time_to_best: Duration,
    pub timed_out: bool,
}

impl<'g> Outcome<'g> {
    #[inline]
    pub fn cost(&self) -> usize {
        self.solution.cost()
    }
}

/// Per herstart: construeer, verbeter met de iterated greedy en (optioneel)
/// met herhaalde lokale zoektocht.
pub fn multi_start_iterated_greedy<'g, R>(
    graph: &'g Graph,
    constructive: &Constructive,
    ig: &IteratedGreedy,
    local_search: bool,
    budget: &Budget,
    rng: &mut R,
) -> Outcome<'g>
where
    R: Rng + ?Sized,
{
    run_restarts(graph, budget, |iteration| {
        let start = constructive.construct(graph, rng);
        let initial = start.cost();
        let mut sol = ig.iterate_within(start, budget, rng);
        if local_search {
            improve_until_stable(&mut sol, rng);
        }
        debug!("herstart {iteration}: constructie {initial} -> {}", sol.cost());
        sol
    })
}

/// Per herstart: construeer, optioneel purgen en optioneel herhaalde lokale zoektocht.
pub fn multi_start_constructive<'g, R>(
    graph: &'g Graph,
    constructive: &Constructive,
    purge: bool,
    local_search: bool,
    budget: &Budget,
    rng: &mut R,
) -> Outcome<'g>
where
    R: Rng + ?Sized,
{
    run_restarts(graph, budget, |iteration| {
        let mut sol = constructive.construct(graph, rng);
        let initial = sol.cost();
        if purge {
            purge_all(&mut sol, rng);
        }
        if local_search {
            improve_until_stable(&mut sol, rng);
        }
        debug!("herstart {iteration}: constructie {initial} -> {}", sol.cost());
        sol
    })
}

/// Gedeelde herstartlus: minstens één herstart, daarna tot het budget op is.
fn run_restarts<'g, F>(graph: &'g Graph, budget: &Budget, mut restart: F) -> Outcome<'g>
where
    F: FnMut(usize) -> Solution<'g>,
{
    let mut best: Option<Solution<'g>> = None;
    let mut time_to_best = Duration::ZERO;
    let mut iterations = 0usize;

    loop {
        iterations += 1;
        let sol = restart(iterations);
        debug_assert!(graph.n() == 0 || sol.validate());

        if best.as_ref().map_or(true, |b| sol.cost() < b.cost()) {
            time_to_best = budget.elapsed();
            debug!("nieuwe beste oplossing in herstart {iterations}: kost {}", sol.cost());
            best = Some(sol);
        }
        if budget.is_exhausted(iterations) {
            break;
        }
    }

    Outcome {
        solution: best.unwrap_or_else(|| Solution::new(graph)),
        iterations,
        elapsed: budget.elapsed(),
        time_to_best,
        timed_out: budget.time_exceeded(),
    }
}

/// Controleert parameters en graaf en draait de multi-start iterated greedy
/// met de componenten uit `params`.
pub fn solve<'g, R>(graph: &'g Graph, params: &Params, rng: &mut R) -> Result<Outcome<'g>>
where
    R: Rng + ?Sized,
{
    params.validate()?;
    check_graph(graph)?;

    let constructive = params.constructive()?;
    let ig = params.iterated_greedy()?;
    let budget = params.budget();

    let outcome = multi_start_iterated_greedy(
        graph,
        &constructive,
        &ig,
        params.use_local_search,
        &budget,
        rng,
    );
    report("MS-IG", graph, &outcome);
    Ok(outcome)
}

/// Zoals `solve`, maar met de multi-start constructive (GRASP, optioneel
/// gevolgd door purge en lokale zoektocht) in plaats van de iterated greedy.
pub fn solve_constructive<'g, R>(
    graph: &'g Graph,
    params: &Params,
    rng: &mut R,
) -> Result<Outcome<'g>>
where
    R: Rng + ?Sized,
{
    params.validate()?;
    check_graph(graph)?;

    let constructive = params.constructive()?;
    let budget = params.budget();

    let outcome = multi_start_constructive(
        graph,
        &constructive,
        params.purge_construction,
        params.use_local_search,
        &budget,
        rng,
    );
    report("MS-C", graph, &outcome);
    Ok(outcome)
}

fn report(algorithm: &str, graph: &Graph, outcome: &Outcome<'_>) {
    info!(
        "{algorithm} n={} m={}: kost {} na {} herstarts in {:?} (beste na {:?})",
        graph.n(),
        graph.m(),
        outcome.cost(),
        outcome.iterations,
        outcome.elapsed,
        outcome.time_to_best
    );
}

/// Draait `params.runs` onafhankelijke runs na elkaar, run `i` met seed
/// `params.seed + i`, en geeft de goedkoopste terug.
pub fn solve_runs<'g>(graph: &'g Graph, params: &Params) -> Result<Outcome<'g>> {
    let runs = params.runs.max(1);
    let mut best: Option<Outcome<'g>> = None;
    let mut timed_out = false;

    for i in 0..runs {
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed.wrapping_add(i as u64));
        let outcome = solve(graph, params, &mut rng)?;
        timed_out |= outcome.timed_out;
        if best.as_ref().map_or(true, |b| outcome.cost() < b.cost()) {
            best = Some(outcome);
        }
    }

    let mut best = best.ok_or(SolverError::EmptyGraph)?;
    best.timed_out = timed_out;
    Ok(best)
}

fn check_graph(graph: &Graph) -> Result<()> {
    if graph.n() == 0 {
        return Err(SolverError::EmptyGraph);
    }
    if !graph.is_connected() {
        return Err(SolverError::DisconnectedGraph);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::Grasp;
    use crate::repair::Repairer;

    fn cycle(n: usize) -> Graph {
        let edges: Vec<_> = (0..n).map(|v| (v, (v + 1) % n)).collect();
        Graph::from_edge_list(n, &edges).unwrap()
    }

    #[test]
    fn restarts_respect_iteration_limit() {
        let g = cycle(8);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let budget = Budget::new(4, None);
        let outcome = multi_start_constructive(
            &g,
            &Constructive::Grasp(Grasp::greedy()),
            true,
            false,
            &budget,
            &mut rng,
        );
        assert_eq!(outcome.iterations, 4);
        assert!(!outcome.timed_out);
        assert!(outcome.solution.validate());
        // een pad van 6 opeenvolgende knopen domineert C8
        assert_eq!(outcome.cost(), 6);
    }

    #[test]
    fn zero_iteration_limit_still_runs_once() {
        let g = cycle(5);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let ig = IteratedGreedy::new(5, 0.3, Repairer::new(None, 1.0).unwrap()).unwrap();
        let outcome = multi_start_iterated_greedy(
            &g,
            &Constructive::Random,
            &ig,
            true,
            &Budget::new(0, None),
            &mut rng,
        );
        assert_eq!(outcome.iterations, 1);
        assert!(outcome.solution.validate());
    }

    #[test]
    fn constructive_entry_point_uses_purge_switch() {
        let edges: Vec<_> = (1..10).map(|v| (0, v)).collect();
        let star = Graph::from_edge_list(10, &edges).unwrap();
        let mut params = Params::default();
        params.alpha = Some(0.0);
        params.ms_iterations = 3;
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let outcome = solve_constructive(&star, &params, &mut rng).unwrap();
        assert_eq!(outcome.solution.labeled_vertices(), vec![0]);
        assert_eq!(outcome.iterations, 3);
    }

    #[test]
    fn solve_rejects_bad_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let params = Params::default();
        assert_eq!(
            solve(&Graph::with_vertices(0), &params, &mut rng).unwrap_err(),
            SolverError::EmptyGraph
        );
        let split = Graph::from_edge_list(4, &[(0, 1), (2, 3)]).unwrap();
        assert_eq!(
            solve(&split, &params, &mut rng).unwrap_err(),
            SolverError::DisconnectedGraph
        );
        let mut bad = Params::default();
        bad.beta = -0.1;
        assert_eq!(
            solve(&cycle(4), &bad, &mut rng).unwrap_err(),
            SolverError::InvalidBeta(-0.1)
        );
    }

    #[test]
    fn time_limit_stops_the_restarts() {
        let g = cycle(30);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let ig = IteratedGreedy::new(3, 0.2, Repairer::new(None, 1.0).unwrap()).unwrap();
        let budget = Budget::new(usize::MAX, Some(Duration::from_nanos(1)));
        let outcome = multi_start_iterated_greedy(
            &g,
            &Constructive::Grasp(Grasp::greedy()),
            &ig,
            false,
            &budget,
            &mut rng,
        );
        assert!(outcome.timed_out);
        assert_eq!(outcome.iterations, 1);
        assert!(outcome.time_to_best <= outcome.elapsed);
        assert!(outcome.solution.validate());

        let mut params = Params::default();
        params.with_time_limit(1e-9);
        let outcome = solve_runs(&g, &params).unwrap();
        assert!(outcome.timed_out);
        assert_eq!(outcome.iterations, 1);
    }
}
