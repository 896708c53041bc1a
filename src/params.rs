//! src/params.rs
//!
//! Bundelt alle afstembare parameters voor de RLP-oplosser.

use crate::budget::Budget;
use crate::construct::{check_alpha, Constructive, Grasp};
use crate::error::{Result, SolverError};
use crate::iterated::IteratedGreedy;
use crate::repair::Repairer;

/// Alle afstembare besturingselementen voor GRASP, de iterated greedy en de multi-start.
#[cfg_attr(feature = "python", pyo3::pyclass)]
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// GRASP alpha van de constructie in [0, 1]; `None` trekt per constructie een nieuwe alpha.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub alpha: Option<f64>,
    /// Alpha van de reparatie in de iterated greedy, los afgesteld van de constructie.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub repair_alpha: Option<f64>,
    /// Fractie van de regeneratoren die de destructiefase verwijdert.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub beta: f64,
    /// Deterioratiefactor van de reparatie (fase 1).
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub delta: f64,
    /// Iteraties zonder verbetering voordat de iterated greedy stopt.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub ig_iterations: usize,
    /// Aantal herstarts van de multi-start.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub ms_iterations: usize,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub max_time_seconds: f64,
    /// Purge na elke constructie (alleen multi-start constructive).
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub purge_construction: bool,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub use_local_search: bool,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub runs: usize, // Aantal runs per instantie
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub seed: u64, // Random seed van de eerste run
}

impl Default for Params {
    fn default() -> Self {
        Params {
            alpha: None,
            repair_alpha: None,
            beta: 0.2,
            delta: 1.0,
            ig_iterations: 100,
            ms_iterations: 100,
            max_time_seconds: 0.0,
            purge_construction: true,
            use_local_search: false,
            runs: 1,
            seed: 42,
        }
    }
}

impl Params {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        alpha: Option<f64>,
        repair_alpha: Option<f64>,
        beta: f64,
        delta: f64,
        ig_iterations: usize,
        ms_iterations: usize,
        max_time_seconds: f64,
        purge_construction: bool,
        use_local_search: bool,
        runs: usize,
        seed: u64,
    ) -> Self {
        Self {
            alpha,
            repair_alpha,
            beta,
            delta,
            ig_iterations,
            ms_iterations,
            max_time_seconds,
            purge_construction,
            use_local_search,
            runs,
            seed,
        }
    }

    /// Controleert beide alpha's, beta en delta.
    pub fn validate(&self) -> Result<()> {
        check_alpha(self.alpha)?;
        check_alpha(self.repair_alpha)?;
        if !(0.0..=1.0).contains(&self.beta) {
            return Err(SolverError::InvalidBeta(self.beta));
        }
        if !self.delta.is_finite() || self.delta < 0.0 {
            return Err(SolverError::InvalidDeterioration(self.delta));
        }
        Ok(())
    }

    /// Schakelt de lokale zoektocht (add-one-remove-many) na elke herstart in.
    pub fn enable_local_search(&mut self) -> &mut Self {
        self.use_local_search = true;
        self
    }

    /// Zet een tijdslimiet voor de multi-start; `0.0` betekent geen limiet.
    pub fn with_time_limit(&mut self, seconds: f64) -> &mut Self {
        self.max_time_seconds = seconds;
        self
    }

    /*────────── Componenten ──────────*/

    pub fn constructive(&self) -> Result<Constructive> {
        Ok(Constructive::Grasp(Grasp::new(self.alpha)?))
    }

    pub fn repairer(&self) -> Result<Repairer> {
        Repairer::new(self.repair_alpha, self.delta)
    }

    pub fn iterated_greedy(&self) -> Result<IteratedGreedy> {
        IteratedGreedy::new(self.ig_iterations, self.beta, self.repairer()?)
    }

    /// Nieuw budget voor één multi-start run.
    pub fn budget(&self) -> Budget {
        Budget::with_seconds(self.ms_iterations, self.max_time_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_valid() {
        let p = Params::default();
        assert!(p.validate().is_ok());
        assert_relative_eq!(p.beta, 0.2);
        assert_relative_eq!(p.delta, 1.0);
        assert_eq!(p.budget().time_limit(), None);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let mut p = Params::default();
        p.beta = 1.5;
        assert_eq!(p.validate(), Err(SolverError::InvalidBeta(1.5)));
        assert!(p.iterated_greedy().is_err());

        let mut p = Params::default();
        p.alpha = Some(-0.5);
        assert_eq!(p.validate(), Err(SolverError::InvalidAlpha(-0.5)));
        assert!(p.constructive().is_err());

        let mut p = Params::default();
        p.repair_alpha = Some(1.2);
        assert_eq!(p.validate(), Err(SolverError::InvalidAlpha(1.2)));
        assert!(p.repairer().is_err());
        assert!(p.constructive().is_ok());

        let mut p = Params::default();
        p.delta = -2.0;
        assert_eq!(p.validate(), Err(SolverError::InvalidDeterioration(-2.0)));
    }

    #[test]
    fn builders_chain() {
        let mut p = Params::default();
        p.enable_local_search().with_time_limit(2.5);
        assert!(p.use_local_search);
        assert_relative_eq!(p.max_time_seconds, 2.5);
        assert!(p.budget().time_limit().is_some());
    }

    #[test]
    fn construction_and_repair_alpha_are_independent() {
        let mut p = Params::default();
        p.alpha = Some(0.1);
        p.repair_alpha = Some(0.7);
        assert!(p.validate().is_ok());
        assert_eq!(p.repairer().unwrap().alpha(), Some(0.7));
        match p.constructive().unwrap() {
            Constructive::Grasp(grasp) => assert_eq!(grasp.alpha(), Some(0.1)),
            other => panic!("onverwachte constructie {other:?}"),
        }
        assert_eq!(p.iterated_greedy().unwrap().repairer().alpha(), Some(0.7));
    }

    #[test]
    fn new_matches_default() {
        let p = Params::new(None, None, 0.2, 1.0, 100, 100, 0.0, true, false, 1, 42);
        assert_eq!(p, Params::default());
    }
}
