//! src/construct.rs
//!
//! Constructieve methoden die vanaf nul een haalbare oplossing bouwen.
//! 1. Kies een willekeurige knoop als enige kandidaat.
//! 2. Zolang niet elke knoop verbonden is: kies een kandidaat, label hem en
//!    maak zijn ongelabelde buren kandidaat.
//!
//! `Grasp` kiest uit de RCL, `Constructive::Random` uniform uit alle
//! kandidaten. Puur greedy is `Grasp` met `alpha = 0`.

use crate::candidate::GreedyState;
use crate::error::{Result, SolverError};
use crate::graph::Graph;
use crate::solution::Solution;
use log::warn;
use rand::Rng;

/// Controleert alpha. `None` (of NaN) betekent: trek per constructie een nieuwe alpha.
pub(crate) fn check_alpha(alpha: Option<f64>) -> Result<Option<f64>> {
    match alpha {
        None => Ok(None),
        Some(a) if a.is_nan() => Ok(None),
        Some(a) if (0.0..=1.0).contains(&a) => Ok(Some(a)),
        Some(a) => Err(SolverError::InvalidAlpha(a)),
    }
}

/// De alpha voor deze run: de vaste waarde of een uniforme trekking in [0, 1).
#[inline]
pub(crate) fn resolve_alpha<R: Rng + ?Sized>(alpha: Option<f64>, rng: &mut R) -> f64 {
    alpha.unwrap_or_else(|| rng.gen::<f64>())
}

/// Gerandomiseerde greedy constructie met Restricted Candidate List.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grasp {
    alpha: Option<f64>,
}

impl Grasp {
    /// `alpha` moet in `[0, 1]` liggen; `None` kiest per run een willekeurige alpha.
    pub fn new(alpha: Option<f64>) -> Result<Self> {
        Ok(Self {
            alpha: check_alpha(alpha)?,
        })
    }

    /// Puur greedy: altijd een kandidaat met de hoogste score.
    pub fn greedy() -> Self {
        Self { alpha: Some(0.0) }
    }

    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// Bouwt een haalbare oplossing. Voorwaarde: `graph` is niet leeg en samenhangend.
    pub fn construct<'g, R>(&self, graph: &'g Graph, rng: &mut R) -> Solution<'g>
    where
        R: Rng + ?Sized,
    {
        let alpha = resolve_alpha(self.alpha, rng);
        let mut state = GreedyState::new(graph);
        state.seed(rng);

        while !state.is_feasible() {
            let Some(v) = state.select_rcl(alpha, rng) else {
                warn!("constructie zonder kandidaten gestopt; is de graaf samenhangend?");
                break;
            };
            state.label(v, None);
        }
        state.into_solution()
    }
}

/// Gesloten verzameling constructieve methoden, gekozen bij het configureren.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Constructive {
    Grasp(Grasp),
    /// Kiest elke stap uniform uit de kandidatenlijst.
    Random,
}

impl Constructive {
    pub fn construct<'g, R>(&self, graph: &'g Graph, rng: &mut R) -> Solution<'g>
    where
        R: Rng + ?Sized,
    {
        match self {
            Constructive::Grasp(grasp) => grasp.construct(graph, rng),
            Constructive::Random => random_construct(graph, rng),
        }
    }
}

fn random_construct<'g, R>(graph: &'g Graph, rng: &mut R) -> Solution<'g>
where
    R: Rng + ?Sized,
{
    let mut state = GreedyState::new(graph);
    state.seed(rng);
    while !state.is_feasible() {
        let Some(v) = state.select_uniform(rng) else {
            warn!("constructie zonder kandidaten gestopt; is de graaf samenhangend?");
            break;
        };
        state.label(v, None);
    }
    state.into_solution()
}
