//! src/error.rs
//!
//! Foutentypes voor parametervalidatie en het opbouwen van een instantie.
//! Consistentiefouten in de zoeklogica (dubbel labelen, enz.) zijn geen
//! `SolverError` maar een `assert!`-panic: die wijzen op een bug.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("ongeldige alpha voor GRASP: {0} (verwacht [0, 1] of willekeurig)")]
    InvalidAlpha(f64),
    #[error("ongeldige beta voor de destructiefase: {0} (verwacht [0, 1])")]
    InvalidBeta(f64),
    #[error("ongeldige deterioratiefactor: {0} (verwacht eindig en >= 0)")]
    InvalidDeterioration(f64),
    #[error("de graaf heeft geen knopen")]
    EmptyGraph,
    #[error("knoop {vertex} valt buiten het bereik van een graaf met {n} knopen")]
    VertexOutOfRange { vertex: usize, n: usize },
    #[error("de graaf is niet samenhangend; er bestaat geen connected dominating set")]
    DisconnectedGraph,
}

pub type Result<T> = std::result::Result<T, SolverError>;
