// src/lib.rs

// Publieke modules voor gebruik binnen de Rust-crate
pub mod articulation;
pub mod budget;
pub mod components;
pub mod construct;
pub mod error;
pub mod graph;
pub mod iterated;
pub mod local_search;
pub mod multistart;
pub mod params;
pub mod purge;
pub mod repair;
pub mod solution;

mod candidate;

#[cfg(feature = "python")]
mod python;

// Her-exporteer de belangrijkste types voor Rust-gebruikers
pub use articulation::{find_articulation_points, ArticulationPoints};
pub use budget::Budget;
pub use components::{connected_components, has_many_components};
pub use construct::{Constructive, Grasp};
pub use error::{Result, SolverError};
pub use graph::Graph;
pub use iterated::IteratedGreedy;
pub use local_search::{improve, improve_until_stable};
pub use multistart::{
    multi_start_constructive, multi_start_iterated_greedy, solve, solve_constructive, solve_runs, Outcome,
};
pub use params::Params;
pub use purge::{purge, purge_all};
pub use repair::Repairer;
pub use solution::Solution;
