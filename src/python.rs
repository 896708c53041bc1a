//! src/python.rs
//!
//! Python-binding (feature `python`), module `_native`.

use crate::error::SolverError;
use crate::graph::Graph;
use crate::multistart::solve_runs;
use crate::params::Params;
use crate::solution::Solution;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<SolverError> for PyErr {
    fn from(e: SolverError) -> Self {
        PyValueError::new_err(e.to_string())
    }
}

#[pymethods]
impl Params {
    /// Start vanuit `Params::default()`; velden zijn daarna via properties aan te passen.
    #[new]
    fn py_new() -> Self {
        Self::default()
    }

    /// Kopie voor gebruik in Python.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        format!("{self:?}")
    }
}

/// Lost de RLP-instantie op; geeft (kost, regeneratoren, herstarts, timed_out).
#[pyfunction]
#[pyo3(signature = (n, edges, py_params))]
fn solve_py(
    n: usize,
    edges: Vec<(usize, usize)>,
    py_params: Py<Params>,
) -> PyResult<(usize, Vec<usize>, usize, bool)> {
    let graph = Graph::from_edge_list(n, &edges)?;
    let p = Python::with_gil(|py| py_params.borrow(py).clone());

    let outcome = solve_runs(&graph, &p)?;
    Ok((
        outcome.cost(),
        outcome.solution.labeled_vertices(),
        outcome.iterations,
        outcome.timed_out,
    ))
}

/// Controleert of `labeled` een haalbare oplossing is.
#[pyfunction]
fn validate_py(n: usize, edges: Vec<(usize, usize)>, labeled: Vec<usize>) -> PyResult<bool> {
    let graph = Graph::from_edge_list(n, &edges)?;
    if let Some(&v) = labeled.iter().find(|&&v| v >= n) {
        return Err(SolverError::VertexOutOfRange { vertex: v, n }.into());
    }
    let mut sol = Solution::new(&graph);
    for v in labeled {
        if !sol.is_labeled(v) {
            sol.label(v);
        }
    }
    Ok(sol.validate())
}

/// Definieert de Python-module `_native`.
#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Params>()?;
    m.add_function(wrap_pyfunction!(solve_py, m)?)?;
    m.add_function(wrap_pyfunction!(validate_py, m)?)?;
    Ok(())
}
