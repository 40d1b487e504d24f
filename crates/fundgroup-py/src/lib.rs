//! PyO3 bindings for `fundgroup`.
//!
//! Notes
//! - Keep bindings thin: simplices cross the boundary as lists of vertex
//!   lists, presentations come back as `(generator names, relator strings)`.
//! - Builder errors map to `ValueError`.

use fundgroup::api::{abelian_invariants_from_simplices, presentation_from_simplices};
use fundgroup::Pi1Error;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn map_pi1_err(err: Pi1Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Presentation of the fundamental group as `(generators, relators)`.
#[pyfunction]
#[pyo3(signature = (simplices, base_point=None, simplify=true))]
fn fundamental_group(
    simplices: Vec<Vec<usize>>,
    base_point: Option<usize>,
    simplify: bool,
) -> PyResult<(Vec<String>, Vec<String>)> {
    let p = presentation_from_simplices(&simplices, base_point, simplify).map_err(map_pi1_err)?;
    Ok((p.generator_names().to_vec(), p.relator_strings()))
}

/// Abelianization as `(rank, torsion coefficients)`.
#[pyfunction]
#[pyo3(signature = (simplices, base_point=None))]
fn abelian_invariants(
    simplices: Vec<Vec<usize>>,
    base_point: Option<usize>,
) -> PyResult<(usize, Vec<u64>)> {
    let ab = abelian_invariants_from_simplices(&simplices, base_point).map_err(map_pi1_err)?;
    Ok((ab.rank, ab.torsion))
}

#[pymodule]
fn fundgroup_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fundamental_group, m)?)?;
    m.add_function(wrap_pyfunction!(abelian_invariants, m)?)?;
    Ok(())
}
