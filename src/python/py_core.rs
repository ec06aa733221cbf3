//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{ConfigError, MatchError, SnapshotError};
use crate::games::bluff_number::Standing;

/// Raise a rejected command as `ValueError`.
pub(crate) fn match_err(err: MatchError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn config_err(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn snapshot_err(err: SnapshotError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a ranked roster entry.
#[pyclass(name = "Standing")]
#[derive(Clone, Debug)]
pub struct PyStanding(pub Standing);

#[pymethods]
impl PyStanding {
    #[getter]
    fn rank(&self) -> usize {
        self.0.rank
    }

    #[getter]
    fn player_id(&self) -> u64 {
        self.0.player.raw()
    }

    #[getter]
    fn label(&self) -> String {
        self.0.label.clone()
    }

    #[getter]
    fn score(&self) -> i32 {
        self.0.score
    }

    fn __repr__(&self) -> String {
        format!(
            "Standing(rank={}, label={:?}, score={})",
            self.0.rank, self.0.label, self.0.score
        )
    }
}
