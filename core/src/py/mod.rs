use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::dispatch::read_package;
use crate::error::WorkoutError;
use crate::session::{render, OutputFormat};

fn to_py_err(e: WorkoutError) -> PyErr {
    PyValueError::new_err(format!("{}: {}", e.kind(), e))
}

fn summarize_as(workout_type: &str, readings: &[f64], format: OutputFormat) -> PyResult<String> {
    let record = read_package(workout_type, readings).map_err(to_py_err)?.summary();
    render(&record, format).map_err(to_py_err)
}

/// summarize("RUN", [15000, 1, 75]) -> tekstlinje
#[pyfunction]
fn summarize(workout_type: &str, readings: Vec<f64>) -> PyResult<String> {
    summarize_as(workout_type, &readings, OutputFormat::Text)
}

/// Som `summarize`, men JSON med tall avrundet til 3 desimaler.
#[pyfunction]
fn summarize_json(workout_type: &str, readings: Vec<f64>) -> PyResult<String> {
    summarize_as(workout_type, &readings, OutputFormat::Json)
}

#[pymodule]
fn workout_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(summarize, m)?)?;
    m.add_function(wrap_pyfunction!(summarize_json, m)?)?;
    Ok(())
}
