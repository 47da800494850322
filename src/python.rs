//! Python bindings for driving the error analysis from a plotting front end.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{
    Float,
    core::{config::ProblemConfig, problem::Problem},
    error::Error,
    methods::Method,
    problems::HomogeneousProblem,
    solve::{self, observed_orders},
};

fn to_py_err(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_method(method: &str) -> PyResult<Method> {
    method
        .parse::<Method>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// y' = y/x - x*exp(y/x) with exact solution y = -x*ln(x - c).
#[pyclass(name = "Problem", module = "ivp_analysis")]
struct PyProblem {
    inner: HomogeneousProblem,
}

#[pymethods]
impl PyProblem {
    #[new]
    #[pyo3(signature = (x0=1.0, y0=0.0, x_limit=8.0, n=4, n_start=1, n_end=5))]
    fn new(x0: Float, y0: Float, x_limit: Float, n: usize, n_start: usize, n_end: usize) -> PyResult<Self> {
        let config = ProblemConfig::new(x0, y0, x_limit, n, n_start, n_end).map_err(to_py_err)?;
        let inner = HomogeneousProblem::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Replace all parameters at once. Raises ValueError and keeps the
    /// previous parameters if the new ones are rejected.
    fn reconfigure(
        &mut self,
        x0: Float,
        y0: Float,
        x_limit: Float,
        n: usize,
        n_start: usize,
        n_end: usize,
    ) -> PyResult<()> {
        let config = ProblemConfig::new(x0, y0, x_limit, n, n_start, n_end).map_err(to_py_err)?;
        self.inner.reconfigure(config).map_err(to_py_err)
    }

    #[getter]
    fn x0(&self) -> Float {
        self.inner.config().x0()
    }

    #[getter]
    fn y0(&self) -> Float {
        self.inner.config().y0()
    }

    #[getter]
    fn x_limit(&self) -> Float {
        self.inner.config().x_limit()
    }

    #[getter]
    fn n(&self) -> usize {
        self.inner.config().n()
    }

    #[getter]
    fn h(&self) -> Float {
        self.inner.step_size()
    }

    #[getter]
    fn c(&self) -> Float {
        self.inner.constant()
    }

    fn derivative(&self, x: Float, y: Float) -> PyResult<Float> {
        self.inner.derivative(x, y).map_err(to_py_err)
    }

    fn exact(&self, x: Float) -> PyResult<Float> {
        self.inner.exact(x).map_err(to_py_err)
    }

    fn exact_sequence<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray1<Float>>> {
        let exact = self.inner.exact_sequence().map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, exact))
    }

    fn grid_for<'py>(&self, py: Python<'py>, step: Float) -> PyResult<Bound<'py, PyArray1<Float>>> {
        let nodes = self.inner.grid_for(step).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, nodes))
    }

    fn subdivision_range(&self) -> Vec<usize> {
        self.inner.subdivision_range()
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "<Problem: x0={}, y0={}, x_limit={}, n={}, sweep={}..={}>",
            config.x0(),
            config.y0(),
            config.x_limit(),
            config.n(),
            config.n_start(),
            config.n_end()
        )
    }
}

/// Trajectory of `method` ("euler", "heun" or "rk4") with spacing `step`.
#[pyfunction]
fn approximate<'py>(
    py: Python<'py>,
    problem: PyRef<'py, PyProblem>,
    method: &str,
    step: Float,
) -> PyResult<Bound<'py, PyArray1<Float>>> {
    let method = parse_method(method)?;
    let y = solve::approximate(&problem.inner, &method, step).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, y))
}

/// Local truncation error on the base grid.
#[pyfunction]
fn local_error<'py>(
    py: Python<'py>,
    problem: PyRef<'py, PyProblem>,
    method: &str,
) -> PyResult<Bound<'py, PyArray1<Float>>> {
    let method = parse_method(method)?;
    let errors = solve::local_error(&problem.inner, &method).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, errors))
}

/// Endpoint error for each subdivision count in n_start..=n_end.
#[pyfunction]
fn global_error<'py>(
    py: Python<'py>,
    problem: PyRef<'py, PyProblem>,
    method: &str,
) -> PyResult<Bound<'py, PyArray1<Float>>> {
    let method = parse_method(method)?;
    let errors = solve::global_error(&problem.inner, &method).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, errors))
}

/// Observed convergence order between consecutive sweep entries.
#[pyfunction]
#[pyo3(name = "observed_orders")]
fn observed_orders_py(counts: Vec<usize>, errors: Vec<Float>) -> Vec<Float> {
    observed_orders(&counts, &errors)
}

#[pymodule]
fn ivp_analysis(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyProblem>()?;
    m.add_function(wrap_pyfunction!(approximate, m)?)?;
    m.add_function(wrap_pyfunction!(local_error, m)?)?;
    m.add_function(wrap_pyfunction!(global_error, m)?)?;
    m.add_function(wrap_pyfunction!(observed_orders_py, m)?)?;

    let doc = "Fixed-step Euler, improved Euler and Runge-Kutta 4 integration of\n\
               y' = y/x - x*exp(y/x) with local and global error analysis.";
    m.setattr("__doc__", doc)?;

    Ok(())
}
