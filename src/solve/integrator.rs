//! A step method bound to a problem.

use crate::{
    Float,
    core::problem::Problem,
    error::Error,
    methods::StepMethod,
};

use super::protocol;

/// A [`StepMethod`] bound to a borrowed [`Problem`].
///
/// Holds no results: every call recomputes from the problem's current
/// configuration.
///
/// ```rust
/// use ivp_analysis::prelude::*;
///
/// let problem = HomogeneousProblem::default();
/// let rk4 = Integrator::new(&problem, Method::Rk4);
///
/// let x = rk4.grid_for(0.5).unwrap();
/// let y = rk4.approximate(0.5).unwrap();
/// assert_eq!(x.len(), y.len());
/// assert_eq!(rk4.global_error().unwrap().len(), rk4.subdivision_range().len());
/// ```
pub struct Integrator<'a, M, P: ?Sized> {
    problem: &'a P,
    method: M,
}

impl<'a, M, P> Integrator<'a, M, P>
where
    M: StepMethod,
    P: Problem + ?Sized,
{
    pub fn new(problem: &'a P, method: M) -> Self {
        Self { problem, method }
    }

    pub fn problem(&self) -> &'a P {
        self.problem
    }

    pub fn method(&self) -> &M {
        &self.method
    }

    /// Trajectory on the grid with spacing `step`.
    pub fn approximate(&self, step: Float) -> Result<Vec<Float>, Error> {
        protocol::approximate(self.problem, &self.method, step)
    }

    /// Local truncation error on the base grid.
    pub fn local_error(&self) -> Result<Vec<Float>, Error> {
        protocol::local_error(self.problem, &self.method)
    }

    /// Endpoint error for each subdivision count in `n_start..=n_end`.
    pub fn global_error(&self) -> Result<Vec<Float>, Error> {
        protocol::global_error(self.problem, &self.method)
    }

    /// x-values matching [`Integrator::approximate`].
    pub fn grid_for(&self, step: Float) -> Result<Vec<Float>, Error> {
        self.problem.grid_for(step)
    }

    /// x-values matching [`Integrator::global_error`].
    pub fn subdivision_range(&self) -> Vec<usize> {
        self.problem.subdivision_range()
    }
}
