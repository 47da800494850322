//! Explicit (forward) Euler update rule.

use crate::{
    Float,
    core::problem::Problem,
    error::Error,
    methods::StepMethod,
};

/// First-order explicit Euler method, y_next = y + h·f(x, y).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl StepMethod for Euler {
    fn name(&self) -> &'static str {
        "Euler"
    }

    fn order(&self) -> usize {
        1
    }

    fn stages(&self) -> usize {
        1
    }

    fn step<P>(&self, problem: &P, x: Float, y: Float, h: Float) -> Result<Float, Error>
    where
        P: Problem + ?Sized,
    {
        Ok(y + h * problem.derivative(x, y)?)
    }
}
