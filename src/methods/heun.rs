//! Heun's method (improved Euler) update rule.

use crate::{
    Float,
    core::problem::Problem,
    error::Error,
    methods::StepMethod,
};

/// Second-order predictor-corrector method.
///
/// An Euler predictor ŷ = y + h·f(x, y) is corrected by averaging the
/// slopes at both ends of the step:
///
/// ```text
/// y_next = y + h/2·(f(x, y) + f(x + h, ŷ))
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heun;

impl StepMethod for Heun {
    fn name(&self) -> &'static str {
        "Improved Euler"
    }

    fn order(&self) -> usize {
        2
    }

    fn stages(&self) -> usize {
        2
    }

    fn step<P>(&self, problem: &P, x: Float, y: Float, h: Float) -> Result<Float, Error>
    where
        P: Problem + ?Sized,
    {
        let k1 = problem.derivative(x, y)?;
        let predictor = y + h * k1;
        let k2 = problem.derivative(x + h, predictor)?;

        Ok(y + 0.5 * h * (k1 + k2))
    }
}
