//! Classic explicit Runge-Kutta 4 (RK4) update rule.

use crate::{
    Float,
    core::problem::Problem,
    error::Error,
    methods::StepMethod,
};

/// Classical four-stage Runge-Kutta method.
///
/// ```text
/// k1 = f(x, y)
/// k2 = f(x + h/2, y + h/2·k1)
/// k3 = f(x + h/2, y + h/2·k2)
/// k4 = f(x + h,   y + h·k3)
/// y_next = y + h/6·(k1 + 2k2 + 2k3 + k4)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl StepMethod for Rk4 {
    fn name(&self) -> &'static str {
        "Runge-Kutta"
    }

    fn order(&self) -> usize {
        4
    }

    fn stages(&self) -> usize {
        4
    }

    fn step<P>(&self, problem: &P, x: Float, y: Float, h: Float) -> Result<Float, Error>
    where
        P: Problem + ?Sized,
    {
        let k1 = problem.derivative(x, y)?;
        let k2 = problem.derivative(x + C2 * h, y + h * A21 * k1)?;
        let k3 = problem.derivative(x + C3 * h, y + h * A32 * k2)?;
        let k4 = problem.derivative(x + C4 * h, y + h * A43 * k3)?;

        Ok(y + h * (B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4))
    }
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
