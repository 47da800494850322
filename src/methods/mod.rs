//! Fixed-step one-step methods

mod euler;
mod heun;

pub mod rk;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Float, core::problem::Problem, error::Error};

pub use euler::Euler;
pub use heun::Heun;
pub use rk::Rk4;

/// A one-step method defined by its single-step update rule.
///
/// `step` advances y from `x` to `x + h`. Trajectories, local errors and
/// global errors are all derived from this one primitive by
/// [`crate::solve`], so implementors only describe the update itself.
pub trait StepMethod {
    /// Human readable name.
    fn name(&self) -> &'static str;

    /// Theoretical convergence order p, global error O(h^p).
    fn order(&self) -> usize;

    /// Derivative evaluations per step.
    fn stages(&self) -> usize;

    /// Advance `y` at `x` by one step of size `h`.
    fn step<P>(&self, problem: &P, x: Float, y: Float, h: Float) -> Result<Float, Error>
    where
        P: Problem + ?Sized;
}

/// Method selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Explicit Euler, order 1
    Euler,
    /// Heun / improved Euler, order 2
    #[serde(alias = "improved-euler")]
    Heun,
    /// Classic Runge-Kutta 4, order 4
    #[serde(alias = "runge-kutta")]
    Rk4,
}

impl Method {
    /// All methods, lowest order first.
    pub const ALL: [Method; 3] = [Method::Euler, Method::Heun, Method::Rk4];

    /// Short identifier accepted by [`FromStr`].
    pub fn key(&self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Heun => "heun",
            Method::Rk4 => "rk4",
        }
    }
}

impl StepMethod for Method {
    fn name(&self) -> &'static str {
        match self {
            Method::Euler => Euler.name(),
            Method::Heun => Heun.name(),
            Method::Rk4 => Rk4.name(),
        }
    }

    fn order(&self) -> usize {
        match self {
            Method::Euler => Euler.order(),
            Method::Heun => Heun.order(),
            Method::Rk4 => Rk4.order(),
        }
    }

    fn stages(&self) -> usize {
        match self {
            Method::Euler => Euler.stages(),
            Method::Heun => Heun.stages(),
            Method::Rk4 => Rk4.stages(),
        }
    }

    fn step<P>(&self, problem: &P, x: Float, y: Float, h: Float) -> Result<Float, Error>
    where
        P: Problem + ?Sized,
    {
        match self {
            Method::Euler => Euler.step(problem, x, y, h),
            Method::Heun => Heun.step(problem, x, y, h),
            Method::Rk4 => Rk4.step(problem, x, y, h),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a method name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown method '{0}' (expected euler, heun or rk4)")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "euler" | "explicit-euler" => Ok(Method::Euler),
            "heun" | "improved-euler" => Ok(Method::Heun),
            "rk4" | "runge-kutta" => Ok(Method::Rk4),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}
