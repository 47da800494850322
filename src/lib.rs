//! Fixed-step one-step methods for scalar initial value problems
//! y' = f(x, y), y(x0) = y0, and the error analysis used to compare them
//! against a known closed-form solution.
//!
//! - [`Problem`]: a differential equation with its exact solution and
//!   interval configuration.
//! - [`StepMethod`]: a single-step update rule ([`Euler`], [`Heun`], [`Rk4`]).
//! - [`solve`]: trajectories, local truncation error, global endpoint error
//!   and observed convergence order, shared by every method.
//!
//! ```rust
//! use ivp_analysis::prelude::*;
//!
//! let problem = HomogeneousProblem::default();
//! let euler = Integrator::new(&problem, Method::Euler);
//!
//! let y = euler.approximate(problem.step_size()).unwrap();
//! let exact = problem.exact_sequence().unwrap();
//! assert_eq!(y.len(), exact.len());
//! ```

pub mod core;
pub mod error;
pub mod methods;
pub mod prelude;
pub mod problems;
pub mod solve;

#[cfg(feature = "python")]
mod python;

pub use crate::core::{
    config::{ProblemConfig, ProblemParams},
    grid::{GRID_DECIMALS, GRID_TOLERANCE, grid},
    problem::Problem,
};
pub use error::{Error, ErrorKind};
pub use methods::{Euler, Heun, Method, Rk4, StepMethod};

/// Floating point type used throughout the crate.
pub type Float = f64;
