//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use ivp_analysis::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `Problem`, `ProblemConfig`, `ProblemParams`, `StepMethod`, `Error`.
//! - Concrete problems and methods: `HomogeneousProblem`, `ConstantProblem`, `DecayProblem`,
//!   `Method`, `Euler`, `Heun`, `Rk4`.
//! - Error analysis: `Integrator`, `Experiment`, `ExperimentConfig`, `grid`.

pub use crate::{
    Float,
    core::{
        config::{ProblemConfig, ProblemParams},
        grid::grid,
        problem::Problem,
    },
    error::{Error, ErrorKind},
    methods::{Euler, Heun, Method, Rk4, StepMethod},
    problems::{ConstantProblem, DecayProblem, HomogeneousProblem},
    solve::{Experiment, ExperimentConfig, ExperimentReport, Integrator, MethodReport},
};
