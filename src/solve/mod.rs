//! Trajectories, local/global errors and convergence analysis built on
//! top of a [`crate::StepMethod`].

pub mod convergence;
pub mod experiment;
pub mod integrator;
pub mod protocol;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use convergence::{mean_order, observed_orders};
pub use experiment::{Experiment, ExperimentConfig, ExperimentReport, MethodReport};
pub use integrator::Integrator;
pub use protocol::{approximate, convergence_study, endpoint_error, global_error, local_error};
