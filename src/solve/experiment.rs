//! Recompute every sequence a presentation layer needs for a set of methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Float,
    core::{config::ProblemConfig, problem::Problem},
    error::Error,
    methods::{Method, StepMethod},
    problems::HomogeneousProblem,
};

use super::{convergence::observed_orders, integrator::Integrator};

/// Experiment description, usually read from TOML.
///
/// ```toml
/// methods = ["euler", "heun", "rk4"]
///
/// [problem]
/// x0 = 1.0
/// y0 = 0.0
/// x_limit = 8.0
/// n = 4
/// n_start = 1
/// n_end = 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default)]
    pub problem: ProblemConfig,
    #[serde(default = "all_methods")]
    pub methods: Vec<Method>,
}

fn all_methods() -> Vec<Method> {
    Method::ALL.to_vec()
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            problem: ProblemConfig::default(),
            methods: all_methods(),
        }
    }
}

impl ExperimentConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, Error> {
        toml::from_str(contents).map_err(|e| Error::ConfigParse { msg: e.to_string() })
    }

    /// Read and validate an experiment TOML file.
    pub fn read_toml(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|_| Error::ConfigRead {
            path: path.display().to_string(),
        })?;
        Self::from_toml_str(&contents)
    }
}

/// Sequences computed for one method.
#[derive(Debug, Clone, Serialize)]
pub struct MethodReport {
    pub method: Method,
    pub name: &'static str,
    pub order: usize,
    /// Trajectory on the base grid.
    pub approximation: Vec<Float>,
    /// Local truncation error on the base grid.
    pub local_error: Vec<Float>,
    /// Subdivision counts of the global error sweep.
    pub subdivisions: Vec<usize>,
    /// Endpoint error per subdivision count.
    pub global_error: Vec<Float>,
    /// Observed order between consecutive sweep entries.
    pub observed_orders: Vec<Float>,
}

/// Everything recomputed by one [`Experiment::run`].
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub config: ProblemConfig,
    /// Base step size h.
    pub step: Float,
    /// Base grid, shared by the exact solution and every trajectory.
    pub grid: Vec<Float>,
    pub exact: Vec<Float>,
    pub methods: Vec<MethodReport>,
}

impl ExperimentReport {
    pub fn method(&self, method: Method) -> Option<&MethodReport> {
        self.methods.iter().find(|r| r.method == method)
    }
}

/// A problem together with the methods selected for comparison.
///
/// Configuration changes and runs are expected to be serialised by the
/// caller; nothing is cached between runs.
#[derive(Debug, Clone)]
pub struct Experiment<P = HomogeneousProblem> {
    problem: P,
    methods: Vec<Method>,
}

impl Experiment<HomogeneousProblem> {
    /// Experiment on the homogeneous reference equation.
    pub fn from_config(config: ExperimentConfig) -> Result<Self, Error> {
        let problem = HomogeneousProblem::new(config.problem)?;
        Ok(Self::new(problem, config.methods))
    }
}

impl<P: Problem> Experiment<P> {
    pub fn new(problem: P, methods: Vec<Method>) -> Self {
        Self { problem, methods }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn set_methods(&mut self, methods: Vec<Method>) {
        self.methods = methods;
    }

    /// Forward a new configuration to the problem.
    /// On error the previous configuration stays in effect.
    pub fn reconfigure(&mut self, config: ProblemConfig) -> Result<(), Error> {
        self.problem.reconfigure(config)
    }

    /// Recompute all sequences for every selected method.
    pub fn run(&self) -> Result<ExperimentReport, Error> {
        let config = *self.problem.config();
        let step = self.problem.step_size();
        let grid = self.problem.grid_for(step)?;
        let exact = self.problem.exact_sequence()?;

        let methods = self
            .methods
            .iter()
            .map(|&method| self.report(method, step))
            .collect::<Result<Vec<_>, Error>>()?;

        log::debug!(
            "experiment run: {} nodes, h = {step}, methods = {:?}",
            grid.len(),
            self.methods
        );

        Ok(ExperimentReport {
            config,
            step,
            grid,
            exact,
            methods,
        })
    }

    fn report(&self, method: Method, step: Float) -> Result<MethodReport, Error> {
        let integrator = Integrator::new(&self.problem, method);
        let subdivisions = integrator.subdivision_range();
        let global_error = integrator.global_error()?;
        let observed_orders = observed_orders(&subdivisions, &global_error);

        Ok(MethodReport {
            method,
            name: method.name(),
            order: method.order(),
            approximation: integrator.approximate(step)?,
            local_error: integrator.local_error()?,
            subdivisions,
            global_error,
            observed_orders,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let config = ExperimentConfig::from_toml_str(
            r#"
            methods = ["euler", "improved-euler"]

            [problem]
            x0 = 1.0
            y0 = 2.0
            x_limit = 5.0
            "#,
        )
        .unwrap();
        assert_eq!(config.methods, vec![Method::Euler, Method::Heun]);
        assert_eq!(config.problem.y0(), 2.0);
        assert_eq!(config.problem.n(), 4);
    }

    #[test]
    fn test_defaults_when_empty() {
        assert_eq!(ExperimentConfig::from_toml_str("").unwrap(), ExperimentConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let err = ExperimentConfig::from_toml_str("[problem]\nx0 = 0.0\n").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("x0 must be nonzero"));
    }

    #[test]
    fn test_missing_file() {
        let err = ExperimentConfig::read_toml("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
