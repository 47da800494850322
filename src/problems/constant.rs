//! y' = 0

use crate::{
    Float,
    core::{
        config::ProblemConfig,
        problem::{Problem, check_span},
    },
    error::Error,
};

/// Trivial problem y' = 0 whose solution is y(x) = y0 everywhere.
///
/// Every consistent one-step method reproduces it exactly, which makes it
/// a useful sanity check for the error protocol.
#[derive(Debug, Clone, Default)]
pub struct ConstantProblem {
    config: ProblemConfig,
}

impl ConstantProblem {
    pub fn new(config: ProblemConfig) -> Result<Self, Error> {
        let mut problem = Self::default();
        problem.reconfigure(config)?;
        Ok(problem)
    }
}

impl Problem for ConstantProblem {
    fn config(&self) -> &ProblemConfig {
        &self.config
    }

    fn reconfigure(&mut self, config: ProblemConfig) -> Result<(), Error> {
        check_span(self, &config)?;
        self.config = config;
        Ok(())
    }

    fn derivative(&self, _x: Float, _y: Float) -> Result<Float, Error> {
        Ok(0.0)
    }

    fn exact(&self, _x: Float) -> Result<Float, Error> {
        Ok(self.config.y0())
    }
}
