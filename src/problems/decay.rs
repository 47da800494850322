//! y' = -λ·y

use crate::{
    Float,
    core::{
        config::ProblemConfig,
        problem::{Problem, check_span},
    },
    error::Error,
};

/// Exponential decay y' = -rate·y with y(x) = y0·e^(-rate·(x - x0)).
#[derive(Debug, Clone)]
pub struct DecayProblem {
    config: ProblemConfig,
    rate: Float,
}

impl DecayProblem {
    pub fn new(config: ProblemConfig, rate: Float) -> Result<Self, Error> {
        if !rate.is_finite() {
            return Err(Error::NonFiniteParameter { name: "rate", value: rate });
        }
        let mut problem = Self {
            config: ProblemConfig::default(),
            rate,
        };
        problem.reconfigure(config)?;
        Ok(problem)
    }

    pub fn rate(&self) -> Float {
        self.rate
    }
}

impl Problem for DecayProblem {
    fn config(&self) -> &ProblemConfig {
        &self.config
    }

    fn reconfigure(&mut self, config: ProblemConfig) -> Result<(), Error> {
        check_span(self, &config)?;
        self.config = config;
        Ok(())
    }

    fn derivative(&self, _x: Float, y: Float) -> Result<Float, Error> {
        Ok(-self.rate * y)
    }

    fn exact(&self, x: Float) -> Result<Float, Error> {
        let y = self.config.y0() * (-self.rate * (x - self.config.x0())).exp();
        if !y.is_finite() {
            return Err(Error::OutOfDomain { x, what: "exact solution" });
        }
        Ok(y)
    }
}
