//! y' = y/x - x·e^(y/x)
//!
//! Substituting u = y/x turns this into the separable equation
//! x·u' = -x·e^u, whose solution gives
//!
//! ```text
//! y(x) = -x·ln(x - c),   c = x0 - e^(-y0/x0)
//! ```

use crate::{
    Float,
    core::{
        config::ProblemConfig,
        problem::{Problem, check_span},
    },
    error::Error,
};

/// Homogeneous equation y' = y/x - x·e^(y/x) with exact solution
/// y = -x·ln(x - c).
///
/// Both the derivative and the solution are singular at x = 0, and the
/// solution is only defined for x > c. The interval must span more than
/// two units.
#[derive(Debug, Clone)]
pub struct HomogeneousProblem {
    config: ProblemConfig,
    c: Float,
}

impl HomogeneousProblem {
    pub const MIN_SPAN: Float = 2.0;

    pub fn new(config: ProblemConfig) -> Result<Self, Error> {
        let mut problem = Self::default();
        problem.reconfigure(config)?;
        Ok(problem)
    }

    /// Integration constant c of the exact solution.
    pub fn constant(&self) -> Float {
        self.c
    }

    fn integration_constant(config: &ProblemConfig) -> Result<Float, Error> {
        let c = config.x0() - (-config.y0() / config.x0()).exp();
        if !c.is_finite() {
            return Err(Error::NonFiniteParameter { name: "c", value: c });
        }
        Ok(c)
    }
}

impl Default for HomogeneousProblem {
    fn default() -> Self {
        // x0 = 1, y0 = 0 gives c = 1 - e^0 = 0
        Self {
            config: ProblemConfig::default(),
            c: 0.0,
        }
    }
}

impl Problem for HomogeneousProblem {
    fn config(&self) -> &ProblemConfig {
        &self.config
    }

    fn reconfigure(&mut self, config: ProblemConfig) -> Result<(), Error> {
        check_span(self, &config)?;
        let c = Self::integration_constant(&config)?;

        self.config = config;
        self.c = c;
        log::debug!(
            "homogeneous problem reconfigured: {:?}, c = {}, h = {}",
            self.config,
            self.c,
            self.config.step_size()
        );
        Ok(())
    }

    fn derivative(&self, x: Float, y: Float) -> Result<Float, Error> {
        if x == 0.0 {
            return Err(Error::SingularPoint(x));
        }
        let u = y / x;
        let dydx = u - x * u.exp();
        if !dydx.is_finite() {
            return Err(Error::OutOfDomain { x, what: "derivative" });
        }
        Ok(dydx)
    }

    fn exact(&self, x: Float) -> Result<Float, Error> {
        if x == 0.0 {
            return Err(Error::SingularPoint(x));
        }
        let arg = x - self.c;
        if arg <= 0.0 {
            return Err(Error::OutOfDomain { x, what: "exact solution" });
        }
        let y = -x * arg.ln();
        if !y.is_finite() {
            return Err(Error::OutOfDomain { x, what: "exact solution" });
        }
        Ok(y)
    }

    fn min_span(&self) -> Float {
        Self::MIN_SPAN
    }
}
