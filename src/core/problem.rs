//! Problems with a known closed-form solution.

use crate::{
    Float,
    core::{config::ProblemConfig, grid::grid},
    error::Error,
};

/// A scalar initial value problem y' = f(x, y), y(x0) = y0, together with
/// its exact solution and interval configuration.
///
/// Implement this trait for each differential equation. Step methods only
/// ever read a problem; the configuration changes solely through
/// [`Problem::reconfigure`], which must either apply every parameter or
/// none of them.
///
/// # Example
///
/// ```rust
/// use ivp_analysis::prelude::*;
///
/// struct Linear { config: ProblemConfig }
///
/// impl Problem for Linear {
///     fn config(&self) -> &ProblemConfig { &self.config }
///
///     fn reconfigure(&mut self, config: ProblemConfig) -> Result<(), Error> {
///         self.config = config;
///         Ok(())
///     }
///
///     // y' = 1, y = y0 + (x - x0)
///     fn derivative(&self, _x: f64, _y: f64) -> Result<f64, Error> { Ok(1.0) }
///
///     fn exact(&self, x: f64) -> Result<f64, Error> {
///         Ok(self.config.y0() + (x - self.config.x0()))
///     }
/// }
///
/// let problem = Linear { config: ProblemConfig::default() };
/// assert_eq!(problem.exact_sequence().unwrap().len(), 5);
/// ```
pub trait Problem {
    /// Current configuration.
    fn config(&self) -> &ProblemConfig;

    /// Replace the configuration and any constants derived from it.
    ///
    /// On error the previous configuration must remain in effect.
    fn reconfigure(&mut self, config: ProblemConfig) -> Result<(), Error>;

    /// Right-hand side f(x, y).
    fn derivative(&self, x: Float, y: Float) -> Result<Float, Error>;

    /// Closed-form solution y(x).
    fn exact(&self, x: Float) -> Result<Float, Error>;

    /// Smallest interval span `x_limit - x0` this problem accepts.
    /// The span must strictly exceed this value.
    fn min_span(&self) -> Float {
        0.0
    }

    /// Base step size derived from the configuration.
    fn step_size(&self) -> Float {
        self.config().step_size()
    }

    /// Nodes `x0, x0 + step, ...` up to `x_limit`.
    fn grid_for(&self, step: Float) -> Result<Vec<Float>, Error> {
        let config = self.config();
        grid(config.x0(), config.x_limit() + step, step, config.x_limit())
    }

    /// Subdivision counts `n_start..=n_end` of the global error sweep.
    fn subdivision_range(&self) -> Vec<usize> {
        self.config().subdivisions().collect()
    }

    /// Exact solution over the grid built with the base step.
    fn exact_sequence(&self) -> Result<Vec<Float>, Error> {
        self.grid_for(self.step_size())?
            .into_iter()
            .map(|x| self.exact(x))
            .collect()
    }
}

/// Check the span of `config` against `problem.min_span()`.
///
/// Helper for [`Problem::reconfigure`] implementations.
pub fn check_span<P: Problem + ?Sized>(problem: &P, config: &ProblemConfig) -> Result<(), Error> {
    let min = problem.min_span();
    let span = config.span();
    if span <= min {
        return Err(Error::SpanTooShort { span, min });
    }
    Ok(())
}
