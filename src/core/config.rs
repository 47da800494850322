//! Interval and subdivision parameters of a problem

use std::ops::RangeInclusive;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{Float, error::Error};

/// Unvalidated problem parameters.
///
/// This is the form parameters arrive in, from a builder or a TOML table.
/// Call [`ProblemParams::validate`] to obtain a [`ProblemConfig`].
///
/// ```rust
/// use ivp_analysis::ProblemParams;
///
/// let config = ProblemParams::builder()
///     .x0(1.0)
///     .y0(2.0)
///     .x_limit(5.0)
///     .n(4)
///     .build()
///     .validate()
///     .unwrap();
/// assert_eq!(config.step_size(), 1.0);
/// ```
#[derive(Builder, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemParams {
    /// Abscissa of the initial condition. Must be nonzero.
    #[builder(default = 1.0)]
    pub x0: Float,
    /// Initial value y(x0).
    #[builder(default = 0.0)]
    pub y0: Float,
    /// Right end of the integration interval.
    #[builder(default = 8.0)]
    pub x_limit: Float,
    /// Base subdivision count, h = (x_limit - x0) / n.
    #[builder(default = 4)]
    pub n: usize,
    /// First subdivision count of the global error sweep.
    #[builder(default = 1)]
    pub n_start: usize,
    /// Last subdivision count of the global error sweep (inclusive).
    #[builder(default = 5)]
    pub n_end: usize,
}

impl Default for ProblemParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ProblemParams {
    /// Check the parameters and produce a [`ProblemConfig`].
    ///
    /// Problem specific limits, such as a minimum span, are checked by
    /// [`crate::Problem::reconfigure`].
    pub fn validate(self) -> Result<ProblemConfig, Error> {
        for (name, value) in [("x0", self.x0), ("y0", self.y0), ("x_limit", self.x_limit)] {
            if !value.is_finite() {
                return Err(Error::NonFiniteParameter { name, value });
            }
        }
        if self.x0 == 0.0 {
            return Err(Error::ZeroInitialAbscissa);
        }
        let span = self.x_limit - self.x0;
        if span <= 0.0 {
            return Err(Error::SpanTooShort { span, min: 0.0 });
        }
        for (name, value) in [("n", self.n), ("n_start", self.n_start)] {
            if value == 0 {
                return Err(Error::NonPositiveSubdivisions { name, value });
            }
        }
        if self.n_start >= self.n_end {
            return Err(Error::InvalidSweep {
                start: self.n_start,
                end: self.n_end,
            });
        }

        Ok(ProblemConfig {
            x0: self.x0,
            y0: self.y0,
            x_limit: self.x_limit,
            n: self.n,
            n_start: self.n_start,
            n_end: self.n_end,
        })
    }
}

/// Validated problem parameters.
///
/// Fields are only reachable through accessors so a `ProblemConfig` can
/// never hold a partially updated or invalid set of values. The base step
/// is always derived from `(x0, x_limit, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProblemParams", into = "ProblemParams")]
pub struct ProblemConfig {
    x0: Float,
    y0: Float,
    x_limit: Float,
    n: usize,
    n_start: usize,
    n_end: usize,
}

impl ProblemConfig {
    /// Validate a full set of parameters at once.
    pub fn new(
        x0: Float,
        y0: Float,
        x_limit: Float,
        n: usize,
        n_start: usize,
        n_end: usize,
    ) -> Result<Self, Error> {
        ProblemParams {
            x0,
            y0,
            x_limit,
            n,
            n_start,
            n_end,
        }
        .validate()
    }

    pub fn x0(&self) -> Float {
        self.x0
    }

    pub fn y0(&self) -> Float {
        self.y0
    }

    pub fn x_limit(&self) -> Float {
        self.x_limit
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn n_start(&self) -> usize {
        self.n_start
    }

    pub fn n_end(&self) -> usize {
        self.n_end
    }

    /// Length of the integration interval, `x_limit - x0`.
    pub fn span(&self) -> Float {
        self.x_limit - self.x0
    }

    /// Base step size h = (x_limit - x0) / n.
    pub fn step_size(&self) -> Float {
        self.span() / self.n as Float
    }

    /// Step size for `k` subdivisions of the interval.
    pub fn step_for(&self, k: usize) -> Float {
        self.span() / k as Float
    }

    /// Subdivision counts swept by the global error, `n_start..=n_end`.
    pub fn subdivisions(&self) -> RangeInclusive<usize> {
        self.n_start..=self.n_end
    }

    pub fn params(&self) -> ProblemParams {
        ProblemParams::from(*self)
    }
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            x0: 1.0,
            y0: 0.0,
            x_limit: 8.0,
            n: 4,
            n_start: 1,
            n_end: 5,
        }
    }
}

impl TryFrom<ProblemParams> for ProblemConfig {
    type Error = Error;

    fn try_from(params: ProblemParams) -> Result<Self, Self::Error> {
        params.validate()
    }
}

impl From<ProblemConfig> for ProblemParams {
    fn from(config: ProblemConfig) -> Self {
        Self {
            x0: config.x0,
            y0: config.y0,
            x_limit: config.x_limit,
            n: config.n,
            n_start: config.n_start,
            n_end: config.n_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ProblemParams::default().validate().unwrap();
        assert_eq!(config, ProblemConfig::default());
        assert_eq!(config.step_size(), 1.75);
        assert_eq!(config.subdivisions().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rejects_zero_x0() {
        let err = ProblemConfig::new(0.0, 1.0, 5.0, 4, 1, 5).unwrap_err();
        assert_eq!(err, Error::ZeroInitialAbscissa);
        assert!(err.is_configuration());
    }

    #[test]
    fn test_rejects_reversed_interval() {
        assert!(matches!(
            ProblemConfig::new(5.0, 1.0, 1.0, 4, 1, 5),
            Err(Error::SpanTooShort { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_subdivisions() {
        assert_eq!(
            ProblemConfig::new(1.0, 0.0, 8.0, 0, 1, 5),
            Err(Error::NonPositiveSubdivisions { name: "n", value: 0 })
        );
        assert_eq!(
            ProblemConfig::new(1.0, 0.0, 8.0, 4, 5, 5),
            Err(Error::InvalidSweep { start: 5, end: 5 })
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            ProblemConfig::new(1.0, Float::NAN, 8.0, 4, 1, 5),
            Err(Error::NonFiniteParameter { name: "y0", .. })
        ));
    }
}
