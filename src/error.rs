//! Errors for problem configuration and integration

use thiserror::Error;

use crate::Float;

/// Broad category of an [`Error`].
///
/// Configuration errors are raised when parameters are rejected and leave the
/// previous configuration in place. Domain errors are raised while evaluating
/// a problem and abort the computation that triggered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Domain,
}

/// Errors returned by problems, grids and step methods.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("x0 must be nonzero")]
    ZeroInitialAbscissa,
    #[error("interval span x_limit - x0 must exceed {min} (got {span})")]
    SpanTooShort { span: Float, min: Float },
    #[error("subdivision count {name} must be positive (got {value})")]
    NonPositiveSubdivisions { name: &'static str, value: usize },
    #[error("sweep range requires n_start < n_end (got {start}..{end})")]
    InvalidSweep { start: usize, end: usize },
    #[error("parameter {name} must be finite (got {value})")]
    NonFiniteParameter { name: &'static str, value: Float },
    #[error("unable to read config: {path}")]
    ConfigRead { path: String },
    #[error("unable to parse config: {msg}")]
    ConfigParse { msg: String },

    #[error("step size must be positive and finite (got {0})")]
    InvalidStepSize(Float),
    #[error("grid bounds must be finite (got start = {start}, stop = {stop})")]
    InvalidGridBounds { start: Float, stop: Float },
    #[error("singular point at x = {0}")]
    SingularPoint(Float),
    #[error("x = {x} is outside the domain of {what}")]
    OutOfDomain { x: Float, what: &'static str },
    #[error("non-finite state at x = {x}")]
    NonFiniteState { x: Float },
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ZeroInitialAbscissa
            | Error::SpanTooShort { .. }
            | Error::NonPositiveSubdivisions { .. }
            | Error::InvalidSweep { .. }
            | Error::NonFiniteParameter { .. }
            | Error::ConfigRead { .. }
            | Error::ConfigParse { .. } => ErrorKind::Configuration,
            Error::InvalidStepSize(_)
            | Error::InvalidGridBounds { .. }
            | Error::SingularPoint(_)
            | Error::OutOfDomain { .. }
            | Error::NonFiniteState { .. } => ErrorKind::Domain,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }
}
