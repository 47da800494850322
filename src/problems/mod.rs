//! Differential equations with closed-form solutions.

mod constant;
mod decay;
mod homogeneous;

pub use constant::ConstantProblem;
pub use decay::DecayProblem;
pub use homogeneous::HomogeneousProblem;
