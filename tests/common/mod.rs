#![allow(dead_code)]

use ivp_analysis::prelude::*;

/// y' = 0 on [1, 5] with y0 = 2 and h = 1.
pub fn constant_problem() -> ConstantProblem {
    let config = ProblemConfig::new(1.0, 2.0, 5.0, 4, 1, 5).unwrap();
    ConstantProblem::new(config).unwrap()
}

/// Reference equation on [1, 8] with y0 = 0, so y = -x·ln(x).
pub fn reference_problem() -> HomogeneousProblem {
    HomogeneousProblem::default()
}

/// Reference equation with a nonzero integration constant.
pub fn shifted_problem() -> HomogeneousProblem {
    let config = ProblemConfig::new(1.0, 1.0, 4.0, 6, 2, 12).unwrap();
    HomogeneousProblem::new(config).unwrap()
}

/// Ratios e_i / e_{i+1} of successive entries.
pub fn ratios(errors: &[f64]) -> Vec<f64> {
    errors.windows(2).map(|w| w[0] / w[1]).collect()
}
