//! Trajectory and error computations shared by every step method.
//!
//! All three functions are pure: they build their grids on demand from the
//! problem's current configuration and allocate fresh result vectors, so
//! repeated calls with unchanged inputs return identical sequences.

use crate::{
    Float,
    core::problem::Problem,
    error::Error,
    methods::StepMethod,
};

/// Approximate the solution on `problem.grid_for(step)`.
///
/// The trajectory starts at y0 and applies one update per subsequent node,
/// stepping from `x - step`. The result has the same length as the grid.
pub fn approximate<P, M>(problem: &P, method: &M, step: Float) -> Result<Vec<Float>, Error>
where
    P: Problem + ?Sized,
    M: StepMethod,
{
    let nodes = problem.grid_for(step)?;
    let Some((_, rest)) = nodes.split_first() else {
        return Ok(Vec::new());
    };

    let mut trajectory = Vec::with_capacity(nodes.len());
    let mut y = problem.config().y0();
    trajectory.push(y);
    for &x in rest {
        y = advance(problem, method, x - step, y, step)?;
        trajectory.push(y);
    }

    Ok(trajectory)
}

/// Local truncation error on the base grid.
///
/// Each entry seeds a single step from the exact solution at the previous
/// node and compares it with the exact solution at the current node, so
/// errors from earlier steps do not accumulate. The first entry is zero.
pub fn local_error<P, M>(problem: &P, method: &M) -> Result<Vec<Float>, Error>
where
    P: Problem + ?Sized,
    M: StepMethod,
{
    let h = problem.step_size();
    let nodes = problem.grid_for(h)?;
    let Some((_, rest)) = nodes.split_first() else {
        return Ok(Vec::new());
    };

    let mut errors = Vec::with_capacity(nodes.len());
    errors.push(0.0);
    for &x in rest {
        let xold = x - h;
        let y = advance(problem, method, xold, problem.exact(xold)?, h)?;
        errors.push((problem.exact(x)? - y).abs());
    }

    Ok(errors)
}

/// Endpoint error `|y(x_limit) - y_k|` with the interval split into `k` steps.
pub fn endpoint_error<P, M>(problem: &P, method: &M, k: usize) -> Result<Float, Error>
where
    P: Problem + ?Sized,
    M: StepMethod,
{
    let config = problem.config();
    let step = config.step_for(k);
    let trajectory = approximate(problem, method, step)?;
    let last = trajectory.last().copied().ok_or(Error::InvalidStepSize(step))?;
    let error = (problem.exact(config.x_limit())? - last).abs();

    log::trace!("{}: k = {k}, h = {step}, endpoint error = {error:e}", method.name());
    Ok(error)
}

/// Endpoint error for every subdivision count in `n_start..=n_end`.
pub fn global_error<P, M>(problem: &P, method: &M) -> Result<Vec<Float>, Error>
where
    P: Problem + ?Sized,
    M: StepMethod,
{
    problem
        .config()
        .subdivisions()
        .map(|k| endpoint_error(problem, method, k))
        .collect()
}

/// Endpoint errors for arbitrary subdivision counts, e.g. successive doublings.
pub fn convergence_study<P, M>(problem: &P, method: &M, counts: &[usize]) -> Result<Vec<Float>, Error>
where
    P: Problem + ?Sized,
    M: StepMethod,
{
    counts
        .iter()
        .map(|&k| {
            if k == 0 {
                return Err(Error::NonPositiveSubdivisions { name: "k", value: k });
            }
            endpoint_error(problem, method, k)
        })
        .collect()
}

fn advance<P, M>(problem: &P, method: &M, x: Float, y: Float, h: Float) -> Result<Float, Error>
where
    P: Problem + ?Sized,
    M: StepMethod,
{
    let ynew = method.step(problem, x, y, h)?;
    if !ynew.is_finite() {
        return Err(Error::NonFiniteState { x: x + h });
    }
    Ok(ynew)
}
