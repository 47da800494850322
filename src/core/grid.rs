//! Evaluation nodes shared by every step method and the exact solution.

use crate::{Float, error::Error};

/// Decimal places used when comparing a node against the bound.
pub const GRID_DECIMALS: i32 = 4;

/// Slack added to the bound so a node that lands a few ulps past the
/// right endpoint is still included.
pub const GRID_TOLERANCE: Float = 1e-5;

/// Round `value` to `decimals` decimal places.
pub fn round_to(value: Float, decimals: i32) -> Float {
    let scale = (10.0 as Float).powi(decimals);
    (value * scale).round() / scale
}

/// Build the nodes `start, start + step, start + 2*step, ...`.
///
/// A node is kept while it is below `stop` and its value rounded to
/// [`GRID_DECIMALS`] places does not exceed the bound, also rounded, plus
/// [`GRID_TOLERANCE`]. Nodes are computed as `start + k * step` rather than
/// by repeated addition, so they do not pick up accumulated drift.
///
/// # Errors
/// [`Error::InvalidStepSize`] if `step` is not positive and finite, or is
/// too small to separate two nodes at the magnitude of `start`.
/// [`Error::InvalidGridBounds`] if `start` or `stop` is not finite.
pub fn grid(start: Float, stop: Float, step: Float, bound: Float) -> Result<Vec<Float>, Error> {
    if !(step > 0.0 && step.is_finite()) {
        return Err(Error::InvalidStepSize(step));
    }
    if !start.is_finite() || !stop.is_finite() {
        return Err(Error::InvalidGridBounds { start, stop });
    }

    let limit = round_to(bound, GRID_DECIMALS) + GRID_TOLERANCE;
    let mut nodes: Vec<Float> = Vec::new();
    let mut k: usize = 0;
    loop {
        let x = start + (k as Float) * step;
        if x >= stop || round_to(x, GRID_DECIMALS) > limit {
            break;
        }
        // step below the float spacing at x
        if nodes.last().is_some_and(|&prev| x <= prev) {
            return Err(Error::InvalidStepSize(step));
        }
        nodes.push(x);
        k += 1;
    }

    Ok(nodes)
}
