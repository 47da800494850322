//! Empirical convergence order from endpoint errors.

use crate::Float;

/// Observed order between consecutive entries of a convergence sweep.
///
/// For counts k_i < k_j with errors e_i, e_j the order is
/// `ln(e_i / e_j) / ln(k_j / k_i)`. Pairs where either error is zero or
/// non-finite, or the counts do not increase, are skipped.
pub fn observed_orders(counts: &[usize], errors: &[Float]) -> Vec<Float> {
    counts
        .windows(2)
        .zip(errors.windows(2))
        .filter_map(|(k, e)| {
            let (k0, k1) = (k[0] as Float, k[1] as Float);
            let (e0, e1) = (e[0], e[1]);
            if k1 <= k0 || !(e0 > 0.0 && e1 > 0.0) || !e0.is_finite() || !e1.is_finite() {
                return None;
            }
            Some((e0 / e1).ln() / (k1 / k0).ln())
        })
        .collect()
}

/// Mean of the observed orders, `None` if no pair qualifies.
pub fn mean_order(counts: &[usize], errors: &[Float]) -> Option<Float> {
    let orders = observed_orders(counts, errors);
    if orders.is_empty() {
        return None;
    }
    Some(orders.iter().sum::<Float>() / orders.len() as Float)
}
