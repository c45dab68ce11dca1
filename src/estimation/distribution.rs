//! Probability curves of a query's label built from [`IntervalProbability`] estimates.

use ndarray::ArrayView1;

use super::IntervalProbability;
use crate::{
    Dataset, KnnErr, Result,
    weighting::{Gaussian, Weighting},
};

/// Most points a single curve may have.
pub const MAX_BUCKETS: usize = 100_000;

fn buckets(high: f32, step: f32) -> Result<Vec<f32>> {
    if !step.is_finite() || step <= 0. {
        return Err(KnnErr::invalid("step", format!("expected a positive step, got {step}")));
    }
    if !high.is_finite() || high < 0. {
        return Err(KnnErr::invalid("high", format!("expected a non-negative bound, got {high}")));
    }

    let n = (high / step).ceil();
    if n > MAX_BUCKETS as f32 {
        return Err(KnnErr::invalid(
            "step",
            format!("{high} / {step} exceeds the limit of {MAX_BUCKETS} buckets"),
        ));
    }

    let n = n as usize;
    Ok((0..n).map(|i| i as f32 * step).filter(|&v| v < high).collect())
}

/// Returns `(v, P(0 <= label <= v))` for `v` in `0, step, 2·step, …` below `high`.
///
/// # Arguments
/// * `dataset` - The samples to estimate from.
/// * `query` - The feature vector of interest.
/// * `high` - The exclusive end of the curve.
/// * `step` - The distance between consecutive points of the curve.
/// * `k` - The amount of neighbors to consider.
/// * `weight_fn` - Maps each neighbor's distance to its weight.
pub fn cumulative_probability<W>(
    dataset: &Dataset,
    query: ArrayView1<f32>,
    high: f32,
    step: f32,
    k: usize,
    weight_fn: W,
) -> Result<Vec<(f32, f32)>>
where
    W: Weighting + Copy,
{
    buckets(high, step)?
        .into_iter()
        .map(|v| {
            let p = IntervalProbability::new(0., v, k, weight_fn)?.probability(dataset, query)?;
            Ok((v, p))
        })
        .collect()
}

/// Returns a smoothed probability density of the label of `query`.
///
/// Each bucket `[v, v + step]` gets its interval probability, then every bucket is replaced by
/// the sum of all buckets weighted by a gaussian (with `sigma = smoothing`) of their distance
/// `|i - j|·step`.
pub fn probability_density<W>(
    dataset: &Dataset,
    query: ArrayView1<f32>,
    high: f32,
    step: f32,
    k: usize,
    weight_fn: W,
    smoothing: f32,
) -> Result<Vec<(f32, f32)>>
where
    W: Weighting + Copy,
{
    if !smoothing.is_finite() || smoothing <= 0. {
        return Err(KnnErr::invalid(
            "smoothing",
            format!("expected a positive sigma, got {smoothing}"),
        ));
    }

    let buckets = buckets(high, step)?;
    let probs = buckets
        .iter()
        .map(|&v| IntervalProbability::new(v, v + step, k, weight_fn)?.probability(dataset, query))
        .collect::<Result<Vec<_>>>()?;

    let kernel = Gaussian::new(smoothing)?;
    let smoothed = (0..probs.len())
        .map(|i| {
            probs
                .iter()
                .enumerate()
                .map(|(j, p)| kernel.weight(i.abs_diff(j) as f32 * step) * p)
                .sum::<f32>()
        })
        .zip(&buckets)
        .map(|(p, &v)| (v, p))
        .collect();

    Ok(smoothed)
}
