use ndarray::ArrayView1;

use super::weighted::weighted_sums;
use crate::{
    Dataset, Euclidean, KnnErr, Metric, Result, neighbors,
    weighting::{WeightFn, Weighting},
};

/// Estimates the probability that the label of a query lies within `[low, high]`.
///
/// The probability is the weight of the `k` nearest neighbors whose labels fall inside the
/// interval divided by the weight of all of them. A neighborhood with zero total weight
/// yields 0.
#[derive(Debug, Clone, Copy)]
pub struct IntervalProbability<W = WeightFn, M = Euclidean> {
    low: f32,
    high: f32,
    k: usize,
    weight_fn: W,
    metric: M,
}

impl<W: Weighting> IntervalProbability<W> {
    /// Returns a new `IntervalProbability` using the euclidean distance.
    ///
    /// # Arguments
    /// * `low` - The inclusive lower bound.
    /// * `high` - The inclusive upper bound.
    /// * `k` - The amount of neighbors to consider.
    /// * `weight_fn` - Maps each neighbor's distance to its weight.
    ///
    /// # Returns
    /// `InvalidParameter` if `low > high` or either bound is NaN.
    pub fn new(low: f32, high: f32, k: usize, weight_fn: W) -> Result<Self> {
        Self::with_metric(low, high, k, weight_fn, Euclidean)
    }
}

impl<W: Weighting, M: Metric> IntervalProbability<W, M> {
    pub fn with_metric(low: f32, high: f32, k: usize, weight_fn: W, metric: M) -> Result<Self> {
        if low.is_nan() || high.is_nan() || low > high {
            return Err(KnnErr::invalid(
                "interval",
                format!("low ({low}) must not exceed high ({high})"),
            ));
        }

        Ok(Self {
            low,
            high,
            k,
            weight_fn,
            metric,
        })
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.low, self.high)
    }

    /// Computes the probability for `query` given the samples in `dataset`.
    pub fn probability(&self, dataset: &Dataset, query: ArrayView1<f32>) -> Result<f32> {
        let nearest = neighbors::nearest(dataset, query, self.k, &self.metric)?;
        let (low, high) = (self.low, self.high);

        let in_range = |result: f32| {
            if low <= result && result <= high {
                1.
            } else {
                0.
            }
        };
        let (inside, total) = weighted_sums(dataset, &nearest, &self.weight_fn, in_range);

        if total == 0. {
            return Ok(0.);
        }

        Ok(inside / total)
    }
}

/// Shorthand for [`IntervalProbability::probability`] with the euclidean distance.
pub fn probability<W: Weighting>(
    dataset: &Dataset,
    query: ArrayView1<f32>,
    low: f32,
    high: f32,
    k: usize,
    weight_fn: W,
) -> Result<f32> {
    IntervalProbability::new(low, high, k, weight_fn)?.probability(dataset, query)
}
