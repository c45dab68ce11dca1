use ndarray::ArrayView1;

use super::Estimator;
use crate::{
    Dataset, Euclidean, Metric, Result,
    neighbors::{self, Neighbor},
    weighting::{WeightFn, Weighting},
};

/// Distance-weighted k-nearest-neighbors.
///
/// The prediction is `Σ w(dᵢ)·yᵢ / Σ w(dᵢ)` over the `k` nearest samples. When every neighbor
/// weighs zero (e.g. all of them lie beyond a `Subtract` cutoff) the neighborhood carries no
/// information and the estimate is 0.
#[derive(Debug, Clone, Copy)]
pub struct WeightedKnn<W = WeightFn, M = Euclidean> {
    k: usize,
    weight_fn: W,
    metric: M,
}

impl<W: Weighting> WeightedKnn<W> {
    /// Returns a new `WeightedKnn` using the euclidean distance.
    ///
    /// # Arguments
    /// * `k` - The amount of neighbors to average over.
    /// * `weight_fn` - Maps each neighbor's distance to its weight.
    pub fn new(k: usize, weight_fn: W) -> Self {
        Self::with_metric(k, weight_fn, Euclidean)
    }
}

impl<W: Weighting, M: Metric> WeightedKnn<W, M> {
    pub fn with_metric(k: usize, weight_fn: W, metric: M) -> Self {
        Self {
            k,
            weight_fn,
            metric,
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn weight_fn(&self) -> &W {
        &self.weight_fn
    }
}

impl<W: Weighting, M: Metric> Estimator for WeightedKnn<W, M> {
    fn estimate(&self, dataset: &Dataset, query: ArrayView1<f32>) -> Result<f32> {
        let nearest = neighbors::nearest(dataset, query, self.k, &self.metric)?;
        let (avg, total) = weighted_sums(dataset, &nearest, &self.weight_fn, |result| result);

        if total == 0. {
            return Ok(0.);
        }

        Ok(avg / total)
    }
}

/// Returns `(Σ w(dᵢ)·value(yᵢ), Σ w(dᵢ))` over `neighbors`.
pub(super) fn weighted_sums<W, F>(
    dataset: &Dataset,
    neighbors: &[Neighbor],
    weight_fn: &W,
    value: F,
) -> (f32, f32)
where
    W: Weighting + ?Sized,
    F: Fn(f32) -> f32,
{
    neighbors
        .iter()
        .filter_map(|n| dataset.get(n.index).map(|s| (n.distance, s.result())))
        .fold((0., 0.), |(acc, total), (distance, result)| {
            let weight = weight_fn.weight(distance);
            (acc + weight * value(result), total + weight)
        })
}
