use ndarray::ArrayView1;

use super::Estimator;
use crate::{Dataset, Euclidean, Metric, Result, neighbors};

/// Plain k-nearest-neighbors: the unweighted mean of the `k` nearest labels.
#[derive(Debug, Clone, Copy)]
pub struct Knn<M = Euclidean> {
    k: usize,
    metric: M,
}

impl Knn {
    /// Returns a new `Knn` using the euclidean distance.
    ///
    /// # Arguments
    /// * `k` - The amount of neighbors to average over.
    pub fn new(k: usize) -> Self {
        Self::with_metric(k, Euclidean)
    }
}

impl<M: Metric> Knn<M> {
    pub fn with_metric(k: usize, metric: M) -> Self {
        Self { k, metric }
    }

    pub fn k(&self) -> usize {
        self.k
    }
}

impl<M: Metric> Estimator for Knn<M> {
    fn estimate(&self, dataset: &Dataset, query: ArrayView1<f32>) -> Result<f32> {
        let nearest = neighbors::nearest(dataset, query, self.k, &self.metric)?;

        let sum: f32 = nearest
            .iter()
            .filter_map(|n| dataset.get(n.index))
            .map(|sample| sample.result())
            .sum();

        Ok(sum / self.k as f32)
    }
}
