use ndarray::ArrayView1;

use crate::{Dataset, Result};

/// A point predictor bound to fixed hyperparameters.
pub trait Estimator {
    /// Predicts the label of `query` from the samples in `dataset`.
    fn estimate(&self, dataset: &Dataset, query: ArrayView1<f32>) -> Result<f32>;
}

impl<E: Estimator + ?Sized> Estimator for &E {
    fn estimate(&self, dataset: &Dataset, query: ArrayView1<f32>) -> Result<f32> {
        (**self).estimate(dataset, query)
    }
}

impl<E: Estimator + ?Sized> Estimator for Box<E> {
    fn estimate(&self, dataset: &Dataset, query: ArrayView1<f32>) -> Result<f32> {
        (**self).estimate(dataset, query)
    }
}
