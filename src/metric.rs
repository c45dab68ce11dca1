use ndarray::ArrayView1;

use crate::{KnnErr, Result};

/// A dissimilarity measure between two feature vectors.
pub trait Metric {
    /// Computes the distance between `a` and `b`.
    ///
    /// # Returns
    /// The distance or `DimensionMismatch` if the vectors have different lengths.
    fn distance(&self, a: ArrayView1<f32>, b: ArrayView1<f32>) -> Result<f32>;
}

/// Euclidean distance, the square root of the summed squared differences.
#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

impl Euclidean {
    /// Returns a new `Euclidean`.
    pub fn new() -> Self {
        Self
    }
}

impl Metric for Euclidean {
    fn distance(&self, a: ArrayView1<f32>, b: ArrayView1<f32>) -> Result<f32> {
        if a.len() != b.len() {
            return Err(KnnErr::DimensionMismatch {
                what: "distance operands",
                got: b.len(),
                expected: a.len(),
            });
        }

        Ok((&a - &b).mapv(|x| x.powi(2)).sum().sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn distance_to_itself_is_zero() {
        let a = array![1.5, -2.0, 7.25];
        assert_eq!(Euclidean.distance(a.view(), a.view()).unwrap(), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![-4.0, 0.5, 9.0];

        let ab = Euclidean.distance(a.view(), b.view()).unwrap();
        let ba = Euclidean.distance(b.view(), a.view()).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn pythagorean_triple() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        assert_eq!(Euclidean.distance(a.view(), b.view()).unwrap(), 5.0);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0, 5.0];

        let err = Euclidean.distance(a.view(), b.view()).unwrap_err();
        assert_eq!(
            err,
            KnnErr::DimensionMismatch {
                what: "distance operands",
                got: 3,
                expected: 2
            }
        );
    }
}
