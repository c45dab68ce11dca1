use ndarray::Array1;

use crate::{Dataset, KnnErr, Result, Sample};

/// Per-attribute multipliers, one non-negative factor per feature dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleVector(Array1<f32>);

impl ScaleVector {
    /// Creates a new `ScaleVector`.
    ///
    /// # Returns
    /// `InvalidParameter` if any factor is negative or not finite.
    pub fn new<I: Into<Array1<f32>>>(factors: I) -> Result<Self> {
        let factors = factors.into();

        if let Some(bad) = factors.iter().find(|f| !f.is_finite() || **f < 0.) {
            return Err(KnnErr::invalid(
                "scale",
                format!("factors must be finite and non-negative, got {bad}"),
            ));
        }

        Ok(Self(factors))
    }

    /// The identity scale for `dim` attributes.
    pub fn ones(dim: usize) -> Self {
        Self(Array1::ones(dim))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        self.0.as_slice().unwrap_or_default()
    }

    /// Componentwise product, rescaling by the result equals rescaling by `self` then `other`.
    pub fn compose(&self, other: &ScaleVector) -> Result<ScaleVector> {
        if self.len() != other.len() {
            return Err(KnnErr::DimensionMismatch {
                what: "scale vectors",
                got: other.len(),
                expected: self.len(),
            });
        }

        Ok(Self(&self.0 * &other.0))
    }
}

/// Multiplies every feature vector of `dataset` componentwise by `scale`, keeping the labels.
///
/// # Returns
/// A new dataset or `DimensionMismatch` if `scale` doesn't have one factor per attribute.
pub fn rescale(dataset: &Dataset, scale: &ScaleVector) -> Result<Dataset> {
    if !dataset.is_empty() && scale.len() != dataset.dim() {
        return Err(KnnErr::DimensionMismatch {
            what: "scale vector",
            got: scale.len(),
            expected: dataset.dim(),
        });
    }

    let samples = dataset
        .iter()
        .map(|sample| Sample::new(&sample.input() * &scale.0, sample.result()))
        .collect();

    Ok(Dataset::from_parts(samples, scale.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new([
            Sample::new(vec![1.0, 10.0, 100.0], 1.0),
            Sample::new(vec![2.0, 20.0, 200.0], 2.0),
            Sample::new(vec![-3.0, 0.5, 7.0], 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn ones_is_the_identity() {
        let data = dataset();
        assert_eq!(rescale(&data, &ScaleVector::ones(3)).unwrap(), data);
    }

    #[test]
    fn scales_each_attribute() {
        let scale = ScaleVector::new(vec![2.0, 0.0, 0.5]).unwrap();
        let scaled = rescale(&dataset(), &scale).unwrap();

        assert_eq!(scaled.get(0).unwrap().input().to_vec(), vec![2.0, 0.0, 50.0]);
        assert_eq!(scaled.results(), dataset().results());
    }

    #[test]
    fn rescaling_twice_composes() {
        let data = dataset();
        let s1 = ScaleVector::new(vec![2.0, 0.5, 3.0]).unwrap();
        let s2 = ScaleVector::new(vec![4.0, 8.0, 0.25]).unwrap();

        let twice = rescale(&rescale(&data, &s1).unwrap(), &s2).unwrap();
        let once = rescale(&data, &s1.compose(&s2).unwrap()).unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn original_is_untouched() {
        let data = dataset();
        let copy = data.clone();
        let _ = rescale(&data, &ScaleVector::new(vec![9.0, 9.0, 9.0]).unwrap()).unwrap();
        assert_eq!(data, copy);
    }

    #[test]
    fn wrong_length_fails() {
        let err = rescale(&dataset(), &ScaleVector::ones(2)).unwrap_err();
        assert_eq!(
            err,
            KnnErr::DimensionMismatch {
                what: "scale vector",
                got: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn negative_factors_are_rejected() {
        assert!(ScaleVector::new(vec![1.0, -1.0]).is_err());
        assert!(ScaleVector::new(vec![f32::INFINITY]).is_err());
    }
}
