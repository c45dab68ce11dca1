use ndarray::{Array1, ArrayView1};

use crate::{KnnErr, Result};

/// A labeled feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    input: Array1<f32>,
    result: f32,
}

impl Sample {
    /// Creates a new `Sample`.
    ///
    /// # Arguments
    /// * `input` - The feature vector.
    /// * `result` - The label associated with `input`.
    pub fn new<I>(input: I, result: f32) -> Self
    where
        I: Into<Array1<f32>>,
    {
        Self {
            input: input.into(),
            result,
        }
    }

    pub fn input(&self) -> ArrayView1<'_, f32> {
        self.input.view()
    }

    pub fn result(&self) -> f32 {
        self.result
    }

    pub fn dim(&self) -> usize {
        self.input.len()
    }
}

/// An ordered collection of samples that share the same feature dimension.
///
/// Datasets are never mutated by the pipeline, every stage (splitting, rescaling) produces a
/// new one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    samples: Vec<Sample>,
    dim: usize,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `samples` - The samples the dataset is composed of.
    ///
    /// # Returns
    /// The dataset or `DimensionMismatch` if the samples have different feature lengths.
    pub fn new<I>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = Sample>,
    {
        let samples: Vec<Sample> = samples.into_iter().collect();
        let dim = samples.first().map(Sample::dim).unwrap_or_default();

        if let Some(bad) = samples.iter().find(|s| s.dim() != dim) {
            return Err(KnnErr::DimensionMismatch {
                what: "sample input",
                got: bad.dim(),
                expected: dim,
            });
        }

        Ok(Self { samples, dim })
    }

    /// Builds a dataset from samples already known to have `dim` features each.
    pub(crate) fn from_parts(samples: Vec<Sample>, dim: usize) -> Self {
        debug_assert!(samples.iter().all(|s| s.dim() == dim));
        Self { samples, dim }
    }

    /// Returns the feature dimension shared by every sample, 0 for a dataset built empty.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the labels in sample order.
    pub fn results(&self) -> Vec<f32> {
        self.samples.iter().map(Sample::result).collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
