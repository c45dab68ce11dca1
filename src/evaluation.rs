use std::num::NonZeroUsize;

use log::{debug, warn};
use rand::Rng;

use crate::{
    Dataset, Estimator, KnnErr, Result,
    resampling::{self, DEFAULT_TEST_FRACTION, Split},
};

/// Trials run by a default `CrossValidator`.
pub const DEFAULT_TRIALS: usize = 100;

/// Empty test sets a default `CrossValidator` redraws before giving up on a trial.
pub const DEFAULT_MAX_RESPLITS: usize = 10;

/// Computes the mean squared error of `estimator` when predicting every sample of `testset`
/// from the samples of `trainset`.
///
/// # Returns
/// The MSE, `EmptyTestSet` if there is nothing to test, or whatever error the estimator fails
/// with.
pub fn evaluate<E>(estimator: &E, trainset: &Dataset, testset: &Dataset) -> Result<f32>
where
    E: Estimator + ?Sized,
{
    if testset.is_empty() {
        return Err(KnnErr::EmptyTestSet);
    }

    let mut error = 0.;
    for sample in testset {
        let guess = estimator.estimate(trainset, sample.input())?;
        error += (sample.result() - guess).powi(2);
    }

    Ok(error / testset.len() as f32)
}

/// Averages the error of an estimator over many independent random train/test splits.
#[derive(Debug, Clone, Copy)]
pub struct CrossValidator {
    trials: NonZeroUsize,
    test_fraction: f32,
    max_resplits: usize,
}

impl CrossValidator {
    /// Creates a new `CrossValidator`.
    ///
    /// # Arguments
    /// * `trials` - The amount of splits to evaluate.
    /// * `test_fraction` - The probability of each sample landing in a trial's test set.
    ///
    /// # Returns
    /// `InvalidParameter` if there are no trials or `test_fraction` is not within `[0, 1]`.
    pub fn new(trials: usize, test_fraction: f32) -> Result<Self> {
        let trials = NonZeroUsize::new(trials)
            .ok_or_else(|| KnnErr::invalid("trials", "at least one trial is required"))?;
        resampling::validate_fraction(test_fraction)?;

        Ok(Self {
            trials,
            test_fraction,
            max_resplits: DEFAULT_MAX_RESPLITS,
        })
    }

    /// Sets how many times a split with an empty test set is redrawn before the whole run fails
    /// with `EmptyTestSet`.
    pub fn with_max_resplits(mut self, max_resplits: usize) -> Self {
        self.max_resplits = max_resplits;
        self
    }

    pub fn trials(&self) -> usize {
        self.trials.get()
    }

    pub fn test_fraction(&self) -> f32 {
        self.test_fraction
    }

    pub fn max_resplits(&self) -> usize {
        self.max_resplits
    }

    /// Runs `trials` independent split-and-evaluate rounds and averages their MSE.
    ///
    /// # Arguments
    /// * `estimator` - The estimator under evaluation.
    /// * `dataset` - The dataset every split is drawn from.
    /// * `rng` - The random number generator all splits are drawn with.
    pub fn cross_validate<E, R>(&self, estimator: &E, dataset: &Dataset, rng: &mut R) -> Result<f32>
    where
        E: Estimator + ?Sized,
        R: Rng + ?Sized,
    {
        let trials = self.trials.get();
        let mut error = 0.;

        for trial in 0..trials {
            let Split { train, test } = self.draw(trial, dataset, rng)?;
            let mse = evaluate(estimator, &train, &test)?;

            debug!(
                "trial {trial}: train {} test {} mse {mse}",
                train.len(),
                test.len()
            );
            error += mse;
        }

        Ok(error / trials as f32)
    }

    fn draw<R>(&self, trial: usize, dataset: &Dataset, rng: &mut R) -> Result<Split>
    where
        R: Rng + ?Sized,
    {
        for attempt in 0..=self.max_resplits {
            let split = resampling::split(dataset, self.test_fraction, rng)?;
            if !split.test.is_empty() {
                return Ok(split);
            }

            warn!("trial {trial}: empty test set on attempt {attempt}, redrawing");
        }

        Err(KnnErr::EmptyTestSet)
    }
}

impl Default for CrossValidator {
    fn default() -> Self {
        Self {
            trials: NonZeroUsize::new(DEFAULT_TRIALS).unwrap_or(NonZeroUsize::MIN),
            test_fraction: DEFAULT_TEST_FRACTION,
            max_resplits: DEFAULT_MAX_RESPLITS,
        }
    }
}

/// Shorthand for [`CrossValidator::cross_validate`].
pub fn cross_validate<E, R>(
    estimator: &E,
    dataset: &Dataset,
    trials: usize,
    test_fraction: f32,
    rng: &mut R,
) -> Result<f32>
where
    E: Estimator + ?Sized,
    R: Rng + ?Sized,
{
    CrossValidator::new(trials, test_fraction)?.cross_validate(estimator, dataset, rng)
}
