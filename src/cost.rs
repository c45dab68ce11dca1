use std::{cell::RefCell, rc::Rc};

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{
    CrossValidator, Dataset, Estimator, KnnErr, Result,
    rescaling::{self, ScaleVector},
    resampling::DEFAULT_TEST_FRACTION,
};

/// Trials run per evaluation of a default `CostFunction`.
pub const DEFAULT_COST_TRIALS: usize = 10;

/// The cross-validated error of an estimator as a function of the attribute scale.
///
/// This is the objective handed to an external optimizer searching for the scale vector that
/// best equalizes the influence of each attribute. Every call rescales the original dataset
/// from scratch, so calls don't affect each other except through the shared random number
/// generator.
pub struct CostFunction<'a, E: ?Sized, R> {
    estimator: &'a E,
    dataset: &'a Dataset,
    validator: CrossValidator,
    rng: Rc<RefCell<R>>,
}

impl<'a, E, R> CostFunction<'a, E, R>
where
    E: Estimator + ?Sized,
    R: Rng,
{
    /// Creates a new `CostFunction` running `DEFAULT_COST_TRIALS` trials per call.
    ///
    /// # Arguments
    /// * `estimator` - The estimator under evaluation.
    /// * `dataset` - The unscaled dataset.
    /// * `rng` - A random number generator shared by every call.
    pub fn new(estimator: &'a E, dataset: &'a Dataset, rng: Rc<RefCell<R>>) -> Result<Self> {
        let validator = CrossValidator::new(DEFAULT_COST_TRIALS, DEFAULT_TEST_FRACTION)?;
        Ok(Self::with_validator(estimator, dataset, validator, rng))
    }

    pub fn with_validator(
        estimator: &'a E,
        dataset: &'a Dataset,
        validator: CrossValidator,
        rng: Rc<RefCell<R>>,
    ) -> Self {
        Self {
            estimator,
            dataset,
            validator,
            rng,
        }
    }

    /// Returns the validator run on every call.
    pub fn validator(&self) -> &CrossValidator {
        &self.validator
    }

    /// Returns the amount of attributes a candidate scale must have.
    pub fn dims(&self) -> usize {
        self.dataset.dim()
    }

    /// Evaluates a candidate scale.
    ///
    /// # Returns
    /// The average MSE over the validator's trials once the dataset is rescaled by `scale`.
    pub fn cost(&self, scale: &[f32]) -> Result<f32> {
        let scale = ScaleVector::new(scale.to_vec())?;
        let scaled = rescaling::rescale(self.dataset, &scale)?;

        let mut rng = self.rng.borrow_mut();
        self.validator
            .cross_validate(self.estimator, &scaled, &mut *rng)
    }

    /// Turns this cost function into a plain closure.
    pub fn into_fn(self) -> impl Fn(&[f32]) -> Result<f32> + 'a
    where
        R: 'a,
    {
        move |scale: &[f32]| self.cost(scale)
    }
}

/// Builds the cost function of `estimator` over `dataset` as a closure.
pub fn make_cost_function<'a, E, R>(
    estimator: &'a E,
    dataset: &'a Dataset,
    rng: Rc<RefCell<R>>,
) -> Result<impl Fn(&[f32]) -> Result<f32> + 'a>
where
    E: Estimator + ?Sized,
    R: Rng + 'a,
{
    Ok(CostFunction::new(estimator, dataset, rng)?.into_fn())
}

/// The search space of an optimizer, an inclusive `(low, high)` range per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    bounds: Vec<(f32, f32)>,
}

impl Domain {
    /// Creates a new `Domain`.
    ///
    /// # Returns
    /// `InvalidParameter` if any range has `low > high` or is not finite.
    pub fn new(bounds: Vec<(f32, f32)>) -> Result<Self> {
        if let Some(&(low, high)) = bounds
            .iter()
            .find(|(low, high)| !low.is_finite() || !high.is_finite() || low > high)
        {
            return Err(KnnErr::invalid(
                "domain",
                format!("invalid range [{low}, {high}]"),
            ));
        }

        Ok(Self { bounds })
    }

    /// The same `[low, high]` range for each of `dims` dimensions.
    pub fn uniform(dims: usize, low: f32, high: f32) -> Result<Self> {
        Self::new(vec![(low, high); dims])
    }

    pub fn dims(&self) -> usize {
        self.bounds.len()
    }

    pub fn bounds(&self) -> &[(f32, f32)] {
        &self.bounds
    }

    pub fn contains(&self, point: &[f32]) -> bool {
        point.len() == self.dims()
            && point
                .iter()
                .zip(&self.bounds)
                .all(|(x, (low, high))| (*low..=*high).contains(x))
    }

    /// Draws a uniformly random point of the domain.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f32>> {
        self.bounds
            .iter()
            .map(|&(low, high)| Ok(Uniform::new_inclusive(low, high)?.sample(rng)))
            .collect()
    }
}
