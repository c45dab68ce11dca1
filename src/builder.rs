use crate::{
    CrossValidator, Estimator, KnnErr, Knn, Result, WeightFn, WeightedKnn,
    cost::Domain,
    specs::{CostSpec, CrossValidationSpec, DomainSpec, EstimatorSpec, WeightFnSpec},
};

/// Builds the pipeline components given their specifications.
#[derive(Default)]
pub struct EstimatorBuilder;

impl EstimatorBuilder {
    /// Creates a new `EstimatorBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Estimator` following a spec.
    ///
    /// # Arguments
    /// * `spec` - The specification for the estimator.
    ///
    /// # Returns
    /// The estimator or `InvalidParameter` if the spec holds an unusable value.
    pub fn build(&self, spec: &EstimatorSpec) -> Result<Box<dyn Estimator>> {
        match *spec {
            EstimatorSpec::Knn { k } => {
                self.validate_k(k)?;
                Ok(Box::new(Knn::new(k)))
            }
            EstimatorSpec::WeightedKnn { k, weight_fn } => {
                self.validate_k(k)?;
                let weight_fn = self.resolve_weight_fn(weight_fn)?;
                Ok(Box::new(WeightedKnn::new(k, weight_fn)))
            }
        }
    }

    /// Resolves a `WeightFnSpec` into its `WeightFn`.
    ///
    /// # Returns
    /// `InvalidParameter` if any of the parameters is not finite and positive.
    pub fn resolve_weight_fn(&self, spec: WeightFnSpec) -> Result<WeightFn> {
        match spec {
            WeightFnSpec::Inverse { num, constant } => WeightFn::inverse(num, constant),
            WeightFnSpec::Subtract { constant } => WeightFn::subtract(constant),
            WeightFnSpec::Gaussian { sigma } => WeightFn::gaussian(sigma),
        }
    }

    pub fn build_validator(&self, spec: &CrossValidationSpec) -> Result<CrossValidator> {
        Ok(CrossValidator::new(spec.trials, spec.test_fraction)?
            .with_max_resplits(spec.max_resplits))
    }

    pub fn build_cost_validator(&self, spec: &CostSpec) -> Result<CrossValidator> {
        CrossValidator::new(spec.trials, spec.test_fraction)
    }

    pub fn build_domain(&self, spec: &DomainSpec) -> Result<Domain> {
        Domain::uniform(spec.dims, spec.low, spec.high)
    }

    fn validate_k(&self, k: usize) -> Result<()> {
        if k == 0 {
            return Err(KnnErr::invalid("k", "at least one neighbor is required"));
        }

        Ok(())
    }
}
