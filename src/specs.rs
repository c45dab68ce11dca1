use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    KnnErr, Result,
    cost::DEFAULT_COST_TRIALS,
    evaluation::{DEFAULT_MAX_RESPLITS, DEFAULT_TRIALS},
    resampling::DEFAULT_TEST_FRACTION,
};

/// The specification for the `WeightFn` enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightFnSpec {
    Inverse { num: f32, constant: f32 },
    Subtract { constant: f32 },
    Gaussian { sigma: f32 },
}

/// The specification for the `Estimator` trait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorSpec {
    Knn { k: usize },
    WeightedKnn { k: usize, weight_fn: WeightFnSpec },
}

/// The specification for the `CrossValidator` struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossValidationSpec {
    pub trials: usize,
    pub test_fraction: f32,
    pub max_resplits: usize,
}

impl Default for CrossValidationSpec {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            test_fraction: DEFAULT_TEST_FRACTION,
            max_resplits: DEFAULT_MAX_RESPLITS,
        }
    }
}

/// The specification for the `CostFunction` struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSpec {
    pub trials: usize,
    pub test_fraction: f32,
}

impl Default for CostSpec {
    fn default() -> Self {
        Self {
            trials: DEFAULT_COST_TRIALS,
            test_fraction: DEFAULT_TEST_FRACTION,
        }
    }
}

/// The specification for the `Domain` struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSpec {
    pub dims: usize,
    pub low: f32,
    pub high: f32,
}

impl Default for DomainSpec {
    fn default() -> Self {
        Self {
            dims: 4,
            low: 0.,
            high: 20.,
        }
    }
}

/// The specification for a whole evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSpec {
    pub estimator: EstimatorSpec,
    #[serde(default)]
    pub cross_validation: CrossValidationSpec,
    #[serde(default)]
    pub cost: CostSpec,
    #[serde(default)]
    pub domain: DomainSpec,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PipelineSpec {
    fn default() -> Self {
        Self {
            estimator: EstimatorSpec::WeightedKnn {
                k: 5,
                weight_fn: WeightFnSpec::Gaussian { sigma: 1.0 },
            },
            cross_validation: Default::default(),
            cost: Default::default(),
            domain: Default::default(),
            seed: None,
        }
    }
}

impl PipelineSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a `PipelineSpec` from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| KnnErr::Config(format!("cannot read '{}': {e}", path.display())))?;

        Self::from_json(&content)
    }
}
