pub mod builder;
pub mod cost;
pub mod data;
pub mod error;
pub mod estimation;
pub mod evaluation;
pub mod metric;
pub mod neighbors;
pub mod rescaling;
pub mod resampling;
pub mod specs;
pub mod weighting;

pub use builder::EstimatorBuilder;
pub use cost::{CostFunction, Domain, make_cost_function};
pub use data::{Dataset, Sample};
pub use error::{KnnErr, Result};
pub use estimation::{Estimator, IntervalProbability, Knn, WeightedKnn, probability};
pub use evaluation::{CrossValidator, cross_validate, evaluate};
pub use metric::{Euclidean, Metric};
pub use neighbors::{Neighbor, rank};
pub use rescaling::{ScaleVector, rescale};
pub use resampling::{Split, split};
pub use specs::PipelineSpec;
pub use weighting::{WeightFn, Weighting};
