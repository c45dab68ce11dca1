pub mod distribution;
mod estimator;
mod knn;
mod interval;
mod weighted;

pub use estimator::Estimator;
pub use knn::Knn;
pub use interval::{IntervalProbability, probability};
pub use weighted::WeightedKnn;
