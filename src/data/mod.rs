mod dataset;
pub mod synth;

pub use dataset::{Dataset, Sample};
