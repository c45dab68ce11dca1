use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::uniform::Error as UniformError;

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, KnnErr>;

/// The crate's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum KnnErr {
    DimensionMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    InsufficientNeighbors {
        k: usize,
        available: usize,
    },
    EmptyTestSet,
    EmptyDataset,
    InvalidParameter {
        what: &'static str,
        reason: String,
    },
    Config(String),
}

impl KnnErr {
    pub(crate) fn invalid<S: Into<String>>(what: &'static str, reason: S) -> Self {
        Self::InvalidParameter {
            what,
            reason: reason.into(),
        }
    }
}

impl Display for KnnErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnnErr::DimensionMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "dimension mismatch for {what}: got {got}, expected {expected}"
            ),
            KnnErr::InsufficientNeighbors { k, available } => write!(
                f,
                "cannot take {k} nearest neighbors out of {available} samples"
            ),
            KnnErr::EmptyTestSet => write!(f, "the test set is empty, cannot compute the MSE"),
            KnnErr::EmptyDataset => write!(f, "the dataset is empty"),
            KnnErr::InvalidParameter { what, reason } => {
                write!(f, "invalid parameter {what}: {reason}")
            }
            KnnErr::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for KnnErr {}

impl From<UniformError> for KnnErr {
    fn from(value: UniformError) -> Self {
        Self::invalid("distribution", value.to_string())
    }
}

impl From<serde_json::Error> for KnnErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}
