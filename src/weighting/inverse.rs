use super::positive;
use crate::Result;

/// Weights a neighbor inversely proportional to its distance.
///
/// `constant` is added to every distance so that very close neighbors don't receive huge
/// weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inverse {
    num: f32,
    constant: f32,
}

impl Inverse {
    /// Creates a new `Inverse` weighting.
    ///
    /// # Returns
    /// `InvalidParameter` unless both `num` and `constant` are finite and positive.
    pub fn new(num: f32, constant: f32) -> Result<Self> {
        Ok(Self {
            num: positive("num", num)?,
            constant: positive("constant", constant)?,
        })
    }

    pub fn weight(&self, distance: f32) -> f32 {
        self.num / (distance + self.constant)
    }
}

impl Default for Inverse {
    fn default() -> Self {
        Self {
            num: 1.0,
            constant: 0.1,
        }
    }
}
