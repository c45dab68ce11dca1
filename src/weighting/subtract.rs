use super::positive;
use crate::Result;

/// Subtracts the distance from a constant, neighbors further than `constant` weigh nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Subtract {
    constant: f32,
}

impl Subtract {
    pub fn new(constant: f32) -> Result<Self> {
        Ok(Self {
            constant: positive("constant", constant)?,
        })
    }

    pub fn weight(&self, distance: f32) -> f32 {
        (self.constant - distance).max(0.)
    }
}

impl Default for Subtract {
    fn default() -> Self {
        Self { constant: 1.0 }
    }
}
