use super::positive;
use crate::Result;

/// Gaussian bell over the distance. Lower `sigma` values make weights decline faster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gaussian {
    sigma: f32,
}

impl Gaussian {
    /// Creates a new `Gaussian` weighting.
    ///
    /// # Returns
    /// `InvalidParameter` unless `sigma` is finite and positive.
    pub fn new(sigma: f32) -> Result<Self> {
        Ok(Self {
            sigma: positive("sigma", sigma)?,
        })
    }

    pub fn weight(&self, distance: f32) -> f32 {
        (-distance.powi(2) / (2. * self.sigma.powi(2))).exp()
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Self { sigma: 1.0 }
    }
}
