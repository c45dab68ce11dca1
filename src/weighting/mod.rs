mod gaussian;
mod inverse;
mod subtract;
mod weight_fn;

pub use gaussian::Gaussian;
pub use inverse::Inverse;
pub use subtract::Subtract;
pub use weight_fn::{WeightFn, Weighting};

use crate::{KnnErr, Result};

/// Checks that a weighting parameter is finite and strictly positive.
pub(crate) fn positive(what: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0. {
        return Ok(value);
    }

    Err(KnnErr::invalid(what, format!("expected a positive value, got {value}")))
}
