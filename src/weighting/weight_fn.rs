use super::{Gaussian, Inverse, Subtract};
use crate::Result;

/// Maps the distance to a neighbor into the importance of its label.
pub trait Weighting {
    /// Returns the weight of a neighbor at `distance` (assumed non-negative).
    fn weight(&self, distance: f32) -> f32;
}

/// The weighting strategies available to the weighted estimators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeightFn {
    Inverse(Inverse),
    Subtract(Subtract),
    Gaussian(Gaussian),
}
use WeightFn::*;

impl WeightFn {
    pub fn inverse(num: f32, constant: f32) -> Result<Self> {
        Ok(Inverse(super::Inverse::new(num, constant)?))
    }

    pub fn subtract(constant: f32) -> Result<Self> {
        Ok(Subtract(super::Subtract::new(constant)?))
    }

    pub fn gaussian(sigma: f32) -> Result<Self> {
        Ok(Gaussian(super::Gaussian::new(sigma)?))
    }
}

impl Default for WeightFn {
    fn default() -> Self {
        Gaussian(Default::default())
    }
}

impl Weighting for WeightFn {
    fn weight(&self, distance: f32) -> f32 {
        match self {
            Inverse(w) => w.weight(distance),
            Subtract(w) => w.weight(distance),
            Gaussian(w) => w.weight(distance),
        }
    }
}

impl Weighting for Inverse {
    fn weight(&self, distance: f32) -> f32 {
        Inverse::weight(self, distance)
    }
}

impl Weighting for Subtract {
    fn weight(&self, distance: f32) -> f32 {
        Subtract::weight(self, distance)
    }
}

impl Weighting for Gaussian {
    fn weight(&self, distance: f32) -> f32 {
        Gaussian::weight(self, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KnnErr;

    #[test]
    fn inverse_at_zero_is_num_over_constant() {
        let w = WeightFn::inverse(2.0, 0.5).unwrap();
        assert_eq!(w.weight(0.0), 4.0);
        assert_eq!(WeightFn::Inverse(Default::default()).weight(0.0), 10.0);
    }

    #[test]
    fn inverse_decreases() {
        let w = WeightFn::inverse(1.0, 0.1).unwrap();
        assert!(w.weight(0.5) > w.weight(1.0));
        assert!(w.weight(100.0) > 0.0);
    }

    #[test]
    fn subtract_cuts_off_at_constant() {
        let w = WeightFn::subtract(1.0).unwrap();
        assert_eq!(w.weight(0.0), 1.0);
        assert_eq!(w.weight(0.25), 0.75);
        assert_eq!(w.weight(1.0), 0.0);
        assert_eq!(w.weight(3.0), 0.0);
    }

    #[test]
    fn gaussian_at_zero_is_one() {
        let w = WeightFn::default();
        assert_eq!(w.weight(0.0), 1.0);
        assert!((w.weight(1.0) - (-0.5f32).exp()).abs() < 1e-6);
        assert!(w.weight(10.0) > 0.0);
    }

    #[test]
    fn degenerate_parameters_are_rejected() {
        let invalid = |result: Result<WeightFn>, name: &str| {
            assert!(matches!(
                result,
                Err(KnnErr::InvalidParameter { what, .. }) if what == name
            ));
        };

        invalid(WeightFn::gaussian(0.0), "sigma");
        invalid(WeightFn::gaussian(-1.0), "sigma");
        invalid(WeightFn::gaussian(f32::NAN), "sigma");
        invalid(WeightFn::inverse(1.0, 0.0), "constant");
        invalid(WeightFn::inverse(f32::INFINITY, 0.1), "num");
        invalid(WeightFn::inverse(0.0, 0.1), "num");
        invalid(WeightFn::subtract(0.0), "constant");
    }

    #[test]
    fn valid_weights_at_zero_are_finite_and_positive() {
        let weights = [
            WeightFn::gaussian(0.01).unwrap(),
            WeightFn::inverse(1.0, 1e-3).unwrap(),
            WeightFn::subtract(0.5).unwrap(),
            WeightFn::default(),
        ];

        for w in weights {
            let at_zero = w.weight(0.0);
            assert!(at_zero.is_finite() && at_zero > 0.0, "{w:?} gave {at_zero}");
        }
    }
}
