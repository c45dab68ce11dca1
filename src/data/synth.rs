//! Artificial wine price datasets.
//!
//! Every generator takes its own random number generator, so seeding a dataset never touches
//! the stream used for resampling.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::{Dataset, Sample};
use crate::Result;

const BOTTLE_SIZES: [f32; 3] = [375.0, 750.0, 1500.0];

/// The fundamental price of a wine given its rating and age.
///
/// Wines gain value until their peak age (older for better wines, `rating - 50`) reaching five
/// times their base price, and lose it over the following ten years. Prices are never negative.
pub fn wine_price(rating: f32, age: f32) -> f32 {
    let peak_age = rating - 50.0;
    let base = rating / 2.0;

    let price = if age > peak_age {
        base * (5.0 - 0.5 * (age - peak_age))
    } else {
        base * (5.0 * (age / peak_age))
    };

    price.max(0.0)
}

/// Generates `n` wines with inputs `[rating, age]` and a noisy price.
///
/// # Arguments
/// * `n` - The amount of samples.
/// * `rng` - A random number generator.
pub fn wine_set_1<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Dataset> {
    let rating = Uniform::new(50.0f32, 100.0)?;
    let age = Uniform::new(0.0f32, 50.0)?;
    let noise = Uniform::new(0.8f32, 1.2)?;

    let samples = (0..n)
        .map(|_| {
            let rating: f32 = rating.sample(rng);
            let age: f32 = age.sample(rng);
            let price = wine_price(rating, age) * noise.sample(rng);

            Sample::new(vec![rating, age], price)
        })
        .collect();

    Ok(Dataset::from_parts(samples, 2))
}

/// Generates `n` wines with inputs `[rating, age, aisle, bottle_size]`.
///
/// The aisle has no effect on the price, the bottle size scales it linearly but lives on a
/// very different scale than the other attributes.
pub fn wine_set_2<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Dataset> {
    let rating = Uniform::new(50.0f32, 100.0)?;
    let age = Uniform::new(0.0f32, 50.0)?;
    let aisle = Uniform::new_inclusive(1u32, 20)?;
    let bottle = Uniform::new(0, BOTTLE_SIZES.len())?;
    let noise = Uniform::new(0.9f32, 1.1)?;

    let samples = (0..n)
        .map(|_| {
            let rating: f32 = rating.sample(rng);
            let age: f32 = age.sample(rng);
            let aisle = aisle.sample(rng) as f32;
            let bottle_size = BOTTLE_SIZES[bottle.sample(rng)];

            let price = wine_price(rating, age) * (bottle_size / 750.0) * noise.sample(rng);
            Sample::new(vec![rating, age, aisle, bottle_size], price)
        })
        .collect();

    Ok(Dataset::from_parts(samples, 4))
}

/// Generates `n` wines like [`wine_set_1`], where each one was bought at a discount store with
/// probability 0.5, lowering its price to 60%. The store is not part of the inputs.
pub fn wine_set_3<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Dataset> {
    let base = wine_set_1(n, rng)?;

    let samples = base
        .iter()
        .map(|sample| {
            let mut price = sample.result();
            if rng.random_bool(0.5) {
                price *= 0.6;
            }

            Sample::new(sample.input().to_owned(), price)
        })
        .collect();

    Ok(Dataset::from_parts(samples, base.dim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn price_peaks_at_peak_age() {
        // rating 95 peaks at 45 years
        let young = wine_price(95.0, 10.0);
        let peak = wine_price(95.0, 45.0);
        let old = wine_price(95.0, 50.0);

        assert!(young < peak);
        assert!(old < peak);
        assert_eq!(peak, 95.0 / 2.0 * 5.0);
    }

    #[test]
    fn price_is_never_negative() {
        assert_eq!(wine_price(60.0, 49.0), 0.0);
    }

    #[test]
    fn generators_have_expected_shapes() {
        let mut rng = StdRng::seed_from_u64(42);

        let set1 = wine_set_1(50, &mut rng).unwrap();
        assert_eq!((set1.len(), set1.dim()), (50, 2));

        let set2 = wine_set_2(50, &mut rng).unwrap();
        assert_eq!((set2.len(), set2.dim()), (50, 4));
        for sample in &set2 {
            let input = sample.input();
            assert!((1.0..=20.0).contains(&input[2]));
            assert!(BOTTLE_SIZES.contains(&input[3]));
        }

        let set3 = wine_set_3(50, &mut rng).unwrap();
        assert_eq!((set3.len(), set3.dim()), (50, 2));
    }

    #[test]
    fn generators_are_reproducible() {
        let a = wine_set_2(20, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = wine_set_2(20, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }
}
