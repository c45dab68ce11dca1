use rand::Rng;

use crate::{Dataset, KnnErr, Result};

/// Fraction of samples sent to the test set when none is given.
pub const DEFAULT_TEST_FRACTION: f32 = 0.05;

/// A random train/test partition of a dataset.
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Dataset,
    pub test: Dataset,
}

/// Randomly partitions `dataset` into a train and a test set.
///
/// Each sample goes to the test set independently with probability `test_fraction`, so the
/// test set size is only `test_fraction * len` on average and either side may come out empty.
/// Both sides keep the original sample order.
///
/// # Arguments
/// * `dataset` - The dataset to partition.
/// * `test_fraction` - The probability of a sample landing in the test set.
/// * `rng` - A random number generator, one draw is taken per sample.
///
/// # Returns
/// The split or `InvalidParameter` if `test_fraction` is not within `[0, 1]`.
pub fn split<R: Rng + ?Sized>(dataset: &Dataset, test_fraction: f32, rng: &mut R) -> Result<Split> {
    validate_fraction(test_fraction)?;

    let (test, train): (Vec<_>, Vec<_>) = dataset
        .iter()
        .cloned()
        .partition(|_| rng.random::<f32>() < test_fraction);

    Ok(Split {
        train: Dataset::from_parts(train, dataset.dim()),
        test: Dataset::from_parts(test, dataset.dim()),
    })
}

pub(crate) fn validate_fraction(test_fraction: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&test_fraction) {
        return Err(KnnErr::invalid(
            "test_fraction",
            format!("expected a value within [0, 1], got {test_fraction}"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sample;
    use rand::{SeedableRng, rngs::StdRng};

    fn dataset(n: usize) -> Dataset {
        Dataset::new((0..n).map(|i| Sample::new(vec![i as f32], i as f32))).unwrap()
    }

    #[test]
    fn split_is_a_partition_preserving_order() {
        let data = dataset(100);
        let mut rng = StdRng::seed_from_u64(42);

        let Split { train, test } = split(&data, 0.3, &mut rng).unwrap();
        assert_eq!(train.len() + test.len(), data.len());
        assert_eq!(train.dim(), 1);
        assert_eq!(test.dim(), 1);

        let is_sorted = |d: &Dataset| d.results().windows(2).all(|w| w[0] < w[1]);
        assert!(is_sorted(&train));
        assert!(is_sorted(&test));

        let mut all: Vec<_> = train.results();
        all.extend(test.results());
        all.sort_by(f32::total_cmp);
        assert_eq!(all, data.results());
    }

    #[test]
    fn extreme_fractions() {
        let data = dataset(20);
        let mut rng = StdRng::seed_from_u64(42);

        let none = split(&data, 0.0, &mut rng).unwrap();
        assert_eq!((none.train.len(), none.test.len()), (20, 0));

        let all = split(&data, 1.0, &mut rng).unwrap();
        assert_eq!((all.train.len(), all.test.len()), (0, 20));
    }

    #[test]
    fn mean_test_size_converges() {
        const N: usize = 200;
        const RUNS: usize = 2000;
        let data = dataset(N);
        let mut rng = StdRng::seed_from_u64(42);

        let total: usize = (0..RUNS)
            .map(|_| split(&data, 0.05, &mut rng).unwrap().test.len())
            .sum();

        let mean = total as f32 / RUNS as f32;
        assert!((mean - N as f32 * 0.05).abs() < 0.25, "mean test size {mean}");
    }

    #[test]
    fn same_seed_same_split() {
        let data = dataset(50);

        let a = split(&data, 0.5, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = split(&data, 0.5, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.test, b.test);
    }

    #[test]
    fn invalid_fraction_is_rejected() {
        let data = dataset(5);
        let mut rng = StdRng::seed_from_u64(42);

        for fraction in [-0.1, 1.5, f32::NAN] {
            assert!(split(&data, fraction, &mut rng).is_err());
        }
    }
}
