use ndarray::ArrayView1;

use crate::{Dataset, KnnErr, Metric, Result};

/// The distance from a query to the sample at `index` of the dataset it was ranked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub distance: f32,
    pub index: usize,
}

/// Computes the distance from `query` to every sample in `dataset` and sorts them ascending.
///
/// Ties in distance are broken by index, so the ranking is deterministic.
///
/// # Arguments
/// * `dataset` - The samples to rank.
/// * `query` - The feature vector of interest.
/// * `metric` - The distance metric.
///
/// # Returns
/// Every sample as a `Neighbor`, nearest first, or `DimensionMismatch` if `query` doesn't have
/// the dataset's dimension.
pub fn rank<M>(dataset: &Dataset, query: ArrayView1<f32>, metric: &M) -> Result<Vec<Neighbor>>
where
    M: Metric + ?Sized,
{
    let mut neighbors = dataset
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let distance = metric.distance(sample.input(), query)?;
            Ok(Neighbor { distance, index })
        })
        .collect::<Result<Vec<_>>>()?;

    neighbors.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.index.cmp(&b.index))
    });

    Ok(neighbors)
}

/// Returns the `k` nearest neighbors of `query`.
///
/// # Returns
/// `InsufficientNeighbors` unless `1 <= k <= dataset.len()`.
pub fn nearest<M>(
    dataset: &Dataset,
    query: ArrayView1<f32>,
    k: usize,
    metric: &M,
) -> Result<Vec<Neighbor>>
where
    M: Metric + ?Sized,
{
    if k == 0 || k > dataset.len() {
        return Err(KnnErr::InsufficientNeighbors {
            k,
            available: dataset.len(),
        });
    }

    let mut neighbors = rank(dataset, query, metric)?;
    neighbors.truncate(k);

    Ok(neighbors)
}
