use std::{cell::RefCell, env, rc::Rc};

use anyhow::{Context, ensure};
use log::{debug, info};
use ndarray::array;
use rand::{SeedableRng, rngs::StdRng};

use knn_eval::{
    CostFunction, EstimatorBuilder, Knn, PipelineSpec, WeightFn, data::synth,
    estimation::distribution, probability,
};

const DATASET_SIZE: usize = 200;
const SEARCH_ITERS: usize = 50;
const DEFAULT_SEED: u64 = 0;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let spec = match env::var("PIPELINE") {
        Ok(path) => PipelineSpec::load(&path)
            .with_context(|| format!("failed to load the pipeline spec at {path}"))?,
        Err(_) => PipelineSpec::default(),
    };
    let seed = match env::var("SEED") {
        Ok(seed) => seed.parse().context("SEED must be an unsigned integer")?,
        Err(_) => spec.seed.unwrap_or(DEFAULT_SEED),
    };
    info!("running {:?} with seed {seed}", spec.estimator);

    // data generation, resampling and the search each get their own stream
    let mut data_rng = StdRng::seed_from_u64(seed);
    let rng = Rc::new(RefCell::new(StdRng::seed_from_u64(seed.wrapping_add(1))));
    let mut search_rng = StdRng::seed_from_u64(seed.wrapping_add(2));

    let data = synth::wine_set_2(DATASET_SIZE, &mut data_rng)?;

    let builder = EstimatorBuilder::new();
    let estimator = builder.build(&spec.estimator)?;
    let validator = builder.build_validator(&spec.cross_validation)?;

    let baseline = validator.cross_validate(&Knn::new(3), &data, &mut *rng.borrow_mut())?;
    let mse = validator.cross_validate(estimator.as_ref(), &data, &mut *rng.borrow_mut())?;
    info!("cross-validated mse: 3-nn baseline {baseline:.2}, configured estimator {mse:.2}");

    let query = array![99.0, 20.0, 10.0, 750.0];
    let p = probability(&data, query.view(), 40.0, 80.0, 5, WeightFn::default())?;
    info!("P(40 <= price <= 80 | {query}) = {p:.3}");

    let density = distribution::probability_density(
        &data,
        query.view(),
        200.0,
        5.0,
        5,
        WeightFn::default(),
        5.0,
    )?;
    if let Some((price, _)) = density.iter().copied().max_by(|a, b| a.1.total_cmp(&b.1)) {
        info!("most likely price bucket starts at {price}");
    }

    let domain = builder.build_domain(&spec.domain)?;
    ensure!(
        domain.dims() == data.dim(),
        "the search domain has {} dimensions but the dataset has {} attributes",
        domain.dims(),
        data.dim()
    );

    let cost_validator = builder.build_cost_validator(&spec.cost)?;
    let cost =
        CostFunction::with_validator(estimator.as_ref(), &data, cost_validator, Rc::clone(&rng));

    let unscaled = vec![1.0; data.dim()];
    let mut best = (cost.cost(&unscaled)?, unscaled);
    info!("unscaled cost {:.2}", best.0);

    for i in 0..SEARCH_ITERS {
        let candidate = domain.sample(&mut search_rng)?;
        let value = cost.cost(&candidate)?;
        debug!("iteration {i}: {candidate:?} -> {value:.2}");

        if value < best.0 {
            best = (value, candidate);
            info!("iteration {i}: new best cost {:.2} at {:?}", best.0, best.1);
        }
    }

    info!("best scale {:?} with cost {:.2}", best.1, best.0);
    Ok(())
}
