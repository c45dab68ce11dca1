use std::{cell::RefCell, rc::Rc};

use ndarray::array;
use rand::{SeedableRng, rngs::StdRng};

use knn_eval::{
    CostFunction, CrossValidator, Dataset, Estimator, EstimatorBuilder, Knn, KnnErr,
    PipelineSpec, Sample, ScaleVector, WeightFn, WeightedKnn, data::synth, evaluate,
    probability, rescale, split,
};

fn toy() -> Dataset {
    Dataset::new([
        Sample::new(vec![1.0, 1.0], 10.0),
        Sample::new(vec![2.0, 2.0], 20.0),
        Sample::new(vec![10.0, 10.0], 100.0),
    ])
    .unwrap()
}

#[test]
fn toy_dataset_scenarios() {
    let data = toy();
    let query = array![1.5, 1.5];

    let plain = Knn::new(2).estimate(&data, query.view()).unwrap();
    assert_eq!(plain, 15.0);

    // both rows sit at the same distance so their subtract weights are equal
    let weighted = WeightedKnn::new(2, WeightFn::subtract(1.0).unwrap())
        .estimate(&data, query.view())
        .unwrap();
    assert!((weighted - 15.0).abs() < 1e-4);

    let p = probability(&data, query.view(), 0.0, 15.0, 2, WeightFn::default()).unwrap();
    assert!((p - 0.5).abs() < 1e-6);
}

#[test]
fn weighted_knn_beats_the_global_mean() {
    let data = synth::wine_set_1(300, &mut StdRng::seed_from_u64(1)).unwrap();
    let validator = CrossValidator::new(30, 0.1).unwrap();

    let global = Knn::new(data.len() / 2);
    let local = WeightedKnn::new(5, WeightFn::inverse(1.0, 0.1).unwrap());

    let global_mse = validator
        .cross_validate(&global, &data, &mut StdRng::seed_from_u64(42))
        .unwrap();
    let local_mse = validator
        .cross_validate(&local, &data, &mut StdRng::seed_from_u64(42))
        .unwrap();

    assert!(local_mse < global_mse, "local {local_mse} global {global_mse}");
}

#[test]
fn muting_irrelevant_attributes_lowers_the_cost() {
    let data = synth::wine_set_2(200, &mut StdRng::seed_from_u64(3)).unwrap();
    let knn = Knn::new(3);
    let rng = Rc::new(RefCell::new(StdRng::seed_from_u64(42)));
    let validator = CrossValidator::new(30, 0.1).unwrap();
    let cost = CostFunction::with_validator(&knn, &data, validator, rng);

    // the aisle has no effect on the price
    let unscaled = cost.cost(&[1.0, 1.0, 1.0, 1.0]).unwrap();
    let tuned = cost.cost(&[1.0, 1.0, 0.0, 1.0]).unwrap();

    assert!(tuned < unscaled, "tuned {tuned} unscaled {unscaled}");
}

#[test]
fn split_then_evaluate_with_a_built_estimator() {
    let json = r#"{
        "estimator": {
            "weighted_knn": { "k": 3, "weight_fn": { "gaussian": { "sigma": 5.0 } } }
        }
    }"#;
    let spec = PipelineSpec::from_json(json).unwrap();
    let estimator = EstimatorBuilder::new().build(&spec.estimator).unwrap();

    let data = synth::wine_set_3(200, &mut StdRng::seed_from_u64(5)).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let parts = split(&data, 0.2, &mut rng).unwrap();

    let mse = evaluate(estimator.as_ref(), &parts.train, &parts.test).unwrap();
    assert!(mse.is_finite() && mse > 0.0);
}

#[test]
fn rescaled_data_keeps_labels_and_errors_surface() {
    let data = toy();
    let scale = ScaleVector::new(vec![0.5, 2.0]).unwrap();
    let scaled = rescale(&data, &scale).unwrap();

    assert_eq!(scaled.results(), data.results());
    assert_eq!(scaled.get(2).unwrap().input().to_vec(), vec![5.0, 20.0]);

    let err = Knn::new(1)
        .estimate(&data, array![1.0, 2.0, 3.0].view())
        .unwrap_err();
    assert!(matches!(err, KnnErr::DimensionMismatch { .. }));
}
