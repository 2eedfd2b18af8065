use deepnet::prelude::*;
use ndarray::{Axis, array};

fn and_gate() -> (Matrix, Matrix) {
    let x: Matrix = array![[0.0, 0.0, 1.0, 1.0], [0.0, 1.0, 0.0, 1.0]];
    let y: Matrix = array![[0.0, 0.0, 0.0, 1.0]];
    (x, y)
}

#[test]
fn learns_the_and_gate_exactly() {
    let (x, y) = and_gate();
    let mut net = Network::new(2, &[3, 1], Objective::Binary).unwrap();
    let config = TrainingConfig {
        iterations: 5000,
        alpha: 0.05,
        verbose: false,
        step: 100,
    };

    let report = net.train(&x, &y, &config).unwrap();
    assert_eq!(report.predictions, y);
    assert!(report.cost < 0.5);
}

#[test]
fn cost_history_hits_every_reporting_boundary() {
    let (x, y) = and_gate();
    let mut net = Network::new(2, &[3, 1], Objective::Binary).unwrap();
    let config = TrainingConfig {
        iterations: 1000,
        alpha: 0.05,
        verbose: true,
        step: 100,
    };

    let report = net.train(&x, &y, &config).unwrap();
    assert_eq!(report.history.len(), 11);

    let iterations: Vec<usize> = report.history.iter().map(|&(i, _)| i).collect();
    assert_eq!(
        iterations,
        vec![0, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000]
    );
    assert_eq!(report.history.last().unwrap().1, report.cost);
}

#[test]
fn training_lowers_the_recorded_cost() {
    let (x, y) = and_gate();
    let mut net = Network::new(2, &[3, 1], Objective::Binary).unwrap();
    let config = TrainingConfig {
        iterations: 2000,
        alpha: 0.05,
        verbose: false,
        step: 100,
    };

    let report = net.train(&x, &y, &config).unwrap();
    let first = report.history.first().unwrap().1;
    let last = report.history.last().unwrap().1;
    assert!(last < first, "cost went from {} to {}", first, last);
}

#[test]
fn multiclass_training_separates_three_clusters() {
    let x: Matrix = array![
        [0.0, 0.1, 1.0, 0.9, 0.0, 0.1],
        [0.0, 0.1, 0.0, 0.1, 1.0, 0.9]
    ];
    let labels = [0usize, 0, 1, 1, 2, 2];
    let y = one_hot_encode(&labels, 3).unwrap();

    let mut net = Network::new(2, &[6, 3], Objective::Multiclass).unwrap();
    let config = TrainingConfig {
        iterations: 5000,
        alpha: 0.3,
        verbose: false,
        step: 500,
    };

    let report = net.train(&x, &y, &config).unwrap();

    // every prediction column is one-hot
    for col in report.predictions.axis_iter(Axis(1)) {
        assert_eq!(col.sum(), 1.0);
        assert!(col.iter().all(|&v| v == 0.0 || v == 1.0));
    }
    assert_eq!(one_hot_decode(&report.predictions), labels.to_vec());
    assert!(report.history.last().unwrap().1 < report.history.first().unwrap().1);
}

#[test]
fn evaluate_thresholds_binary_predictions() {
    // an untrained network already emits hard 0/1 predictions and a finite cost
    let (x, y) = and_gate();
    let net = Network::new(2, &[3, 1], Objective::Binary).unwrap();

    let (predictions, cost) = net.evaluate(&x, &y).unwrap();
    assert!(predictions.iter().all(|&p| p == 0.0 || p == 1.0));
    assert!(cost.is_finite() && cost >= 0.0);
}

#[test]
fn train_rejects_invalid_configs_without_touching_parameters() {
    let (x, y) = and_gate();
    let mut net = Network::new(2, &[3, 1], Objective::Binary).unwrap();
    let before = net.layers()[0].weights().clone();

    let bad_iterations = TrainingConfig {
        iterations: 0,
        ..TrainingConfig::default()
    };
    assert!(matches!(
        net.train(&x, &y, &bad_iterations),
        Err(ModelError::InvalidArgument(_))
    ));

    let bad_alpha = TrainingConfig {
        alpha: -0.1,
        ..TrainingConfig::default()
    };
    assert!(matches!(
        net.train(&x, &y, &bad_alpha),
        Err(ModelError::InvalidArgument(_))
    ));

    let bad_step = TrainingConfig {
        iterations: 50,
        alpha: 0.05,
        verbose: true,
        step: 100,
    };
    assert!(matches!(
        net.train(&x, &y, &bad_step),
        Err(ModelError::InvalidArgument(_))
    ));

    assert_eq!(net.layers()[0].weights(), &before);
}

#[test]
fn train_rejects_mismatched_batches() {
    let (x, y) = and_gate();
    let mut net = Network::new(2, &[3, 1], Objective::Binary).unwrap();
    let config = TrainingConfig {
        verbose: false,
        ..TrainingConfig::default()
    };

    // label count disagrees with the batch size
    let narrow_y: Matrix = array![[0.0, 1.0]];
    assert!(matches!(
        net.train(&x, &narrow_y, &config),
        Err(ModelError::ShapeMismatch(_))
    ));

    // label rows disagree with the output layer
    let tall_y: Matrix = array![[0.0, 0.0, 0.0, 1.0], [1.0, 1.0, 1.0, 0.0]];
    assert!(matches!(
        net.train(&x, &tall_y, &config),
        Err(ModelError::ShapeMismatch(_))
    ));

    // feature rows disagree with the input dimension
    let wide_x: Matrix = array![[0.0, 0.0, 1.0, 1.0]];
    assert!(matches!(
        net.train(&wide_x, &y, &config),
        Err(ModelError::ShapeMismatch(_))
    ));
}

#[test]
fn default_config_matches_documented_defaults() {
    let config = TrainingConfig::default();
    assert_eq!(config.iterations, 5000);
    assert_eq!(config.alpha, 0.05);
    assert!(config.verbose);
    assert_eq!(config.step, 100);
}
