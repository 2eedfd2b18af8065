use deepnet::prelude::*;
use ndarray::array;
use std::fs;
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("deepnet-{}-{}", std::process::id(), name));
    path
}

#[test]
fn save_then_load_reproduces_predictions() {
    let x: Matrix = array![[0.0, 0.0, 1.0, 1.0], [0.0, 1.0, 0.0, 1.0]];
    let y: Matrix = array![[0.0, 0.0, 0.0, 1.0]];
    let mut net = Network::new(2, &[4, 1], Objective::Binary).unwrap();
    let config = TrainingConfig {
        iterations: 200,
        alpha: 0.05,
        verbose: false,
        step: 50,
    };
    net.train(&x, &y, &config).unwrap();

    let path = scratch_path("roundtrip.json");
    net.save_to_path(path.to_str().unwrap()).unwrap();
    let restored = Network::load_from_path(path.to_str().unwrap()).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(restored.depth(), net.depth());
    assert_eq!(restored.input_dim(), net.input_dim());
    assert_eq!(restored.objective(), net.objective());
    for (original, loaded) in net.layers().iter().zip(restored.layers().iter()) {
        assert_eq!(original.weights(), loaded.weights());
        assert_eq!(original.bias(), loaded.bias());
    }

    let (p1, c1) = net.evaluate(&x, &y).unwrap();
    let (p2, c2) = restored.evaluate(&x, &y).unwrap();
    assert_eq!(p1, p2);
    assert_eq!(c1, c2);
}

#[test]
fn save_appends_the_model_extension() {
    let net = Network::new(2, &[1], Objective::Binary).unwrap();
    let base = scratch_path("extension-check");

    net.save_to_path(base.to_str().unwrap()).unwrap();

    let expected = scratch_path("extension-check.json");
    assert!(expected.exists());
    assert!(!base.exists());
    fs::remove_file(&expected).ok();
}

#[test]
fn load_fails_gracefully_on_missing_file() {
    let result = Network::load_from_path("/nonexistent/deepnet-model.json");
    assert!(matches!(result, Err(IoError::StdIoError(_))));
}

#[test]
fn load_fails_gracefully_on_corrupt_file() {
    let path = scratch_path("corrupt.json");
    fs::write(&path, b"{ not valid json").unwrap();

    let result = Network::load_from_path(path.to_str().unwrap());
    fs::remove_file(&path).ok();
    assert!(matches!(result, Err(IoError::JsonError(_))));
}

#[test]
fn load_rejects_unknown_format_versions() {
    let path = scratch_path("version.json");
    fs::write(
        &path,
        br#"{"format_version": 99, "input_dim": 2, "objective": "Binary", "layers": [{"weights": [[0.0, 0.0]], "bias": [0.0]}]}"#,
    )
    .unwrap();

    let result = Network::load_from_path(path.to_str().unwrap());
    fs::remove_file(&path).ok();
    assert!(result.is_err());
}

#[test]
fn load_rejects_inconsistent_layer_shapes() {
    let path = scratch_path("shapes.json");
    // second layer's fan-in does not match the first layer's node count
    fs::write(
        &path,
        br#"{"format_version": 1, "input_dim": 2, "objective": "Binary", "layers": [{"weights": [[0.1, 0.2]], "bias": [0.0]}, {"weights": [[0.1, 0.2, 0.3]], "bias": [0.0]}]}"#,
    )
    .unwrap();

    let result = Network::load_from_path(path.to_str().unwrap());
    fs::remove_file(&path).ok();
    assert!(result.is_err());
}
