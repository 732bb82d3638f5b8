//! Integration tests for the fare estimator

use farecast::model::{
    load_model, FareEstimator, FlightQuery, InvalidInputError, LinearFareModel, ModelArtifact,
    ModelLoadError,
};
use std::path::Path;

fn write_artifact(
    dir: &Path,
    intercept: f64,
    duration_coef: f64,
    stops_coef: f64,
) -> std::path::PathBuf {
    let path = dir.join("model.json");
    let model = LinearFareModel::new(intercept, duration_coef, stops_coef).unwrap();
    ModelArtifact::from_model(&model, "INR").save(&path, true).unwrap();
    path
}

#[test]
fn test_known_coefficients_from_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), 100.0, 2.0, 50.0);

    let (model, _) = load_model(&path).unwrap();
    let prediction = model.estimate(&FlightQuery::new(180, 1)).unwrap();
    assert_eq!(prediction.amount, 100.0 + 2.0 * 180.0 + 50.0 * 1.0);
    assert_eq!(prediction.amount, 510.0);
}

#[test]
fn test_boundary_scenarios() {
    let dir = tempfile::tempdir().unwrap();
    let (model, _) = load_model(write_artifact(dir.path(), 100.0, 2.0, 50.0)).unwrap();

    assert!(model.estimate(&FlightQuery::new(30, 0)).is_ok());
    assert!(model.estimate(&FlightQuery::new(600, 2)).is_ok());
    assert!(matches!(
        model.estimate(&FlightQuery::new(29, 0)),
        Err(InvalidInputError::DurationOutOfRange { value: 29, .. })
    ));
    assert!(matches!(
        model.estimate(&FlightQuery::new(180, 3)),
        Err(InvalidInputError::StopsOutOfRange { value: 3, .. })
    ));
}

#[test]
fn test_deterministic_across_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), 2846.53, 18.42, 3127.85);

    let (first, _) = load_model(&path).unwrap();
    let (second, _) = load_model(&path).unwrap();
    let query = FlightQuery::new(455, 2);

    let a = first.estimate(&query).unwrap().amount;
    let b = first.estimate(&query).unwrap().amount;
    let c = second.estimate(&query).unwrap().amount;
    assert_eq!(a.to_bits(), b.to_bits());
    assert_eq!(a.to_bits(), c.to_bits());
}

#[test]
fn test_bundled_model_covers_domain() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("models/flight_price_model.json");
    let (model, artifact) = load_model(path).unwrap();
    assert_eq!(artifact.currency, "INR");

    for duration in (30..=600).step_by(10) {
        for stops in 0..=2 {
            let amount = model.estimate(&FlightQuery::new(duration, stops)).unwrap().amount;
            assert!(amount.is_finite());
            assert!(amount >= 0.0);
        }
    }
}

#[test]
fn test_missing_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_model(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ModelLoadError::Io { .. })));
}

#[test]
fn test_corrupt_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, b"\x80\x04\x95joblib pickle").unwrap();
    assert!(matches!(load_model(&path), Err(ModelLoadError::Parse(_))));

    std::fs::write(
        &path,
        r#"{"format_version": 1, "model_type": "linear_regression""#,
    )
    .unwrap();
    assert!(matches!(load_model(&path), Err(ModelLoadError::Parse(_))));
}

#[test]
fn test_artifact_with_fares_beyond_decimal_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(
        &path,
        r#"{
            "format_version": 1,
            "model_type": "linear_regression",
            "currency": "INR",
            "features": ["Duration_mins", "Stops_Num"],
            "intercept": 1e29,
            "coefficients": [0.0, 0.0]
        }"#,
    )
    .unwrap();

    assert!(matches!(
        load_model(&path),
        Err(ModelLoadError::FareOutOfRange { .. })
    ));
}

#[test]
fn test_artifact_that_quotes_negative_fares() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(
        &path,
        r#"{
            "format_version": 1,
            "model_type": "linear_regression",
            "currency": "INR",
            "features": ["Duration_mins", "Stops_Num"],
            "intercept": -500.0,
            "coefficients": [1.0, 10.0]
        }"#,
    )
    .unwrap();

    assert!(matches!(
        load_model(&path),
        Err(ModelLoadError::NegativeFare { .. })
    ));
}
