//! End-to-end integration tests

use clap::Parser;
use farecast::cli::{load_estimator, Cli, Commands, OutputFormat};
use farecast::config::Config;
use farecast::model::{FareEstimator, FlightQuery};
use farecast::quote::FareQuote;
use rust_decimal_macros::dec;
use std::path::PathBuf;

fn bundled_model() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models/flight_price_model.json")
}

fn config_with_model(path: &std::path::Path) -> Config {
    let toml = format!(
        r#"
        [model]
        path = "{}"

        [currency]
        base = "INR"
        display_precision = 2

        [currency.rates]
        USD = 0.012
        "#,
        path.display()
    );
    toml::from_str(&toml).unwrap()
}

#[test]
fn test_config_example_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config.toml.example");
    let config = Config::load(path).unwrap();
    assert_eq!(config.model.path, PathBuf::from("models/flight_price_model.json"));
    assert_eq!(config.currency.base, "INR");
}

#[test]
fn test_predict_quote_with_conversion() {
    let config = config_with_model(&bundled_model());
    let (model, _) = load_estimator(&config, None).unwrap();
    let converter = config.currency.converter().unwrap();

    let query = FlightQuery::new(180, 1);
    let prediction = model.estimate(&query).unwrap();
    let quote = FareQuote::new(query, prediction, "INR", 2)
        .unwrap()
        .with_conversions(&converter, &["USD"])
        .unwrap();

    // 2846.53 + 18.42 * 180 + 3127.85
    assert_eq!(quote.amount, dec!(9289.98));
    assert_eq!(quote.conversions[0].amount, dec!(111.48));
}

#[test]
fn test_model_override_wins() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_model(&dir.path().join("absent.json"));

    assert!(load_estimator(&config, None).is_err());
    assert!(load_estimator(&config, Some(&bundled_model())).is_ok());
}

#[test]
fn test_currency_mismatch_rejected() {
    let mut config = config_with_model(&bundled_model());
    config.currency.base = "USD".to_string();
    let err = load_estimator(&config, None).unwrap_err();
    assert!(err.to_string().contains("does not match"));
}

#[test]
fn test_cli_parses_predict() {
    let cli = Cli::parse_from([
        "farecast", "predict", "--duration", "240", "--stops", "2", "--convert", "USD", "--convert",
        "EUR", "--format", "json",
    ]);
    match cli.command {
        Commands::Predict(args) => {
            assert_eq!(args.duration, 240);
            assert_eq!(args.stops, 2);
            assert_eq!(args.convert, vec!["USD", "EUR"]);
            assert_eq!(args.format, OutputFormat::Json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert_eq!(cli.config, "config.toml");
}

#[test]
fn test_cli_predict_defaults() {
    let cli = Cli::parse_from(["farecast", "predict"]);
    match cli.command {
        Commands::Predict(args) => {
            assert_eq!(args.duration, 180);
            assert_eq!(args.stops, 1);
            assert!(args.convert.is_empty());
            assert_eq!(args.format, OutputFormat::Table);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_cli_global_model_flag() {
    let cli = Cli::parse_from(["farecast", "info", "--model", "other.json"]);
    assert_eq!(cli.model, Some(PathBuf::from("other.json")));
    assert!(matches!(cli.command, Commands::Info(_)));
}

#[test]
fn test_cli_init_model_negative_coefficient() {
    let cli = Cli::parse_from([
        "farecast",
        "init-model",
        "--intercept",
        "-100",
        "--duration-coef",
        "5",
        "--stops-coef",
        "0",
    ]);
    match cli.command {
        Commands::InitModel(args) => {
            assert_eq!(args.intercept, -100.0);
            assert!(args.artifact().is_ok());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_batch_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("queries.json");
    std::fs::write(
        &input,
        r#"[
            {"duration_minutes": 30, "stop_count": 0},
            {"duration_minutes": 700, "stop_count": 0}
        ]"#,
    )
    .unwrap();

    let config = config_with_model(&bundled_model());
    let cli = Cli::parse_from(["farecast", "batch", "--input", input.to_str().unwrap()]);
    match cli.command {
        Commands::Batch(args) => {
            let err = args.execute(&config, None).unwrap_err();
            assert!(format!("{err:#}").contains("query 2"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
