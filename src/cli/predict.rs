//! Predict command implementation

use super::{load_estimator, OutputFormat};
use crate::config::Config;
use crate::model::{FareEstimator, FlightQuery};
use crate::quote::FareQuote;
use crate::telemetry::{self, CounterMetric};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Flight duration in minutes (30-600)
    #[arg(short, long, default_value = "180")]
    pub duration: u32,

    /// Number of stops (0-2)
    #[arg(short, long, default_value = "1")]
    pub stops: u32,

    /// Also show the fare in this currency (repeatable)
    #[arg(long = "convert", value_name = "CURRENCY")]
    pub convert: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl PredictArgs {
    pub fn execute(&self, config: &Config, model_override: Option<&PathBuf>) -> anyhow::Result<()> {
        let start = Instant::now();
        let (model, _) = load_estimator(config, model_override)?;
        let converter = config.currency.converter()?;

        let query = FlightQuery::new(self.duration, self.stops);
        let prediction = model.estimate(&query).context("invalid flight query")?;

        let quote = FareQuote::new(
            query,
            prediction,
            &config.currency.base,
            config.currency.display_precision,
        )?
        .with_conversions(&converter, &self.convert)
        .inspect_err(|_| telemetry::increment(CounterMetric::ConversionFailures))?;

        tracing::info!(
            quote_id = %quote.id,
            duration_minutes = query.duration_minutes,
            stop_count = query.stop_count,
            amount = %quote.amount,
            "Fare predicted"
        );

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&quote)?),
            OutputFormat::Table => {
                println!("Predicted Ticket Price ({}): {}", quote.currency, quote.amount);
                println!("{}", quote.summary);
                for money in &quote.conversions {
                    println!("  {:>4}: {}", money.currency, money.amount);
                }
                println!("Quote: {}", quote.id);
            }
        }

        telemetry::record_command_latency("predict", start.elapsed());
        Ok(())
    }
}
