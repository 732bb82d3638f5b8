//! Batch command implementation

use super::{load_estimator, OutputFormat};
use crate::config::Config;
use crate::model::{FareEstimator, FlightQuery};
use crate::quote::FareQuote;
use crate::telemetry;
use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of `{duration_minutes, stop_count}` objects
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Read a batch of queries from a JSON file
pub fn read_queries(path: &Path) -> anyhow::Result<Vec<FlightQuery>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let queries: Vec<FlightQuery> =
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(queries)
}

impl BatchArgs {
    pub fn execute(&self, config: &Config, model_override: Option<&PathBuf>) -> anyhow::Result<()> {
        let start = Instant::now();
        let (model, _) = load_estimator(config, model_override)?;

        let queries = read_queries(&self.input)?;
        if queries.is_empty() {
            anyhow::bail!("no flight queries in {}", self.input.display());
        }
        tracing::info!(count = queries.len(), "Batch prediction requested");

        let predictions = model.estimate_batch(&queries).context("invalid flight query")?;
        let quotes: Vec<FareQuote> = queries
            .into_iter()
            .zip(predictions)
            .map(|(query, prediction)| {
                FareQuote::new(
                    query,
                    prediction,
                    &config.currency.base,
                    config.currency.display_precision,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&quotes)?),
            OutputFormat::Table => {
                println!("{:>8} {:>6} {:>14}", "Minutes", "Stops", config.currency.base);
                for quote in &quotes {
                    println!(
                        "{:>8} {:>6} {:>14}",
                        quote.query.duration_minutes, quote.query.stop_count, quote.amount
                    );
                }
            }
        }

        tracing::info!(count = quotes.len(), "Batch prediction complete");
        telemetry::record_command_latency("batch", start.elapsed());
        Ok(())
    }
}
