//! Prediction metrics

use std::time::Duration;

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Model artifacts loaded
    ModelLoads,
    /// Model artifacts rejected at startup
    ModelLoadFailures,
    /// Quotes that failed currency conversion
    ConversionFailures,
}

impl CounterMetric {
    fn name(self) -> &'static str {
        match self {
            CounterMetric::ModelLoads => "farecast_model_loads_total",
            CounterMetric::ModelLoadFailures => "farecast_model_load_failures_total",
            CounterMetric::ConversionFailures => "farecast_conversion_failures_total",
        }
    }
}

/// Increment a counter
pub fn increment(metric: CounterMetric) {
    let name = metric.name();
    metrics::counter!(name).increment(1);
    tracing::trace!(metric = name, "Incremented counter");
}

/// Record how long a command took end to end
pub fn record_command_latency(command: &'static str, duration: Duration) {
    metrics::histogram!("farecast_command_latency_ms", "command" => command)
        .record(duration.as_secs_f64() * 1000.0);
    tracing::debug!(
        command,
        value_ms = duration.as_millis(),
        "Recording latency"
    );
}
