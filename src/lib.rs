//! farecast: flight fare estimator
//!
//! This library provides the core components for:
//! - Fare prediction from flight duration and stop count
//! - Versioned model artifacts with schema validation
//! - Static-rate currency conversion
//! - Display-ready fare quotes
//! - Command-line front-end
//! - Logging and metrics

pub mod cli;
pub mod config;
pub mod currency;
pub mod model;
pub mod quote;
pub mod telemetry;
