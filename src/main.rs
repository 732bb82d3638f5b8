use clap::Parser;
use farecast::cli::{Cli, Commands};
use farecast::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::embedded_default()?
        }
    };

    // Initialize telemetry
    farecast::telemetry::init_telemetry(&config.telemetry)?;

    let model_override = cli.model.as_ref();

    match cli.command {
        Commands::Predict(args) => args.execute(&config, model_override)?,
        Commands::Batch(args) => args.execute(&config, model_override)?,
        Commands::Info(args) => args.execute(&config, model_override)?,
        Commands::InitModel(args) => {
            tracing::info!("Writing model artifact");
            args.execute()?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Model: {}",
                model_override.unwrap_or(&config.model.path).display()
            );
            println!(
                "  Currency: {} ({} dp)",
                config.currency.base, config.currency.display_precision
            );
            for (code, rate) in &config.currency.rates {
                println!("    1 {} = {} {}", config.currency.base, rate, code);
            }
            println!(
                "  Telemetry: level={}, format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
