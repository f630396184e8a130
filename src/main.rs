mod cli;

use anyhow::Context;
use aquaplan::{report, snapshot, AllocationReport, EngineConfig, Planner};
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = EngineConfig::load(cli.config).context("Failed to load configuration")?;

    match cli.command {
        Commands::Check => {
            config.validate()?;
            println!("Configuration OK");
            println!(
                "  weights: yield {:.2} / health {:.2} / moisture {:.2} / drought risk {:.2}",
                config.weights.yield_weight,
                config.weights.health_weight,
                config.weights.moisture_weight,
                config.weights.drought_risk_weight
            );
            Ok(())
        }
        Commands::Allocate {
            snapshot: snapshot_path,
            available,
            output,
        } => {
            let fields = snapshot::load(&snapshot_path)
                .with_context(|| format!("Failed to load snapshot {:?}", snapshot_path))?;
            tracing::debug!(
                "Running allocation cycle: {} fields, {} m3 available",
                fields.len(),
                available
            );

            let planner = Planner::new(config)?;
            let batch = planner.run(&fields, available)?;

            print!("{}", report::render_summary(&batch));

            if let Some(output_path) = output {
                let report = AllocationReport::from_batch(&batch);
                std::fs::write(&output_path, report.to_json()?)
                    .with_context(|| format!("Failed to write report {:?}", output_path))?;
                println!();
                println!("Report written to {}", output_path.display());
            }
            Ok(())
        }
    }
}
