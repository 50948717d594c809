use std::process;

use clap::Parser;
use log::{error, info};
use tracing_subscriber::EnvFilter;

use vcover::{Comparator, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::parse();
    let batch = config.batch();
    info!(
        "comparing {} graphs from {} with the {:?} backend",
        batch.len(),
        config.graph_dir.display(),
        config.backend
    );

    let comparator = Comparator::new(config.graph_provider(), config.lp_solver());
    let report = comparator.run_batch(&batch);
    report.save(&config.output)?;
    info!("report written to {}", config.output.display());

    let failures = report.failures();
    if failures > 0 {
        error!("{} of {} graphs failed", failures, report.len());
        process::exit(1);
    }
    Ok(())
}
