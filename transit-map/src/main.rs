use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use transit_map::batch::{self, RunConfig};

fn main() {
    // stdout carries the response document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::parse();

    if let Err(e) = batch::run(&config) {
        error!(error = %e, "run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
