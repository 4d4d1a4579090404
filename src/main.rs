//! Pollreader - prints the polling summary for a CSV file.
//!
//! Usage: `pollreader [PATH]`, PATH defaulting to `polling_data.csv` in the
//! working directory.

use anyhow::{Context, Result};
use pollreader::{logging, DataLoader, PollConfig, PollReport};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_DATA_FILE: &str = "polling_data.csv";

fn main() -> Result<()> {
    logging::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    let config = PollConfig::default();

    let dataset = DataLoader::load_csv(&path)
        .with_context(|| format!("Failed to load polling data from {}", path.display()))?;
    info!(records = dataset.len(), "computing summary");

    let report = PollReport::build(&dataset, &config).context("Failed to compute polling summary")?;
    print!("{report}");
    Ok(())
}
