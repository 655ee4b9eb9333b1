mod alignment;
mod cli;
mod error;
mod hits;
mod io;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::cli::Cli;
use crate::pipeline::{CollateConfig, Collator};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging, RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let config: CollateConfig = cli.into();
    let summary = Collator::new(".", config).run()?;
    info!(
        "Collated {} files into {} samples and {} subjects",
        summary.files, summary.samples, summary.subjects
    );

    Ok(())
}
