//! `binmeta` command-line entry point.
//!
//! Run with: `binmeta meta.json --classes hashes.bintypes.txt --fields hashes.binfields.txt`

use binmeta_cli::{Cli, run};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let summary = run(&cli)?;
    if summary.skipped > 0 {
        tracing::warn!("{} classes could not be generated", summary.skipped);
    }
    Ok(())
}
