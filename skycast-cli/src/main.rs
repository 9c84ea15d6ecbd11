//! Binary crate for the `skycast` terminal application.
//!
//! This crate focuses on:
//! - Parsing the entry arguments
//! - Interactive prompts (query entry, candidate selection)
//! - Rendering lookup states in the terminal

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
