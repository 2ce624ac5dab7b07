//! MusicFinder - a music encyclopedia for the terminal.
//!
//! Searches MusicBrainz for artists and shows artist pages with releases
//! and relationships. All requests are paced to respect the MusicBrainz
//! rate limit.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging (stderr, so command output stays pipeable)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("music_finder=info".parse()?))
        .init();

    // Try to run a CLI command
    if cli::run_command(&args)? {
        return Ok(());
    }

    // No command specified, show the landing text
    print!("{}", cli::landing_text());
    Ok(())
}
