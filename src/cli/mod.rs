//! Command-line interface for music-finder.
//!
//! This module provides CLI commands for searching artists, looking up
//! artists, releases and relationships, and managing the config file.

mod commands;

pub use commands::{Cli, Commands, ConfigAction, landing_text, run_command};
