//! CLI command definitions and dispatch.
//!
//! Each group of subcommands lives in its own submodule:
//! - `lookup`: the raw catalog queries (search, artist, releases, relations)
//! - `profile`: the composite artist detail view
//! - `config`: inspecting and creating the config file

mod config;
mod lookup;
mod profile;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::catalog::{Include, MusicBrainzClient};
use crate::catalog::musicbrainz::{DEFAULT_RELEASE_LIMIT, DEFAULT_SEARCH_LIMIT};
use crate::config::{self as app_config, Config};
use crate::error::{self, ResultExt};

pub use config::{cmd_config_init, cmd_config_path, cmd_config_show};
pub use lookup::{cmd_artist, cmd_relations, cmd_releases, cmd_search};
pub use profile::cmd_profile;

/// MusicFinder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the one in the OS config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Contact string for the User-Agent (email or URL)
    #[arg(long, global = true, env = "MUSIC_FINDER_CONTACT")]
    pub contact: Option<String>,

    /// MusicBrainz API root (e.g. a local mirror)
    #[arg(long, global = true, env = "MUSIC_FINDER_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search for artists by name
    Search {
        /// Search text (Lucene syntax is passed through)
        query: String,
        /// Number of results
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: u32,
        /// Results to skip
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
        /// Print the raw payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up an artist by MBID
    Artist {
        /// MusicBrainz artist ID
        id: String,
        /// Include to request (repeatable), e.g. --inc url-rels --inc artist-rels
        #[arg(long = "inc")]
        includes: Vec<Include>,
        /// Print the raw payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// List an artist's releases
    Releases {
        /// MusicBrainz artist ID
        id: String,
        /// Number of releases
        #[arg(short, long, default_value_t = DEFAULT_RELEASE_LIMIT)]
        limit: u32,
        /// Releases to skip
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
        /// Print the raw payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show an artist's relationships to other artists
    Relations {
        /// MusicBrainz artist ID
        id: String,
        /// Print the raw payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// Full artist page: overview, releases, and connections
    Profile {
        /// MusicBrainz artist ID
        id: String,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was specified
/// (meaning the landing text should be shown).
pub fn run_command(cli: &Cli) -> anyhow::Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    let config = resolve_config(cli);

    match command {
        Commands::Search {
            query,
            limit,
            offset,
            json,
        } => {
            let rt = Runtime::new()?;
            let client = build_client(&config)?;
            cmd_search(&rt, &client, query, *limit, *offset, *json)?;
        }
        Commands::Artist { id, includes, json } => {
            let rt = Runtime::new()?;
            let client = build_client(&config)?;
            cmd_artist(&rt, &client, id, includes, *json)?;
        }
        Commands::Releases {
            id,
            limit,
            offset,
            json,
        } => {
            let rt = Runtime::new()?;
            let client = build_client(&config)?;
            cmd_releases(&rt, &client, id, *limit, *offset, *json)?;
        }
        Commands::Relations { id, json } => {
            let rt = Runtime::new()?;
            let client = build_client(&config)?;
            cmd_relations(&rt, &client, id, *json)?;
        }
        Commands::Profile { id } => {
            let rt = Runtime::new()?;
            let client = build_client(&config)?;
            cmd_profile(&rt, &client, id)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => cmd_config_path(cli.config.as_deref())?,
            ConfigAction::Show => cmd_config_show(&config)?,
            ConfigAction::Init { force } => cmd_config_init(cli.config.as_deref(), *force)?,
        },
    }

    Ok(true)
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Load the config file and apply command-line overrides
pub(crate) fn resolve_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => app_config::load_from(path),
        None => app_config::load(),
    };
    apply_overrides(&mut config, cli.contact.as_deref(), cli.base_url.as_deref());
    config
}

fn apply_overrides(config: &mut Config, contact: Option<&str>, base_url: Option<&str>) {
    if let Some(contact) = contact {
        config.musicbrainz.contact = contact.to_string();
    }
    if let Some(base_url) = base_url {
        config.musicbrainz.base_url = base_url.to_string();
    }
}

/// Build the MusicBrainz client from the effective config
pub(crate) fn build_client(config: &Config) -> error::Result<MusicBrainzClient> {
    tracing::debug!("Using MusicBrainz at {}", config.musicbrainz.base_url);
    MusicBrainzClient::new(config.musicbrainz.clone()).with_context("creating MusicBrainz client")
}

/// Reject blank identifiers before they turn into `/artist/` requests
pub(crate) fn require_id(id: &str) -> error::Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(error::Error::invalid_input("artist ID must not be empty"));
    }
    Ok(id)
}

/// Text shown when no command is given
pub fn landing_text() -> String {
    let mut out = String::new();
    out.push_str("MusicFinder\n");
    out.push_str("Next-Gen Music Encyclopedia\n\n");
    out.push_str("  Artist DNA         Explore influence maps and connections between artists\n");
    out.push_str("  Release Timelines  Visualize artist discographies and release history\n");
    out.push_str("  Credits Explorer   Discover who worked on your favorite music\n\n");
    out.push_str("Get started:\n");
    out.push_str("  music-finder search \"<artist name>\"\n");
    out.push_str("  music-finder profile <artist-id>\n\n");
    out.push_str("Run with --help for all commands.\n");
    out
}
