//! Music catalog lookups against MusicBrainz.
//!
//! # Architecture
//!
//! - **DTOs** (`musicbrainz/dto.rs`) - Exact API response shapes, all optional fields
//! - **Client** (`musicbrainz/client.rs`) - Paced HTTP client for the four queries
//! - **Transport** (`musicbrainz/transport.rs`) - HTTP seam, mocked in tests
//! - **Traits** (`traits.rs`) - [`CatalogApi`] so views can run against canned data
//! - **Views** (`search.rs`, `profile.rs`) - Data behind the search and artist pages
//!
//! # Usage
//!
//! ```ignore
//! use catalog::{MusicBrainzClient, ArtistProfile};
//!
//! let client = MusicBrainzClient::new(config.musicbrainz.clone())?;
//! let profile = ArtistProfile::load(&client, "a74b1b7f-71a5-4011-9441-d0b5e4122711").await?;
//! println!("{} ({} releases)", profile.artist.name, profile.releases.len());
//! ```

pub mod error;
pub mod musicbrainz;
pub mod profile;
pub mod search;
pub mod traits;

pub use error::MetadataError;
pub use musicbrainz::{Include, MusicBrainzClient};
pub use profile::ArtistProfile;
pub use search::{SearchOutcome, SearchRow};
pub use traits::CatalogApi;
