//! MusicBrainz API integration
//!
//! Artist search, artist lookup (with relationship includes) and release
//! browsing against the MusicBrainz web service. All calls share one pacer
//! so the client stays under the 1 request/second limit.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
pub mod include;
pub mod transport;
mod client;
mod pacing;

pub use client::{DEFAULT_RELEASE_LIMIT, DEFAULT_SEARCH_LIMIT, MusicBrainzClient};
pub use include::Include;
pub use pacing::Pacer;
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
