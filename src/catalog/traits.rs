//! Trait definition for the metadata lookups the views consume.
//!
//! Views depend on [`CatalogApi`] rather than the concrete client so they
//! can be tested with canned data.
//!
//! # Example
//!
//! ```ignore
//! use music_finder::catalog::traits::CatalogApi;
//!
//! async fn show<T: CatalogApi>(api: &T, id: &str) {
//!     let artist = api.get_artist(id, &[Include::UrlRels]).await?;
//! }
//! ```

use async_trait::async_trait;

use super::error::MetadataError;
use super::musicbrainz::Include;
use super::musicbrainz::dto::{Artist, ArtistSearchResults, ReleaseList};

/// The four catalog queries.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Search artists by free text.
    async fn search_artists(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ArtistSearchResults, MetadataError>;

    /// Look up one artist, optionally expanded.
    async fn get_artist(&self, mbid: &str, includes: &[Include])
    -> Result<Artist, MetadataError>;

    /// Browse an artist's releases.
    async fn get_artist_releases(
        &self,
        artist_mbid: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ReleaseList, MetadataError>;

    /// Look up an artist with its artist relationships.
    async fn get_artist_relationships(&self, mbid: &str) -> Result<Artist, MetadataError>;
}

#[async_trait]
impl CatalogApi for super::musicbrainz::MusicBrainzClient {
    async fn search_artists(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ArtistSearchResults, MetadataError> {
        self.search_artists(query, limit, offset).await
    }

    async fn get_artist(
        &self,
        mbid: &str,
        includes: &[Include],
    ) -> Result<Artist, MetadataError> {
        self.get_artist(mbid, includes).await
    }

    async fn get_artist_releases(
        &self,
        artist_mbid: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ReleaseList, MetadataError> {
        self.get_artist_releases(artist_mbid, limit, offset).await
    }

    async fn get_artist_relationships(&self, mbid: &str) -> Result<Artist, MetadataError> {
        self.get_artist_relationships(mbid).await
    }
}
