//! Artist profile: the data behind the artist detail view.
//!
//! Loading runs three lookups strictly one after another (artist with URL
//! relations, releases, relationships); the shared pacer spaces them out.
//! If any lookup fails the whole load fails, matching how the view shows
//! an error banner instead of partial data.

use super::error::MetadataError;
use super::musicbrainz::dto::{Artist, ArtistRef, Relation, RelationTarget, Release, UrlRef};
use super::musicbrainz::{DEFAULT_RELEASE_LIMIT, Include};
use super::traits::CatalogApi;

/// Number of releases shown in the overview's "latest releases" block
pub const LATEST_RELEASES: usize = 4;

/// Everything the detail view renders for one artist
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistProfile {
    pub artist: Artist,
    pub releases: Vec<Release>,
    /// Relationship edges from the `artist-rels` lookup
    pub relationships: Vec<Relation>,
}

impl ArtistProfile {
    /// Fetch artist, releases and relationships in sequence.
    pub async fn load<T: CatalogApi + ?Sized>(api: &T, mbid: &str) -> Result<Self, MetadataError> {
        tracing::info!("Loading artist profile {}", mbid);

        let artist = api.get_artist(mbid, &[Include::UrlRels]).await?;
        let releases = api
            .get_artist_releases(mbid, DEFAULT_RELEASE_LIMIT, 0)
            .await?
            .releases;
        let relationships = api.get_artist_relationships(mbid).await?.relations;

        tracing::debug!(
            "Profile {} loaded: {} releases, {} relationships",
            mbid,
            releases.len(),
            relationships.len()
        );

        Ok(Self {
            artist,
            releases,
            relationships,
        })
    }

    /// Short tags shown under the name: type, country, life-span
    pub fn badges(&self) -> Vec<String> {
        let mut badges = Vec::new();
        let tags = [&self.artist.artist_type, &self.artist.country];
        for tag in tags.into_iter().flatten().filter(|t| !t.is_empty()) {
            badges.push(tag.clone());
        }
        if let Some(label) = self.artist.life_span.as_ref().and_then(|s| s.label()) {
            badges.push(label);
        }
        badges
    }

    /// Overview text; falls back to a stock sentence when there is no disambiguation
    pub fn about(&self) -> &str {
        match self.artist.disambiguation.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "No detailed information available for this artist.",
        }
    }

    /// First few releases in upstream order
    pub fn latest_releases(&self) -> &[Release] {
        &self.releases[..self.releases.len().min(LATEST_RELEASES)]
    }

    /// External links from the artist's URL relations
    pub fn links(&self) -> Vec<(&str, &UrlRef)> {
        self.artist
            .relations
            .iter()
            .filter_map(|rel| match rel.target() {
                RelationTarget::Url(url) => Some((rel.relation_type.as_str(), url)),
                _ => None,
            })
            .collect()
    }

    /// Artist-to-artist connections
    pub fn connections(&self) -> Vec<(&Relation, &ArtistRef)> {
        self.relationships
            .iter()
            .filter_map(|rel| match rel.target() {
                RelationTarget::Artist(artist) => Some((rel, artist)),
                _ => None,
            })
            .collect()
    }
}
