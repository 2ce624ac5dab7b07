//! MusicBrainz API Data Transfer Objects
//!
//! These types mirror what the MusicBrainz web service returns for the
//! artist search, artist lookup and release browse endpoints. Every
//! descriptive field is optional: MusicBrainz omits keys freely and
//! parsing must never fail because of a missing one.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API

use serde::{Deserialize, Serialize};

/// Artist, as returned by search and lookup
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    /// MusicBrainz artist ID
    pub id: String,
    /// Official artist name
    pub name: String,
    /// Sort name (e.g., "Beatles, The")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    /// Artist type (Person, Group, Orchestra, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub artist_type: Option<String>,
    /// ISO 3166-1 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Disambiguation comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_span: Option<LifeSpan>,
    /// Search relevance (0-100), only present in search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    /// Relationship edges, only present when a `*-rels` include was requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
}

/// Active period of an artist. Dates may be partial (YYYY or YYYY-MM).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LifeSpan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended: Option<bool>,
}

impl LifeSpan {
    /// Human label like `1960 - 1970` or `1991 - Present`.
    ///
    /// Returns `None` when the begin date is unknown. Empty strings count as unknown.
    pub fn label(&self) -> Option<String> {
        let begin = self.begin.as_deref().filter(|b| !b.is_empty())?;
        let end = self
            .end
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or("Present");
        Some(format!("{} - {}", begin, end))
    }
}

/// A relationship edge between an artist and some other entity
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Relation {
    /// Relationship type (e.g. "member of band", "official homepage")
    #[serde(rename = "type")]
    pub relation_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    /// "forward" or "backward"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Kind of entity on the other end ("artist", "url", "label", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended: Option<bool>,
    /// Relationship attributes (e.g. "guitar", "original")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    /// Target artist for artist-artist relationships
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<ArtistRef>,
    /// Target URL for url relationships
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<UrlRef>,
}

/// Typed view of the entity on the other end of a [`Relation`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelationTarget<'a> {
    Artist(&'a ArtistRef),
    Url(&'a UrlRef),
    /// Target kinds we don't model; carries the raw `target-type`
    Other(&'a str),
}

impl Relation {
    /// Resolve which entity this relation points to.
    pub fn target(&self) -> RelationTarget<'_> {
        if let Some(artist) = &self.artist {
            return RelationTarget::Artist(artist);
        }
        if let Some(url) = &self.url {
            return RelationTarget::Url(url);
        }
        RelationTarget::Other(self.target_type.as_deref().unwrap_or("unknown"))
    }
}

/// Artist reference embedded in a relation
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<String>,
}

/// URL reference embedded in a relation
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UrlRef {
    pub id: String,
    pub resource: String,
}

/// Release (a specific issue of an album/single/EP)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Release {
    /// MusicBrainz release ID
    pub id: String,
    pub title: String,
    /// Release status (Official, Bootleg, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_group: Option<ReleaseGroup>,
    /// Media (discs), present because browse requests `inc=media`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<Medium>,
}

/// Release group (the same album across all editions)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Primary type (Album, Single, EP, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<String>,
    /// Secondary types (Compilation, Live, ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_types: Vec<String>,
}

/// Medium (disc) within a release
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Medium {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Format (CD, Vinyl, Digital Media, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_count: Option<u32>,
}

/// Response of `GET /artist?query=...`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArtistSearchResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Total matches upstream (not the page size)
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Response of `GET /release?artist=...`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseList {
    #[serde(default)]
    pub release_count: u32,
    #[serde(default)]
    pub release_offset: u32,
    #[serde(default)]
    pub releases: Vec<Release>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
