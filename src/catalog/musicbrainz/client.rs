//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to 1 req/sec.
//! Every request goes through the shared [`Pacer`] before it is sent.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::dto::{Artist, ArtistSearchResults, ReleaseList};
use super::include::{self, Include};
use super::pacing::Pacer;
use super::transport::{ApiRequest, ReqwestTransport, Transport};
use crate::catalog::error::MetadataError;
use crate::config::MusicBrainzConfig;

/// Default page size for artist search
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Default page size for release browsing
pub const DEFAULT_RELEASE_LIMIT: u32 = 100;

/// Includes always requested when browsing an artist's releases
const RELEASE_INCLUDES: &str = "release-groups+media";

/// MusicBrainz API client
pub struct MusicBrainzClient {
    transport: Arc<dyn Transport>,
    config: MusicBrainzConfig,
    user_agent: String,
    pacer: Pacer,
}

impl MusicBrainzClient {
    /// Create a client that talks to the network through reqwest
    pub fn new(config: MusicBrainzConfig) -> Result<Self, MetadataError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(config: MusicBrainzConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            user_agent: config.user_agent(),
            pacer: Pacer::new(config.pacing_interval()),
            config,
        }
    }

    pub fn config(&self) -> &MusicBrainzConfig {
        &self.config
    }

    /// Search for artists by name.
    ///
    /// The query is passed to MusicBrainz verbatim (Lucene syntax allowed).
    pub async fn search_artists(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ArtistSearchResults, MetadataError> {
        let params = [
            ("query", urlencoding::encode(query).into_owned()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];

        self.get_json("/artist", &params).await.inspect_err(|e| {
            tracing::error!("Error searching artists for {:?}: {}", query, e);
        })
    }

    /// Look up an artist by MBID, optionally expanded with includes.
    ///
    /// An empty include list requests the base artist only.
    pub async fn get_artist(
        &self,
        mbid: &str,
        includes: &[Include],
    ) -> Result<Artist, MetadataError> {
        let path = format!("/artist/{}", urlencoding::encode(mbid));
        let inc = include::join(includes);
        let params: Vec<(&str, String)> = if inc.is_empty() {
            vec![]
        } else {
            vec![("inc", inc)]
        };

        self.get_json(&path, &params).await.inspect_err(|e| {
            tracing::error!("Error fetching artist {}: {}", mbid, e);
        })
    }

    /// Browse releases credited to an artist, with release groups and media.
    pub async fn get_artist_releases(
        &self,
        artist_mbid: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ReleaseList, MetadataError> {
        let params = [
            ("artist", urlencoding::encode(artist_mbid).into_owned()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("inc", RELEASE_INCLUDES.to_string()),
        ];

        self.get_json("/release", &params).await.inspect_err(|e| {
            tracing::error!("Error fetching releases for artist {}: {}", artist_mbid, e);
        })
    }

    /// Look up an artist together with its artist-artist relationships.
    pub async fn get_artist_relationships(&self, mbid: &str) -> Result<Artist, MetadataError> {
        let path = format!("/artist/{}", urlencoding::encode(mbid));
        let params = [("inc", include::join(&[Include::ArtistRels]))];

        self.get_json(&path, &params).await.inspect_err(|e| {
            tracing::error!("Error fetching relationships for artist {}: {}", mbid, e);
        })
    }

    /// Build the full URL: base, path, `fmt`, then the operation's params.
    ///
    /// Param values must already be encoded.
    fn build_url(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}{}?fmt={}",
            self.config.base_url.trim_end_matches('/'),
            path,
            urlencoding::encode(&self.config.format)
        );
        for (name, value) in params {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(value);
        }
        url
    }

    /// Pace, send the request and parse the response
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, MetadataError> {
        let url = self.build_url(path, params);
        let request = ApiRequest::new(url)
            .header("User-Agent", self.user_agent.as_str())
            .header("Accept", "application/json");

        self.pacer.wait().await;

        tracing::debug!("GET {}", request.url);
        let response = self.transport.get(request).await?;

        if !response.is_success() {
            return Err(MetadataError::status(response.status, &response.body));
        }

        serde_json::from_slice(&response.body).map_err(|e| MetadataError::Parse(e.to_string()))
    }
}
