//! Artist search view data.

use super::error::MetadataError;
use super::musicbrainz::dto::{Artist, ArtistSearchResults};
use super::traits::CatalogApi;

/// One row in the search results list
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRow {
    pub id: String,
    pub name: String,
    pub disambiguation: Option<String>,
    pub artist_type: Option<String>,
    pub country: Option<String>,
    pub life_span: Option<String>,
}

impl From<&Artist> for SearchRow {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            disambiguation: artist.disambiguation.clone().filter(|d| !d.is_empty()),
            artist_type: artist.artist_type.clone(),
            country: artist.country.clone(),
            life_span: artist.life_span.as_ref().and_then(|s| s.label()),
        }
    }
}

/// Outcome of a search. Zero matches is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    NoResults,
    Found {
        /// Total matches upstream
        total: u32,
        rows: Vec<SearchRow>,
    },
}

impl From<&ArtistSearchResults> for SearchOutcome {
    fn from(results: &ArtistSearchResults) -> Self {
        if results.artists.is_empty() {
            return SearchOutcome::NoResults;
        }
        SearchOutcome::Found {
            total: results.count,
            rows: results.artists.iter().map(SearchRow::from).collect(),
        }
    }
}

/// Run a search and map it to view rows.
///
/// Blank queries short-circuit to [`SearchOutcome::NoResults`] without a request.
pub async fn search<T: CatalogApi + ?Sized>(
    api: &T,
    query: &str,
    limit: u32,
    offset: u32,
) -> Result<SearchOutcome, MetadataError> {
    if query.trim().is_empty() {
        return Ok(SearchOutcome::NoResults);
    }
    let results = api.search_artists(query, limit, offset).await?;
    Ok(SearchOutcome::from(&results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::musicbrainz::dto::LifeSpan;
    use crate::catalog::traits::mocks::MockCatalog;

    fn artist(id: &str, name: &str) -> Artist {
        Artist {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_rows_keep_upstream_order() {
        let mock = MockCatalog {
            search: Some(ArtistSearchResults {
                count: 120,
                artists: vec![artist("2", "Low"), artist("1", "Low Roar"), artist("3", "Lowlife")],
                ..Default::default()
            }),
            ..Default::default()
        };

        let outcome = search(&mock, "low", 3, 0).await.unwrap();

        match outcome {
            SearchOutcome::Found { total, rows } => {
                assert_eq!(total, 120);
                let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["2", "1", "3"]);
            }
            SearchOutcome::NoResults => panic!("expected results"),
        }
    }

    #[tokio::test]
    async fn test_empty_results_are_not_an_error() {
        let mock = MockCatalog::default();
        let outcome = search(&mock, "zzzzqqq", 10, 0).await.unwrap();
        assert_eq!(outcome, SearchOutcome::NoResults);
    }

    #[tokio::test]
    async fn test_failure_is_not_empty_results() {
        let mock = MockCatalog::with_error(MetadataError::status(500, b"boom"));
        let result = search(&mock, "low", 10, 0).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_blank_query_skips_request() {
        let mock = MockCatalog::default();
        let outcome = search(&mock, "   ", 10, 0).await.unwrap();
        assert_eq!(outcome, SearchOutcome::NoResults);
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_query_is_sent_verbatim() {
        let mock = MockCatalog::default();
        let _ = search(&mock, "  artist:\"The The\" ", 10, 0).await.unwrap();
        assert_eq!(mock.calls(), vec!["search_artists   artist:\"The The\"  10 0"]);
    }

    #[test]
    fn test_row_from_artist() {
        let a = Artist {
            disambiguation: Some(String::new()),
            artist_type: Some("Person".to_string()),
            life_span: Some(LifeSpan {
                begin: Some("1946-01-08".to_string()),
                end: Some("2016-01-10".to_string()),
                ended: Some(true),
            }),
            ..artist("db", "David Bowie")
        };
        let row = SearchRow::from(&a);
        assert_eq!(row.disambiguation, None);
        assert_eq!(row.artist_type.as_deref(), Some("Person"));
        assert_eq!(row.life_span.as_deref(), Some("1946-01-08 - 2016-01-10"));
    }
}
