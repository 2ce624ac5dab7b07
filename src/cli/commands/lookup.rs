//! Raw catalog query commands.

use tokio::runtime::Runtime;

use crate::catalog::musicbrainz::dto::{Artist, Relation, RelationTarget, ReleaseList};
use crate::catalog::search::{self, SearchOutcome};
use crate::catalog::{CatalogApi, Include};
use crate::error::ResultExt;

use super::require_id;

/// Search for artists and print one line per match
pub fn cmd_search<T: CatalogApi>(
    rt: &Runtime,
    api: &T,
    query: &str,
    limit: u32,
    offset: u32,
    json: bool,
) -> anyhow::Result<()> {
    rt.block_on(async {
        if json {
            let results = api
                .search_artists(query, limit, offset)
                .await
                .with_context("searching artists")?;
            println!("{}", serde_json::to_string_pretty(&results)?);
            return anyhow::Ok(());
        }

        let outcome = search::search(api, query, limit, offset)
            .await
            .with_context("searching artists")?;
        print!("{}", render_search(query, &outcome));
        anyhow::Ok(())
    })
}

/// Look up one artist
pub fn cmd_artist<T: CatalogApi>(
    rt: &Runtime,
    api: &T,
    id: &str,
    includes: &[Include],
    json: bool,
) -> anyhow::Result<()> {
    let id = require_id(id)?;
    rt.block_on(async {
        let artist = api
            .get_artist(id, includes)
            .await
            .with_context(format!("fetching artist {}", id))?;
        if json {
            println!("{}", serde_json::to_string_pretty(&artist)?);
        } else {
            print!("{}", render_artist(&artist));
        }
        anyhow::Ok(())
    })
}

/// List an artist's releases
pub fn cmd_releases<T: CatalogApi>(
    rt: &Runtime,
    api: &T,
    id: &str,
    limit: u32,
    offset: u32,
    json: bool,
) -> anyhow::Result<()> {
    let id = require_id(id)?;
    rt.block_on(async {
        let list = api
            .get_artist_releases(id, limit, offset)
            .await
            .with_context(format!("fetching releases for artist {}", id))?;
        if json {
            println!("{}", serde_json::to_string_pretty(&list)?);
        } else {
            print!("{}", render_releases(&list));
        }
        anyhow::Ok(())
    })
}

/// Show an artist's relationships
pub fn cmd_relations<T: CatalogApi>(
    rt: &Runtime,
    api: &T,
    id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let id = require_id(id)?;
    rt.block_on(async {
        let artist = api
            .get_artist_relationships(id)
            .await
            .with_context(format!("fetching relationships for artist {}", id))?;
        if json {
            println!("{}", serde_json::to_string_pretty(&artist)?);
        } else {
            println!("{}", artist.name);
            print!("{}", render_relations(&artist.relations));
        }
        anyhow::Ok(())
    })
}

// ============================================================================
// Rendering
// ============================================================================

pub(crate) fn render_search(query: &str, outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::NoResults => format!("No results found for \"{}\"\n", query),
        SearchOutcome::Found { total, rows } => {
            let mut out = format!(
                "Search results for \"{}\" ({} shown of {})\n\n",
                query,
                rows.len(),
                total
            );
            for row in rows {
                out.push_str(&format!("  {}", row.name));
                if let Some(d) = &row.disambiguation {
                    out.push_str(&format!(" ({})", d));
                }
                let tags: Vec<&str> = [row.artist_type.as_deref(), row.country.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect();
                if !tags.is_empty() {
                    out.push_str(&format!(" [{}]", tags.join(", ")));
                }
                if let Some(span) = &row.life_span {
                    out.push_str(&format!(" {}", span));
                }
                out.push_str(&format!("\n    id: {}\n", row.id));
            }
            out
        }
    }
}

pub(crate) fn render_artist(artist: &Artist) -> String {
    let mut out = format!("{}\n", artist.name);
    if let Some(d) = artist.disambiguation.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("  {}\n", d));
    }
    out.push_str(&format!("  ID:      {}\n", artist.id));
    if let Some(t) = &artist.artist_type {
        out.push_str(&format!("  Type:    {}\n", t));
    }
    if let Some(c) = &artist.country {
        out.push_str(&format!("  Country: {}\n", c));
    }
    if let Some(span) = artist.life_span.as_ref().and_then(|s| s.label()) {
        out.push_str(&format!("  Active:  {}\n", span));
    }
    if !artist.relations.is_empty() {
        out.push('\n');
        out.push_str(&render_relations(&artist.relations));
    }
    out
}

pub(crate) fn render_releases(list: &ReleaseList) -> String {
    if list.releases.is_empty() {
        return "No releases found for this artist.\n".to_string();
    }

    let mut out = format!(
        "Releases {}-{} of {}\n\n",
        list.release_offset.saturating_add(1),
        list.release_offset as usize + list.releases.len(),
        list.release_count
    );
    for release in &list.releases {
        out.push_str(&format!("  {}", release.title));
        if let Some(date) = &release.date {
            out.push_str(&format!(" ({})", date));
        }
        if let Some(kind) = release
            .release_group
            .as_ref()
            .and_then(|g| g.primary_type.as_deref())
        {
            out.push_str(&format!(" [{}]", kind));
        }
        out.push('\n');
    }
    out
}

pub(crate) fn render_relations(relations: &[Relation]) -> String {
    if relations.is_empty() {
        return "No relationships found.\n".to_string();
    }

    let mut out = String::new();
    for rel in relations {
        let target = match rel.target() {
            RelationTarget::Artist(a) => a.name.clone(),
            RelationTarget::Url(u) => u.resource.clone(),
            RelationTarget::Other(kind) => format!("<{}>", kind),
        };
        out.push_str(&format!("  {}: {}", rel.relation_type, target));
        match (&rel.begin, &rel.end) {
            (Some(b), Some(e)) => out.push_str(&format!(" ({} - {})", b, e)),
            (Some(b), None) => out.push_str(&format!(" ({} - )", b)),
            _ => {}
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::musicbrainz::dto::{ArtistRef, LifeSpan, Release, ReleaseGroup, UrlRef};
    use crate::catalog::search::SearchRow;
    use crate::catalog::traits::mocks::MockCatalog;
    use crate::catalog::MetadataError;

    #[test]
    fn test_render_no_results() {
        assert_eq!(
            render_search("xyz", &SearchOutcome::NoResults),
            "No results found for \"xyz\"\n"
        );
    }

    #[test]
    fn test_render_search_rows() {
        let outcome = SearchOutcome::Found {
            total: 42,
            rows: vec![SearchRow {
                id: "9c9f1380".to_string(),
                name: "Nirvana".to_string(),
                disambiguation: Some("90s US grunge band".to_string()),
                artist_type: Some("Group".to_string()),
                country: Some("US".to_string()),
                life_span: Some("1987 - 1994".to_string()),
            }],
        };
        let text = render_search("nirvana", &outcome);
        assert!(text.contains("(1 shown of 42)"));
        assert!(text.contains("Nirvana (90s US grunge band) [Group, US] 1987 - 1994"));
        assert!(text.contains("id: 9c9f1380"));
    }

    #[test]
    fn test_render_artist_skips_missing_fields() {
        let artist = Artist {
            id: "x".to_string(),
            name: "Aphex Twin".to_string(),
            ..Default::default()
        };
        let text = render_artist(&artist);
        assert!(text.contains("Aphex Twin"));
        assert!(!text.contains("Type:"));
        assert!(!text.contains("Active:"));
    }

    #[test]
    fn test_render_artist_with_life_span() {
        let artist = Artist {
            id: "x".to_string(),
            name: "Aphex Twin".to_string(),
            life_span: Some(LifeSpan {
                begin: Some("1971-08-18".to_string()),
                ..Default::default()
            }),
            relations: vec![Relation {
                relation_type: "soundcloud".to_string(),
                url: Some(UrlRef {
                    id: "u".to_string(),
                    resource: "https://soundcloud.com/aphex-twin-official".to_string(),
                }),
                ..Default::default()
            }],
            ..Default::default()
        };
        let text = render_artist(&artist);
        assert!(text.contains("Active:  1971-08-18 - Present"));
        assert!(text.contains("soundcloud: https://soundcloud.com/aphex-twin-official"));
    }

    #[test]
    fn test_render_releases() {
        let list = ReleaseList {
            release_count: 30,
            release_offset: 10,
            releases: vec![Release {
                id: "r".to_string(),
                title: "Kid A".to_string(),
                date: Some("2000-10-02".to_string()),
                release_group: Some(ReleaseGroup {
                    id: "rg".to_string(),
                    primary_type: Some("Album".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }],
        };
        let text = render_releases(&list);
        assert!(text.starts_with("Releases 11-11 of 30"));
        assert!(text.contains("Kid A (2000-10-02) [Album]"));

        assert_eq!(
            render_releases(&ReleaseList::default()),
            "No releases found for this artist.\n"
        );
    }

    #[test]
    fn test_render_releases_at_max_offset() {
        let list = ReleaseList {
            release_count: 1,
            release_offset: u32::MAX,
            releases: vec![Release {
                id: "r".to_string(),
                title: "Edge".to_string(),
                ..Default::default()
            }],
        };
        let text = render_releases(&list);
        assert!(text.starts_with(&format!("Releases {}-", u32::MAX)));
        assert!(text.contains("  Edge\n"));
    }

    #[test]
    fn test_render_relations() {
        let relations = vec![
            Relation {
                relation_type: "member of band".to_string(),
                begin: Some("1985".to_string()),
                artist: Some(ArtistRef {
                    id: "r".to_string(),
                    name: "Radiohead".to_string(),
                    disambiguation: None,
                }),
                ..Default::default()
            },
            Relation {
                relation_type: "recording contract".to_string(),
                target_type: Some("label".to_string()),
                ..Default::default()
            },
        ];
        let text = render_relations(&relations);
        assert!(text.contains("member of band: Radiohead (1985 - )"));
        assert!(text.contains("recording contract: <label>"));
    }

    #[test]
    fn test_cmd_artist_propagates_failure() {
        let rt = Runtime::new().unwrap();
        let mock = MockCatalog::with_error(MetadataError::status(503, b"slow down"));
        let result = cmd_artist(&rt, &mock, "abc", &[], false);
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("fetching artist abc"));
    }

    #[test]
    fn test_cmd_releases_rejects_blank_id() {
        let rt = Runtime::new().unwrap();
        let mock = MockCatalog::default();
        assert!(cmd_releases(&rt, &mock, "  ", 100, 0, false).is_err());
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn test_cmd_search_runs_against_mock() {
        let rt = Runtime::new().unwrap();
        let mock = MockCatalog::default();
        cmd_search(&rt, &mock, "portishead", 5, 0, false).unwrap();
        assert_eq!(mock.calls(), vec!["search_artists portishead 5 0"]);
    }
}
