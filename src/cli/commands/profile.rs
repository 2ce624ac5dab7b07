//! Composite artist page command.

use tokio::runtime::Runtime;

use crate::catalog::{ArtistProfile, CatalogApi};
use crate::error::ResultExt;

use super::lookup::render_releases;
use super::require_id;

/// Load and print the full artist page
pub fn cmd_profile<T: CatalogApi>(rt: &Runtime, api: &T, id: &str) -> anyhow::Result<()> {
    let id = require_id(id)?;
    rt.block_on(async {
        eprintln!("Loading artist {} (three paced requests)...", id);
        let profile = ArtistProfile::load(api, id)
            .await
            .with_context(format!("loading artist {}", id))?;
        print!("{}", render_profile(&profile));
        anyhow::Ok(())
    })
}

pub(crate) fn render_profile(profile: &ArtistProfile) -> String {
    let artist = &profile.artist;
    let mut out = format!("{}\n", artist.name);
    if let Some(d) = artist.disambiguation.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("{}\n", d));
    }
    let badges = profile.badges();
    if !badges.is_empty() {
        out.push_str(&format!("[{}]\n", badges.join("] [")));
    }

    out.push_str("\n== Overview ==\n");
    out.push_str(&format!("{}\n", profile.about()));
    if !profile.latest_releases().is_empty() {
        out.push_str("\nLatest releases:\n");
        for release in profile.latest_releases() {
            match &release.date {
                Some(date) => out.push_str(&format!("  {} ({})\n", release.title, date)),
                None => out.push_str(&format!("  {}\n", release.title)),
            }
        }
    }
    let links = profile.links();
    if !links.is_empty() {
        out.push_str("\nLinks:\n");
        for (kind, url) in links {
            out.push_str(&format!("  {}: {}\n", kind, url.resource));
        }
    }

    out.push_str("\n== Releases ==\n");
    let list = crate::catalog::musicbrainz::dto::ReleaseList {
        release_count: profile.releases.len() as u32,
        release_offset: 0,
        releases: profile.releases.clone(),
    };
    out.push_str(&render_releases(&list));

    out.push_str("\n== Artist DNA ==\n");
    let connections = profile.connections();
    if connections.is_empty() {
        out.push_str("No artist connections recorded.\n");
    } else {
        for (rel, other) in connections {
            let arrow = if rel.direction.as_deref() == Some("backward") {
                "<-"
            } else {
                "->"
            };
            out.push_str(&format!("  {} {} {}\n", arrow, rel.relation_type, other.name));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::musicbrainz::dto::{Artist, ArtistRef, Relation, Release};
    use crate::catalog::traits::mocks::MockCatalog;
    use crate::catalog::MetadataError;

    fn profile() -> ArtistProfile {
        ArtistProfile {
            artist: Artist {
                id: "m1".to_string(),
                name: "Massive Attack".to_string(),
                artist_type: Some("Group".to_string()),
                country: Some("GB".to_string()),
                ..Default::default()
            },
            releases: vec![Release {
                id: "r1".to_string(),
                title: "Mezzanine".to_string(),
                date: Some("1998-04-20".to_string()),
                ..Default::default()
            }],
            relationships: vec![Relation {
                relation_type: "member of band".to_string(),
                direction: Some("backward".to_string()),
                artist: Some(ArtistRef {
                    id: "t1".to_string(),
                    name: "Tricky".to_string(),
                    disambiguation: None,
                }),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_render_profile_sections() {
        let text = render_profile(&profile());
        assert!(text.starts_with("Massive Attack\n[Group] [GB]\n"));
        assert!(text.contains("== Overview =="));
        assert!(text.contains("  Mezzanine (1998-04-20)"));
        assert!(text.contains("== Releases =="));
        assert!(text.contains("== Artist DNA =="));
        assert!(text.contains("<- member of band Tricky"));
    }

    #[test]
    fn test_render_profile_without_connections() {
        let mut p = profile();
        p.relationships.clear();
        p.releases.clear();
        let text = render_profile(&p);
        assert!(text.contains("No artist connections recorded."));
        assert!(text.contains("No releases found for this artist."));
        assert!(!text.contains("Latest releases:"));
    }

    #[test]
    fn test_cmd_profile_error_stops_page() {
        let rt = Runtime::new().unwrap();
        let mock = MockCatalog::with_error(MetadataError::Network("offline".to_string()));
        let err = cmd_profile(&rt, &mock, "m1").unwrap_err();
        assert!(format!("{:#}", err).contains("loading artist m1"));
        assert_eq!(mock.calls().len(), 1);
    }
}
