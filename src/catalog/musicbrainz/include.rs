//! Artist lookup includes (`inc=` values)
//!
//! MusicBrainz separates include tags with a literal `+`. The separator
//! must not be percent-encoded, so the joined value is appended to the URL
//! as-is (every tag is a fixed ASCII token).

use std::fmt;
use std::str::FromStr;

/// Sub-queries that can be attached to an artist lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Include {
    UrlRels,
    ArtistRels,
    ReleaseRels,
    ReleaseGroupRels,
    RecordingRels,
    WorkRels,
    LabelRels,
    Aliases,
    Tags,
    Genres,
    Ratings,
}

impl Include {
    pub const ALL: [Include; 11] = [
        Include::UrlRels,
        Include::ArtistRels,
        Include::ReleaseRels,
        Include::ReleaseGroupRels,
        Include::RecordingRels,
        Include::WorkRels,
        Include::LabelRels,
        Include::Aliases,
        Include::Tags,
        Include::Genres,
        Include::Ratings,
    ];

    /// Wire name used in the `inc` parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Include::UrlRels => "url-rels",
            Include::ArtistRels => "artist-rels",
            Include::ReleaseRels => "release-rels",
            Include::ReleaseGroupRels => "release-group-rels",
            Include::RecordingRels => "recording-rels",
            Include::WorkRels => "work-rels",
            Include::LabelRels => "label-rels",
            Include::Aliases => "aliases",
            Include::Tags => "tags",
            Include::Genres => "genres",
            Include::Ratings => "ratings",
        }
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Include {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Include::ALL
            .into_iter()
            .find(|inc| inc.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Include::ALL.iter().map(|i| i.as_str()).collect();
                format!("unknown include '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Join include tags into a single `inc` value, e.g. `url-rels+artist-rels`.
///
/// Order is preserved and an empty slice yields an empty string.
pub fn join(includes: &[Include]) -> String {
    includes
        .iter()
        .map(|inc| inc.as_str())
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_join_two_tags() {
        assert_eq!(
            join(&[Include::UrlRels, Include::ArtistRels]),
            "url-rels+artist-rels"
        );
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join(&[]), "");
    }

    #[test]
    fn test_parse_roundtrip_names() {
        for inc in Include::ALL {
            assert_eq!(inc.as_str().parse::<Include>(), Ok(inc));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bogus-rels".parse::<Include>().unwrap_err();
        assert!(err.contains("bogus-rels"));
        assert!(err.contains("url-rels"));
    }

    proptest! {
        #[test]
        fn joined_value_splits_back_into_tags(idx in proptest::collection::vec(0usize..11, 0..8)) {
            let tags: Vec<Include> = idx.iter().map(|&i| Include::ALL[i]).collect();
            let joined = join(&tags);

            let split: Vec<&str> = if joined.is_empty() {
                vec![]
            } else {
                joined.split('+').collect()
            };
            let expected: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
            prop_assert_eq!(split, expected);
        }
    }
}
