// SPDX-License-Identifier: Apache-2.0

//! Starred repository records.
//!
//! A [`RepoRecord`] is one entry of the snapshot written by the fetch tool.
//! Optional fields carry their documented defaults at deserialization time,
//! so downstream code never substitutes values at the access site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::difficulty::{Difficulty, classify};

/// Unix timestamp of `2020-01-01T00:00:00Z`, used when `updated_at` is absent.
const DEFAULT_UPDATED_AT_SECS: i64 = 1_577_836_800;

/// A starred repository as cached in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    /// Repository name.
    pub name: String,
    /// Full repository name in "owner/name" format.
    pub full_name: String,
    /// Primary programming language, if GitHub detected one.
    #[serde(default)]
    pub language: Option<String>,
    /// Stargazer count.
    #[serde(default)]
    pub stars: u64,
    /// Fork count.
    #[serde(default)]
    pub forks: u64,
    /// Repository size in kilobytes.
    #[serde(default)]
    pub size: u64,
    /// Whether the repository is archived.
    #[serde(default)]
    pub archived: bool,
    /// Last update time.
    #[serde(default = "default_updated_at")]
    pub updated_at: DateTime<Utc>,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// License name.
    #[serde(default)]
    pub license: Option<String>,
    /// Browser URL.
    #[serde(default)]
    pub url: Option<String>,
    /// HTTPS clone URL.
    #[serde(default)]
    pub clone_url: Option<String>,
    /// Repository topics, in the order GitHub returns them.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,
}

impl RepoRecord {
    /// Returns the difficulty tier derived from stars and size.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        classify(self)
    }

    /// Case-insensitive exact match against the primary language.
    ///
    /// Repositories without a language never match.
    #[must_use]
    pub fn language_matches(&self, language: &str) -> bool {
        self.language
            .as_deref()
            .is_some_and(|lang| lang.to_lowercase() == language.to_lowercase())
    }
}

fn default_updated_at() -> DateTime<Utc> {
    DateTime::from_timestamp(DEFAULT_UPDATED_AT_SECS, 0).unwrap_or_default()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_use_defaults() {
        let record: RepoRecord =
            serde_json::from_str(r#"{"name": "ripgrep", "full_name": "BurntSushi/ripgrep"}"#)
                .expect("minimal record should parse");

        assert_eq!(record.language, None);
        assert_eq!(record.stars, 0);
        assert_eq!(record.forks, 0);
        assert_eq!(record.size, 0);
        assert!(!record.archived);
        assert_eq!(record.updated_at.to_rfc3339(), "2020-01-01T00:00:00+00:00");
        assert!(record.topics.is_empty());
        assert!(record.url.is_none());
    }

    #[test]
    fn null_fields_are_treated_as_absent() {
        let record: RepoRecord = serde_json::from_str(
            r#"{
                "name": "dotfiles",
                "full_name": "me/dotfiles",
                "language": null,
                "description": null,
                "license": null,
                "topics": null
            }"#,
        )
        .expect("null optionals should parse");

        assert_eq!(record.language, None);
        assert_eq!(record.description, None);
        assert!(record.topics.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let record: RepoRecord = serde_json::from_str(
            r#"{"name": "a", "full_name": "o/a", "watchers": 12, "owner": {"login": "o"}}"#,
        )
        .expect("extra fields should be ignored");
        assert_eq!(record.name, "a");
    }

    #[test]
    fn unparseable_timestamp_is_rejected() {
        let result: Result<RepoRecord, _> = serde_json::from_str(
            r#"{"name": "a", "full_name": "o/a", "updated_at": "last tuesday"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn language_match_is_case_insensitive() {
        let record = fixtures::repo("a", Some("Rust"), 0, 0);
        assert!(record.language_matches("rust"));
        assert!(record.language_matches("RUST"));
        assert!(!record.language_matches("Go"));
    }

    #[test]
    fn missing_language_never_matches() {
        let record = fixtures::repo("a", None, 0, 0);
        assert!(!record.language_matches(""));
        assert!(!record.language_matches("Rust"));
    }
}
