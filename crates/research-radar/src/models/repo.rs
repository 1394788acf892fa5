//! Repository data model matching the GitHub search API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository entry from the GitHub search API.
///
/// The API reports star counts as `stargazers_count`; snapshots use the
/// shorter `stars` key, and the alias lets snapshot files round-trip
/// through the same struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Numeric repository id.
    pub id: i64,

    /// Owner-qualified name (e.g. "rust-lang/rust").
    pub full_name: String,

    /// Repository description, if set.
    #[serde(default)]
    pub description: Option<String>,

    /// Star count.
    #[serde(rename = "stars", alias = "stargazers_count")]
    pub stars: u64,

    /// Primary language, if detected.
    #[serde(default)]
    pub language: Option<String>,

    /// Repository page URL.
    pub html_url: String,

    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Local description-derived summary attached by the agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_summary: Option<String>,
}

/// One page of the GitHub repository search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoSearchPage {
    /// Total matches reported by the server.
    #[serde(default)]
    pub total_count: i64,

    /// Whether the server timed out and returned a partial result.
    #[serde(default)]
    pub incomplete_results: bool,

    /// Repositories in this page, ordered by the requested sort.
    #[serde(default)]
    pub items: Vec<Repository>,
}
