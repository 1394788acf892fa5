//! Paper data model matching the arXiv query API entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A research paper entry from the arXiv query API.
///
/// Immutable once fetched; held in memory only long enough to enrich and
/// serialize into a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Short arXiv identifier (e.g. "2301.01234").
    pub id: String,

    /// Paper title.
    pub title: String,

    /// Full abstract text.
    #[serde(default)]
    pub r#abstract: String,

    /// Author names in listed order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Submission timestamp.
    pub published: DateTime<Utc>,

    /// Primary category tag (e.g. "cs.LG").
    #[serde(default)]
    pub primary_category: String,

    /// Link to the PDF.
    #[serde(default)]
    pub pdf_url: Option<String>,

    /// First sentences of the abstract, attached before writing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_short: Option<String>,

    /// Term-frequency keywords, attached before writing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Local fallback summary attached by the agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_summary: Option<String>,
}

impl Paper {
    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }
}
