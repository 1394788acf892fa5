//! Per-cycle bookkeeping written alongside the record snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one completed fetch cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleMeta {
    /// Timestamp the cycle started at (also embedded in the filenames).
    pub generated_at: DateTime<Utc>,

    /// Number of papers written to the arXiv snapshot.
    pub arxiv_count: usize,

    /// Number of repositories written to the GitHub snapshot.
    pub github_count: usize,

    /// Wall-clock duration of the cycle in seconds.
    pub elapsed_secs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_meta_roundtrip() {
        let meta = CycleMeta {
            generated_at: "2026-08-01T10:00:00Z".parse().unwrap(),
            arxiv_count: 100,
            github_count: 5,
            elapsed_secs: 1.25,
        };
        let json = serde_json::to_string(&meta).unwrap();
        let back: CycleMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, back);
    }
}
