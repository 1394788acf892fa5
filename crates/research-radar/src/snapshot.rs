//! Timestamped JSON snapshot files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{SnapshotError, SnapshotResult};

/// Filename timestamp layout: UTC, second resolution, path-safe.
const STAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%SZ";

/// Writes snapshot files under a fixed data directory.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    data_dir: PathBuf,
}

impl SnapshotWriter {
    /// Create a writer rooted at `data_dir`. The directory is created
    /// lazily on the first write.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    /// The directory snapshots land in.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Serialize `records` to `<stamp>_<tag>.json` under the data directory.
    ///
    /// A second call with the same stamp and tag overwrites; the polling
    /// interval is measured in tens of seconds, so a same-second collision
    /// is accepted.
    ///
    /// # Errors
    ///
    /// Returns error when the directory cannot be created, the records do
    /// not serialize, or the file write fails.
    pub fn write<T>(
        &self,
        stamp: DateTime<Utc>,
        tag: &str,
        records: &T,
    ) -> SnapshotResult<PathBuf>
    where
        T: Serialize + ?Sized,
    {
        fs::create_dir_all(&self.data_dir)
            .map_err(|source| SnapshotError::CreateDir { path: self.data_dir.clone(), source })?;

        let path = self.data_dir.join(snapshot_filename(stamp, tag));
        let json = serde_json::to_vec_pretty(records)?;

        fs::write(&path, json)
            .map_err(|source| SnapshotError::Write { path: path.clone(), source })?;

        Ok(path)
    }
}

/// Build the `<stamp>_<tag>.json` filename for a snapshot.
#[must_use]
pub fn snapshot_filename(stamp: DateTime<Utc>, tag: &str) -> String {
    format!("{}_{tag}.json", stamp.format(STAMP_FORMAT))
}
