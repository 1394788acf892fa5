//! Fetch-and-write cycle orchestration.
//!
//! A cycle is strictly sequential: fetch papers, fetch repositories,
//! enrich both lists, write the snapshots. Nothing is shared between
//! cycles and a failed fetch aborts before anything reaches disk.

use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;

use crate::config::{Config, defaults};
use crate::fetch::{ArxivClient, GithubClient};
use crate::models::CycleMeta;
use crate::snapshot::SnapshotWriter;
use crate::summary;

/// Parameters for one fetch cycle.
#[derive(Debug, Clone)]
pub struct CycleOptions {
    /// Max number of arXiv results.
    pub arxiv_max: usize,

    /// Free-text keywords for the arXiv search (empty = none).
    pub arxiv_keywords: String,

    /// arXiv category filter.
    pub arxiv_category: String,

    /// Max number of GitHub repositories.
    pub github_max: usize,

    /// Free-text keywords for the GitHub search (empty = none).
    pub github_keywords: String,

    /// GitHub language qualifier (empty = none).
    pub github_language: String,
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            arxiv_max: defaults::MAX_RESULTS,
            arxiv_keywords: String::new(),
            arxiv_category: defaults::ARXIV_CATEGORY.to_string(),
            github_max: defaults::MAX_RESULTS,
            github_keywords: String::new(),
            github_language: String::new(),
        }
    }
}

/// Paths and counts produced by a completed cycle.
#[derive(Debug)]
pub struct CycleReport {
    /// Written arXiv snapshot.
    pub arxiv_path: PathBuf,

    /// Written GitHub snapshot.
    pub github_path: PathBuf,

    /// Written meta snapshot.
    pub meta_path: PathBuf,

    /// Papers in the arXiv snapshot.
    pub arxiv_count: usize,

    /// Repositories in the GitHub snapshot.
    pub github_count: usize,
}

/// Sequential driver over the two API clients and the snapshot writer.
pub struct Agent {
    arxiv: ArxivClient,
    github: GithubClient,
    writer: SnapshotWriter,
}

impl Agent {
    /// Build the clients and writer from the agent configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            arxiv: ArxivClient::new(config)?,
            github: GithubClient::new(config)?,
            writer: SnapshotWriter::new(config.data_dir.clone()),
        })
    }

    /// Run one fetch cycle and write the three snapshots.
    ///
    /// Both fetches complete before any file is written, so a failed
    /// repository fetch leaves no partial output on disk.
    ///
    /// # Errors
    ///
    /// Surfaces the first fetch or write failure; the caller decides
    /// whether the polling loop continues.
    pub async fn run_cycle(&self, opts: &CycleOptions) -> anyhow::Result<CycleReport> {
        let started = Instant::now();
        let stamp = Utc::now();

        let mut papers = self
            .arxiv
            .search(&opts.arxiv_category, &opts.arxiv_keywords, opts.arxiv_max)
            .await?;
        for paper in &mut papers {
            summary::enrich_paper(paper);
        }
        tracing::info!(count = papers.len(), category = %opts.arxiv_category, "fetched arXiv papers");

        let mut repos = self
            .github
            .search_repositories(&opts.github_keywords, &opts.github_language, opts.github_max)
            .await?;
        for repo in &mut repos {
            summary::enrich_repository(repo);
        }
        tracing::info!(count = repos.len(), authenticated = self.github.has_token(), "fetched GitHub repositories");

        let arxiv_path = self.writer.write(stamp, "arxiv", &papers)?;
        let github_path = self.writer.write(stamp, "github", &repos)?;

        let meta = CycleMeta {
            generated_at: stamp,
            arxiv_count: papers.len(),
            github_count: repos.len(),
            elapsed_secs: started.elapsed().as_secs_f64(),
        };
        let meta_path = self.writer.write(stamp, "meta", &meta)?;

        tracing::info!(
            arxiv = %arxiv_path.display(),
            github = %github_path.display(),
            "snapshots written"
        );

        Ok(CycleReport {
            arxiv_path,
            github_path,
            meta_path,
            arxiv_count: meta.arxiv_count,
            github_count: meta.github_count,
        })
    }

    /// Fetch one paper by arXiv id and write a single-entry snapshot.
    ///
    /// # Errors
    ///
    /// Surfaces fetch and write failures unmodified.
    pub async fn run_single(&self, arxiv_id: &str) -> anyhow::Result<PathBuf> {
        let stamp = Utc::now();

        let mut paper = self.arxiv.fetch_by_id(arxiv_id).await?;
        summary::enrich_paper(&mut paper);

        let tag = format!("arxiv_single_{arxiv_id}");
        let path = self.writer.write(stamp, &tag, &[paper])?;

        tracing::info!(path = %path.display(), "saved single-paper snapshot");
        Ok(path)
    }
}
