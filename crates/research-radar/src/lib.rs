//! research-radar
//!
//! A polling agent over two public search APIs: the arXiv paper index and
//! GitHub repository search. Each cycle fetches the latest papers and the
//! most-starred repositories, attaches locally computed summaries, and
//! persists both lists as timestamped JSON snapshot files.
//!
//! # Features
//!
//! - **One-shot or polling**: run a single cycle, or loop on a fixed interval
//! - **No hidden state**: every cycle is an independent fetch-then-write pass
//! - **Honest failures**: rate limits and API errors surface unmodified, never retried
//!
//! # Example
//!
//! ```no_run
//! use research_radar::agent::{Agent, CycleOptions};
//! use research_radar::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let agent = Agent::new(&config)?;
//!     let report = agent.run_cycle(&CycleOptions::default()).await?;
//!     println!("wrote {} papers", report.arxiv_count);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod snapshot;
pub mod summary;

pub use agent::{Agent, CycleOptions, CycleReport};
pub use config::Config;
pub use error::{ClientError, SnapshotError};
pub use fetch::{ArxivClient, GithubClient};
pub use snapshot::SnapshotWriter;
