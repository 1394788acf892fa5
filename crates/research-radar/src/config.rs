//! Configuration for the research-radar agent.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the arXiv query API.
    pub const ARXIV_API: &str = "https://export.arxiv.org/api/query";

    /// Base URL for the GitHub REST API.
    pub const GITHUB_API: &str = "https://api.github.com";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// GitHub caps search pages at 100 items.
    pub const GITHUB_MAX_PAGE_SIZE: usize = 100;

    /// User agent sent to both APIs (GitHub rejects anonymous clients).
    pub const USER_AGENT: &str = concat!("research-radar/", env!("CARGO_PKG_VERSION"));
}

/// Default fetch parameters shared by the CLI and the agent.
pub mod defaults {
    /// Default arXiv category filter.
    pub const ARXIV_CATEGORY: &str = "cs";

    /// Default result count per source.
    pub const MAX_RESULTS: usize = 100;

    /// Default snapshot directory.
    pub const DATA_DIR: &str = "data";
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub bearer token (optional, raises the search rate limit).
    pub github_token: Option<String>,

    /// arXiv query endpoint (overridable for mock servers).
    pub arxiv_api_url: String,

    /// GitHub API base URL (overridable for mock servers).
    pub github_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Directory snapshot files are written to.
    pub data_dir: PathBuf,
}

impl Config {
    /// Create a new configuration with an optional GitHub token.
    ///
    /// Without a token the GitHub search runs against the platform's
    /// unauthenticated rate limit; a rate-limit response surfaces as an
    /// error rather than being retried.
    #[must_use]
    pub fn new(github_token: Option<String>) -> Self {
        Self {
            github_token,
            arxiv_api_url: api::ARXIV_API.to_string(),
            github_api_url: api::GITHUB_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            data_dir: PathBuf::from(defaults::DATA_DIR),
        }
    }

    /// Create a test configuration pointing both clients at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            github_token: None,
            arxiv_api_url: format!("{base_url}/api/query"),
            github_api_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            data_dir: PathBuf::from(defaults::DATA_DIR),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `GITHUB_TOKEN`; absence is not an error, the agent just runs
    /// unauthenticated.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var("GITHUB_TOKEN").ok())
    }

    /// Replace the snapshot directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Check if a GitHub token is configured.
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.github_token.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
