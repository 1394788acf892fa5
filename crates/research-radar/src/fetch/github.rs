//! GitHub repository search API client.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};

use super::check_status;
use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{RepoSearchPage, Repository};

/// Client for the GitHub repository search endpoint.
#[derive(Clone)]
pub struct GithubClient {
    /// Pooled HTTP client with auth headers baked in.
    client: Client,

    /// API base URL.
    base_url: String,

    /// Whether an Authorization header was configured.
    has_token: bool,
}

impl GithubClient {
    /// Create a new client from the agent configuration.
    ///
    /// A configured token is sent as a bearer Authorization header on
    /// every request; without one the platform's unauthenticated rate
    /// limit applies.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails or the token is
    /// not a valid header value.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(ref token) = config.github_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(api::USER_AGENT)
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, base_url: config.github_api_url.clone(), has_token: config.has_token() })
    }

    /// Check if a token is configured.
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.has_token
    }

    /// Search repositories ordered by star count descending.
    ///
    /// The query combines free-text `keywords` with a `language:`
    /// qualifier when `language` is non-empty. Pages are capped at the
    /// API's maximum, so counts above the cap paginate; collection stops
    /// at `max_results` or on the first short page.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RateLimited`] on a 429 or GitHub's 403
    /// rate-limit variant; other failures surface unmodified. Nothing is
    /// retried.
    pub async fn search_repositories(
        &self,
        keywords: &str,
        language: &str,
        max_results: usize,
    ) -> ClientResult<Vec<Repository>> {
        if max_results == 0 {
            return Ok(Vec::new());
        }

        let query = build_query(keywords, language);
        let url = format!("{}/search/repositories", self.base_url);

        // per_page stays fixed across pages; changing it mid-run would
        // shift the server's page windows.
        let per_page = max_results.min(api::GITHUB_MAX_PAGE_SIZE);
        let mut repos: Vec<Repository> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let params = [
                ("q".to_string(), query.clone()),
                ("sort".to_string(), "stars".to_string()),
                ("order".to_string(), "desc".to_string()),
                ("per_page".to_string(), per_page.to_string()),
                ("page".to_string(), page.to_string()),
            ];

            let response = self.client.get(&url).query(&params).send().await?;
            let response = check_rate_limit(response)?;
            let response = check_status(response).await?;
            let value: serde_json::Value = response.json().await?;

            let result: RepoSearchPage =
                serde_json::from_value(value).map_err(ClientError::from)?;
            let fetched = result.items.len();
            repos.extend(result.items);

            if fetched < per_page || repos.len() >= max_results {
                break;
            }
            page += 1;
        }

        repos.truncate(max_results);
        Ok(repos)
    }
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient").field("has_token", &self.has_token).finish()
    }
}

/// Join free-text keywords and qualifiers into a search query.
///
/// GitHub rejects an empty `q`, so an unfiltered fetch falls back to
/// `stars:>0`.
fn build_query(keywords: &str, language: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !keywords.is_empty() {
        parts.push(keywords.to_string());
    }
    if !language.is_empty() {
        parts.push(format!("language:{language}"));
    }

    if parts.is_empty() { "stars:>0".to_string() } else { parts.join(" ") }
}

/// Detect GitHub's 403 rate-limit responses before generic status mapping.
///
/// The platform signals an exhausted quota with a 403 plus
/// `x-ratelimit-remaining: 0` rather than a 429.
fn check_rate_limit(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let exhausted = response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "0");

    if response.status() == StatusCode::FORBIDDEN && exhausted {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        return Err(ClientError::rate_limited(retry_after));
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_keywords_only() {
        assert_eq!(build_query("graph neural network", ""), "graph neural network");
    }

    #[test]
    fn test_build_query_with_language() {
        assert_eq!(build_query("web server", "rust"), "web server language:rust");
    }

    #[test]
    fn test_build_query_language_only() {
        assert_eq!(build_query("", "python"), "language:python");
    }

    #[test]
    fn test_build_query_empty_falls_back() {
        assert_eq!(build_query("", ""), "stars:>0");
    }
}
