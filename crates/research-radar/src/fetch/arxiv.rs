//! arXiv query API client.

use reqwest::Client;

use super::check_status;
use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::Paper;

/// Client for the arXiv paper search endpoint.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    /// Pooled HTTP client.
    client: Client,

    /// Query endpoint URL.
    base_url: String,
}

impl ArxivClient {
    /// Create a new client from the agent configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, base_url: config.arxiv_api_url.clone() })
    }

    /// Search the latest papers in a category, newest first.
    ///
    /// `keywords` narrows the query when non-empty; the category filter is
    /// always applied as `cat:<category>*`. The server sorts by submission
    /// date descending and at most `max_results` entries are returned.
    /// "Top N" here means "most recent N" — the index exposes no
    /// popularity signal.
    ///
    /// # Errors
    ///
    /// Returns error on API failure; non-success statuses are surfaced
    /// without retry.
    pub async fn search(
        &self,
        category: &str,
        keywords: &str,
        max_results: usize,
    ) -> ClientResult<Vec<Paper>> {
        let query = if keywords.is_empty() {
            format!("cat:{category}*")
        } else {
            format!("({keywords}) AND cat:{category}*")
        };

        let params = [
            ("search_query".to_string(), query),
            ("sortBy".to_string(), "submittedDate".to_string()),
            ("sortOrder".to_string(), "descending".to_string()),
            ("max_results".to_string(), max_results.to_string()),
        ];

        let response = self.client.get(&self.base_url).query(&params).send().await?;
        let response = check_status(response).await?;
        let value: serde_json::Value = response.json().await?;

        let mut entries: Vec<Paper> = serde_json::from_value(value).map_err(ClientError::from)?;
        entries.truncate(max_results);
        Ok(entries)
    }

    /// Fetch a single paper by its arXiv id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when the id matches nothing,
    /// otherwise surfaces API failures unmodified.
    pub async fn fetch_by_id(&self, arxiv_id: &str) -> ClientResult<Paper> {
        let params = [("id_list".to_string(), arxiv_id.to_string())];

        let response = self.client.get(&self.base_url).query(&params).send().await?;
        let response = check_status(response).await?;
        let value: serde_json::Value = response.json().await?;

        let entries: Vec<Paper> = serde_json::from_value(value).map_err(ClientError::from)?;
        entries.into_iter().next().ok_or_else(|| ClientError::not_found(arxiv_id))
    }
}
