//! HTTP clients for the two upstream search APIs.
//!
//! Both clients are thin wrappers over reqwest: one GET per call, no
//! retries, no backoff. Failures surface to the caller unmodified.

mod arxiv;
mod github;

pub use arxiv::ArxivClient;
pub use github::GithubClient;

use crate::error::{ClientError, ClientResult};

/// Map non-success statuses onto the shared error taxonomy.
///
/// GitHub's 403 rate-limit variant is detected in the GitHub client
/// before this runs.
pub(crate) async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        429 => {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);

            Err(ClientError::rate_limited(retry_after))
        }
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::not_found(text))
        }
        400 | 422 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::bad_request(text))
        }
        500..=599 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::server(status.as_u16(), text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
        }
    }
}
