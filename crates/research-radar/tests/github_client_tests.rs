//! Mock-based GitHub client tests using wiremock.
//!
//! Verifies query building, pagination, auth headers, and rate-limit
//! surfacing against a stub of the repository search endpoint.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research_radar::config::Config;
use research_radar::error::ClientError;
use research_radar::fetch::GithubClient;

fn setup_client(mock_server: &MockServer) -> GithubClient {
    let config = Config::for_testing(&mock_server.uri());
    GithubClient::new(&config).unwrap()
}

/// Sample repository item as the search API returns it.
fn sample_repo_json(id: i64, full_name: &str, stars: u64, language: &str) -> serde_json::Value {
    json!({
        "id": id,
        "full_name": full_name,
        "description": format!("Description of {full_name}"),
        "stargazers_count": stars,
        "language": language,
        "html_url": format!("https://github.com/{full_name}"),
        "updated_at": "2026-08-01T00:00:00Z"
    })
}

fn search_page(items: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items
    })
}

#[tokio::test]
async fn test_search_parses_and_preserves_star_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("sort", "stars"))
        .and(query_param("order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(vec![
            sample_repo_json(1, "big/repo", 5000, "Rust"),
            sample_repo_json(2, "mid/repo", 500, "Rust"),
            sample_repo_json(3, "small/repo", 50, "Rust"),
        ])))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let repos = client.search_repositories("", "", 10).await.unwrap();

    assert_eq!(repos.len(), 3);
    assert!(
        repos.windows(2).all(|w| w[0].stars >= w[1].stars),
        "star counts should be monotonically non-increasing"
    );
}

#[tokio::test]
async fn test_language_qualifier_reaches_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "web server language:rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(vec![
            sample_repo_json(1, "hyperium/hyper", 14000, "Rust"),
        ])))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let repos = client.search_repositories("web server", "rust", 10).await.unwrap();

    assert_eq!(repos.len(), 1);
    assert!(repos.iter().all(|r| r.language.as_deref() == Some("Rust")));
}

#[tokio::test]
async fn test_empty_filters_fall_back_to_stars_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "stars:>0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(vec![])))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    assert!(client.search_repositories("", "", 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_pagination_past_the_page_size_cap() {
    let mock_server = MockServer::start().await;

    let page_one: Vec<_> =
        (0..100).map(|i| sample_repo_json(i, &format!("owner/repo{i}"), 2000 - i as u64, "Rust")).collect();
    let page_two: Vec<_> = (100..200)
        .map(|i| sample_repo_json(i, &format!("owner/repo{i}"), 2000 - i as u64, "Rust"))
        .collect();

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(page_one)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(page_two)))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let repos = client.search_repositories("", "", 150).await.unwrap();

    assert_eq!(repos.len(), 150);
    assert_eq!(repos[0].full_name, "owner/repo0");
    assert_eq!(repos[149].full_name, "owner/repo149");
}

#[tokio::test]
async fn test_short_page_ends_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(vec![
            sample_repo_json(1, "only/match", 10, "Rust"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let repos = client.search_repositories("", "", 150).await.unwrap();

    assert_eq!(repos.len(), 1);
}

#[tokio::test]
async fn test_token_is_sent_as_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.github_token = Some("test-token".to_string());
    let client = GithubClient::new(&config).unwrap();

    assert!(client.has_token());
    client.search_repositories("", "", 10).await.unwrap();
}

#[tokio::test]
async fn test_rate_limit_429_surfaces() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "120")
                .set_body_string("rate limit exceeded"),
        )
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search_repositories("", "", 10).await.unwrap_err();

    assert!(err.is_rate_limited(), "got {err:?}");
    assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(120)));
}

#[tokio::test]
async fn test_rate_limit_403_variant_surfaces() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("x-ratelimit-remaining", "0")
                .set_body_string("API rate limit exceeded"),
        )
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search_repositories("", "", 10).await.unwrap_err();

    assert!(err.is_rate_limited(), "got {err:?}");
}

#[tokio::test]
async fn test_plain_403_is_not_a_rate_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search_repositories("", "", 10).await.unwrap_err();

    assert!(matches!(err, ClientError::UnexpectedStatus { status: 403, .. }), "got {err:?}");
}
