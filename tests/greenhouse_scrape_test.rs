//! End-to-end test for the Greenhouse adapter against a mock board API.

use jobscraper::fetch::{Fetcher, RetryPolicy};
use jobscraper::services::{GreenhouseSource, PostingSource};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> Fetcher {
    let client = reqwest::Client::builder()
        .user_agent("jobscraper-test/1.0")
        .build()
        .unwrap();
    Fetcher::new(client, RetryPolicy::default())
}

#[tokio::test]
async fn test_scrape_filters_senior_roles() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "jobs": [
            {
                "title": "Software Engineer",
                "absolute_url": "https://example.com/jobs/123",
                "location": {"name": "San Francisco, CA"},
                "department": {"name": "Engineering"}
            },
            {
                "title": "Senior Staff Engineer",
                "absolute_url": "https://example.com/jobs/456",
                "location": {"name": "San Francisco, CA"},
                "department": {"name": "Engineering"}
            },
            {
                "title": "Software Engineer Intern",
                "absolute_url": "https://example.com/jobs/789",
                "location": {"name": "Remote, US"},
                "department": {"name": "Engineering"}
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/test/jobs"))
        .and(query_param("content", "true"))
        .and(header("user-agent", "jobscraper-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = GreenhouseSource::new(fetcher(), mock_server.uri());
    let jobs = source.scrape("test").await.unwrap();

    // Senior role is filtered out; the plain engineer and the intern remain.
    assert_eq!(jobs.len(), 2);
    assert!(jobs.iter().all(|j| j.title != "Senior Staff Engineer"));
    assert!(jobs.iter().any(|j| j.url == "https://example.com/jobs/123"));
    assert!(jobs.iter().any(|j| j.url == "https://example.com/jobs/789"));
    assert!(jobs.iter().all(|j| j.company == "Test"));
}

#[tokio::test]
async fn test_scrape_empty_board_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empty/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"jobs": []})))
        .mount(&mock_server)
        .await;

    let source = GreenhouseSource::new(fetcher(), mock_server.uri());
    let jobs = source.scrape("empty").await.unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn test_scrape_surfaces_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let source = GreenhouseSource::new(fetcher(), mock_server.uri());
    assert!(source.scrape("broken").await.is_err());
}
