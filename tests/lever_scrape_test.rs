//! End-to-end test for the Lever adapter against a mock postings API.

use jobscraper::fetch::{Fetcher, RetryPolicy};
use jobscraper::services::{LeverSource, PostingSource};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> Fetcher {
    let client = reqwest::Client::builder()
        .user_agent("jobscraper-test/1.0")
        .build()
        .unwrap();
    Fetcher::new(client, RetryPolicy::default())
}

#[tokio::test]
async fn test_scrape_parses_postings_array() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "text": "New Grad Backend Engineer",
            "hostedUrl": "https://jobs.lever.co/test/1",
            "categories": {"location": "New York, NY", "team": "Backend"}
        },
        {
            "text": "Engineering Manager",
            "hostedUrl": "https://jobs.lever.co/test/2",
            "categories": {"location": "New York, NY", "team": "Backend"}
        },
        {
            "text": "Junior Analyst",
            "hostedUrl": "https://jobs.lever.co/test/3",
            "categories": {"location": "Dublin, Ireland", "team": "Data"}
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/test"))
        .and(query_param("mode", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = LeverSource::new(fetcher(), mock_server.uri());
    let jobs = source.scrape("test").await.unwrap();

    // Manager is filtered by title, Dublin by location.
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "New Grad Backend Engineer");
    assert_eq!(jobs[0].url, "https://jobs.lever.co/test/1");
    assert_eq!(jobs[0].job_type, "Backend");
    assert_eq!(jobs[0].company, "Test");
}

#[tokio::test]
async fn test_scrape_surfaces_client_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = LeverSource::new(fetcher(), mock_server.uri());
    let err = source.scrape("gone").await.unwrap_err();
    assert!(err.to_string().contains("404"), "unexpected error: {err}");
}
