//! NeoWs feed client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::NeoConfig;
use crate::Result;
use super::payload::FeedPayload;
use super::window::FeedWindow;

/// Result of requesting one feed window
#[derive(Debug)]
pub enum FetchOutcome {
    /// 200 with a parseable payload
    Fetched(FeedPayload),
    /// 429; no further windows should be requested
    RateLimited { body: String },
    /// Any other non-200 status
    HttpError { status: u16, body: String },
    /// Connection, DNS, timeout or body read failure
    Transport(String),
    /// 200 whose body is not a feed payload
    Parse(String),
}

/// Anything that can answer a feed window request
#[async_trait]
pub trait FeedSource {
    async fn fetch(&self, window: &FeedWindow) -> FetchOutcome;
}

/// HTTP client for the `feed` endpoint
pub struct FeedClient {
    client: Client,
    feed_url: String,
    api_key: String,
}

impl FeedClient {
    pub fn new(config: &NeoConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            feed_url: config.feed_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Point the client at another endpoint (mock servers in tests)
    pub fn with_feed_url(mut self, feed_url: impl Into<String>) -> Self {
        self.feed_url = feed_url.into();
        self
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch(&self, window: &FeedWindow) -> FetchOutcome {
        debug!(window = %window, url = %self.feed_url, "Requesting feed window");

        let response = match self
            .client
            .get(&self.feed_url)
            .query(&[
                ("start_date", window.start_param()),
                ("end_date", window.end_param()),
                ("api_key", self.api_key.clone()),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Transport(e.to_string()),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return FetchOutcome::Transport(e.to_string()),
        };

        match status {
            StatusCode::OK => match serde_json::from_str::<FeedPayload>(&body) {
                Ok(payload) => FetchOutcome::Fetched(payload),
                Err(e) => FetchOutcome::Parse(e.to_string()),
            },
            StatusCode::TOO_MANY_REQUESTS => FetchOutcome::RateLimited { body },
            other => FetchOutcome::HttpError {
                status: other.as_u16(),
                body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::payload::tests::neo_entry;
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn window() -> FeedWindow {
        FeedWindow::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), 6)
    }

    fn client_for(server: &MockServer) -> FeedClient {
        FeedClient::new(&NeoConfig::default())
            .unwrap()
            .with_feed_url(format!("{}/neo/rest/v1/feed", server.uri()))
    }

    #[tokio::test]
    async fn test_success_sends_window_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/neo/rest/v1/feed"))
            .and(query_param("start_date", "2026-10-18"))
            .and(query_param("end_date", "2026-10-24"))
            .and(query_param("api_key", "DEMO_KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "near_earth_objects": {
                    "2026-10-18": [neo_entry("(2026 UA)", 88.0, "2026-10-18", "36000")]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        match client_for(&server).fetch(&window()).await {
            FetchOutcome::Fetched(payload) => assert_eq!(payload.entry_count(), 1),
            other => panic!("expected payload, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_429_is_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string("OVER_RATE_LIMIT"))
            .mount(&server)
            .await;

        match client_for(&server).fetch(&window()).await {
            FetchOutcome::RateLimited { body } => assert_eq!(body, "OVER_RATE_LIMIT"),
            other => panic!("expected rate limit, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_other_status_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        match client_for(&server).fetch(&window()).await {
            FetchOutcome::HttpError { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        assert!(matches!(
            client_for(&server).fetch(&window()).await,
            FetchOutcome::Parse(_)
        ));
    }

    #[tokio::test]
    async fn test_payload_without_objects_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "element_count": 0 })))
            .mount(&server)
            .await;

        assert!(matches!(
            client_for(&server).fetch(&window()).await,
            FetchOutcome::Parse(_)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = FeedClient::new(&NeoConfig::default())
            .unwrap()
            .with_feed_url("http://127.0.0.1:1/feed");

        assert!(matches!(
            client.fetch(&window()).await,
            FetchOutcome::Transport(_)
        ));
    }
}
