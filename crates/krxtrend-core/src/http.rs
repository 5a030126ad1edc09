use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use crate::error::AnalysisError;

/// Minimal HTTP method set needed by the data feeds.
///
/// `Head` backs the locator's existence probes, which must not download a
/// body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Head,
}

/// HTTP request envelope used by feed fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn head(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Head, url)
    }
}

/// HTTP response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: String::new(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level HTTP error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Transport contract for the data feeds.
///
/// Implementations decide timeout policy; every feed request goes through
/// `execute`, so a caller wanting per-fetch cancellation imposes it here.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Existence probe: HEAD the URL and report whether it resolves.
///
/// Never downloads a body. A transport failure is an error, not a `false`.
pub async fn exists(client: &dyn HttpClient, url: &str) -> Result<bool, HttpError> {
    let response = client.execute(HttpRequest::head(url)).await?;
    Ok(response.is_success())
}

/// Fetch a document body, mapping a non-success status to `ResourceNotFound`.
pub async fn fetch_text(client: &dyn HttpClient, url: String) -> Result<String, AnalysisError> {
    let response = client.execute(HttpRequest::get(&url)).await?;
    if !response.is_success() {
        return Err(AnalysisError::ResourceNotFound { url });
    }
    Ok(response.body)
}

/// Production transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

    pub fn new() -> Self {
        Self::with_timeout_ms(Self::DEFAULT_TIMEOUT_MS)
    }

    /// Build a client whose timeout applies to every request it executes.
    pub fn with_timeout_ms(timeout_ms: u64) -> Self {
        Self {
            client: Arc::new(
                reqwest::Client::builder()
                    .user_agent("krxtrend/0.1.0")
                    .timeout(std::time::Duration::from_millis(timeout_ms))
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new()),
            ),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Head => self.client.head(&request.url),
            };

            let response = builder.send().await.map_err(|e| {
                if e.is_timeout() {
                    HttpError::new(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    HttpError::new(format!("connection failed: {e}"))
                } else {
                    HttpError::new(format!("request failed: {e}"))
                }
            })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| HttpError::new(format!("failed to read response body: {e}")))?;

            Ok(HttpResponse { status, body })
        })
    }
}

/// Deterministic in-memory transport for offline tests.
///
/// Serves canned documents by exact URL; anything else is a 404. Records
/// every executed URL so tests can assert on probe order.
#[derive(Debug, Default)]
pub struct FixtureHttpClient {
    documents: BTreeMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl FixtureHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.documents.insert(url.into(), body.into());
        self
    }

    /// URLs executed so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl HttpClient for FixtureHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            if let Ok(mut log) = self.requests.lock() {
                log.push(request.url.clone());
            }
            match self.documents.get(&request.url) {
                Some(body) => match request.method {
                    // HEAD resolves without a body, like the real feeds.
                    HttpMethod::Head => Ok(HttpResponse::ok("")),
                    HttpMethod::Get => Ok(HttpResponse::ok(body.clone())),
                },
                None => Ok(HttpResponse::not_found()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_serves_known_url_and_404s_unknown() {
        let client = FixtureHttpClient::new().with_document("https://example.test/doc", "hello");

        let hit = client
            .execute(HttpRequest::get("https://example.test/doc"))
            .await
            .expect("fixture must not fail");
        assert_eq!(hit.status, 200);
        assert_eq!(hit.body, "hello");

        let miss = client
            .execute(HttpRequest::get("https://example.test/other"))
            .await
            .expect("fixture must not fail");
        assert_eq!(miss.status, 404);
    }

    #[tokio::test]
    async fn exists_probe_reports_presence_without_body() {
        let client = FixtureHttpClient::new().with_document("https://example.test/doc", "hello");

        assert!(exists(&client, "https://example.test/doc")
            .await
            .expect("probe must not fail"));
        assert!(!exists(&client, "https://example.test/missing")
            .await
            .expect("probe must not fail"));
    }

    #[tokio::test]
    async fn fetch_text_maps_missing_document_to_resource_not_found() {
        let client = FixtureHttpClient::new();

        let err = fetch_text(&client, String::from("https://example.test/gone"))
            .await
            .expect_err("must fail");
        assert!(matches!(err, AnalysisError::ResourceNotFound { .. }));
    }
}
