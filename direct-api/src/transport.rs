//! HTTP transport seam.
//!
//! The client never talks to the network directly: it hands a fully built
//! `HttpRequest` to an `HttpTransport` and gets back the status and body.
//! `ReqwestTransport` is the production implementation; tests substitute
//! their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};

use direct_core::config::ApiConfig;
use direct_core::error::{DirectError, DirectResult};

/// A request ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL, including any query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response as received from the server.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// Body decoded as UTF-8 text.
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can send an `HttpRequest` and return the raw response.
///
/// Implementations report connection-level failures as errors and return
/// every HTTP status, including 4xx and 5xx, as a normal `HttpResponse`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> DirectResult<HttpResponse>;
}

/// `HttpTransport` backed by `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Build a transport with the timeouts from configuration.
    pub fn new(config: &ApiConfig) -> DirectResult<Self> {
        let inner = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| DirectError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { inner })
    }

    /// Wrap an already configured reqwest client.
    pub fn from_client(inner: Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> DirectResult<HttpResponse> {
        let mut builder = self.inner.request(request.method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_error)?;

        Ok(HttpResponse { status, body })
    }
}

/// Classify a reqwest error into a DirectError variant.
fn classify_error(e: reqwest::Error) -> DirectError {
    if e.is_timeout() {
        DirectError::Timeout(e.to_string())
    } else if e.is_connect() {
        DirectError::Http(format!("connection failed: {e}"))
    } else {
        DirectError::Http(e.to_string())
    }
}
