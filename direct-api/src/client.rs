//! HTTP client for the Direct delivery API.
//!
//! Builds absolute URLs from the configured origin and customer id, attaches
//! the bearer token, dispatches through the injected transport and maps the
//! outcome into typed results or a `DirectError`.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use direct_core::config::{ApiConfig, DirectConfig};
use direct_core::constants;
use direct_core::error::{DirectError, DirectResult};

use crate::cancel::CancelToken;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Client for one customer account of the Direct API.
///
/// Cloning is cheap; clones share the transport and the token cell. The
/// client holds no per-call state, so calls may run concurrently. A token
/// replaced while calls are in flight is seen by those calls or not,
/// depending on whether they had already built their request.
#[derive(Clone)]
pub struct DirectClient {
    transport: Arc<dyn HttpTransport>,
    /// API origin without trailing slash (e.g. "https://api.uber.com").
    base_url: String,
    /// Customer identifier, inserted verbatim into every path.
    customer_id: String,
    /// Bearer token read at the start of every call.
    access_token: Arc<RwLock<String>>,
}

impl DirectClient {
    /// Create a client over an arbitrary transport. The token starts empty.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: &str,
        customer_id: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base_url: DirectConfig::sanitize_base_url(base_url),
            customer_id: customer_id.into(),
            access_token: Arc::new(RwLock::new(String::new())),
        }
    }

    /// Create a client with a reqwest transport from API configuration.
    pub fn from_config(config: &ApiConfig) -> DirectResult<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), &config.base_url, config.customer_id.clone())
            .with_access_token(config.access_token.clone()))
    }

    /// Replace the token cell with a fresh one holding `token`.
    ///
    /// Clones made before this call keep the old cell.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Arc::new(RwLock::new(token.into()));
        self
    }

    /// Set the bearer token used by subsequent calls on this client and its clones.
    pub async fn set_access_token(&self, token: impl Into<String>) {
        *self.access_token.write().await = token.into();
        debug!("access token replaced");
    }

    /// Current bearer token.
    pub async fn access_token(&self) -> String {
        self.access_token.read().await.clone()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Path under this customer, e.g. `customer_path("/deliveries")`.
    pub(crate) fn customer_path(&self, suffix: &str) -> String {
        format!(
            "/{}/customers/{}{suffix}",
            constants::API_VERSION,
            self.customer_id
        )
    }

    /// Absolute URL for a path beginning with `/`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Serialize a request body with its wire field names.
    pub(crate) fn encode_body<B: Serialize>(body: &B) -> DirectResult<String> {
        serde_json::to_string(body)
            .map_err(|e| DirectError::Serialization(format!("failed to encode request: {e}")))
    }

    async fn build_request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let token = self.access_token.read().await.clone();

        let mut headers = vec![
            ("Authorization".to_string(), format!("Bearer {token}")),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        }
    }

    /// Send one request and fail on cancellation, transport errors or any
    /// non-2xx status.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        cancel: Option<&CancelToken>,
    ) -> DirectResult<HttpResponse> {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            debug!("{method} {path} cancelled before dispatch");
            return Err(DirectError::Cancelled);
        }

        let request = self.build_request(method.clone(), path, body).await;
        debug!("{method} {path}");

        let send = self.transport.send(request);
        let response = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!("{method} {path} cancelled in flight");
                        return Err(DirectError::Cancelled);
                    }
                    result = send => result?,
                }
            }
            None => send.await?,
        };

        if !response.is_success() {
            warn!("{method} {path} returned status {}", response.status);
            return Err(DirectError::from_response(response.status, &response.body));
        }

        Ok(response)
    }

    /// Send a request and decode the JSON response into `T`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        cancel: Option<&CancelToken>,
    ) -> DirectResult<T> {
        let response = self.execute(method, path, body, cancel).await?;
        serde_json::from_str(&response.body)
            .map_err(|e| DirectError::Decode(format!("{path}: {e}")))
    }

    /// Send a request and return the response body untouched.
    pub(crate) async fn send_text(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        cancel: Option<&CancelToken>,
    ) -> DirectResult<String> {
        Ok(self.execute(method, path, body, cancel).await?.body)
    }
}

impl std::fmt::Debug for DirectClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectClient")
            .field("base_url", &self.base_url)
            .field("customer_id", &self.customer_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> DirectClient {
        let config = ApiConfig {
            base_url: base_url.into(),
            customer_id: "cust_123".into(),
            access_token: "tok".into(),
            ..Default::default()
        };
        DirectClient::from_config(&config).unwrap()
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let client = test_client("https://api.uber.com/");
        assert_eq!(client.base_url(), "https://api.uber.com");
        assert_eq!(
            client.url(&client.customer_path("/deliveries")),
            "https://api.uber.com/v1/customers/cust_123/deliveries"
        );
    }

    #[test]
    fn test_customer_id_inserted_verbatim() {
        let config = ApiConfig {
            customer_id: "a b/c?d".into(),
            ..Default::default()
        };
        let client = DirectClient::from_config(&config).unwrap();
        assert_eq!(
            client.customer_path("/delivery_quotes"),
            "/v1/customers/a b/c?d/delivery_quotes"
        );
    }

    #[tokio::test]
    async fn test_token_replacement_visible_to_clones() {
        let client = test_client("https://api.uber.com");
        let clone = client.clone();
        client.set_access_token("fresh").await;
        assert_eq!(clone.access_token().await, "fresh");
    }

    #[tokio::test]
    async fn test_request_headers() {
        let client = test_client("https://api.uber.com");
        let with_body = client
            .build_request(Method::POST, "/v1/x", Some("{}".into()))
            .await;
        assert_eq!(with_body.header("authorization"), Some("Bearer tok"));
        assert_eq!(with_body.header("content-type"), Some("application/json"));

        let without_body = client.build_request(Method::GET, "/v1/x", None).await;
        assert!(without_body.header("content-type").is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let client = test_client("https://api.uber.com");
        let rendered = format!("{client:?}");
        assert!(rendered.contains("cust_123"));
        assert!(!rendered.contains("access_token"));
    }
}
