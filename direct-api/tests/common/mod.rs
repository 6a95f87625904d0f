//! Shared test utilities for client integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use direct_api::{DirectClient, HttpRequest, HttpResponse, HttpTransport};
use direct_core::error::DirectResult;

pub const BASE_URL: &str = "https://api.uber.com/"; // trailing slash on purpose
pub const CUSTOMER_ID: &str = "cust_123";
pub const TOKEN: &str = "test_token";

type Responder = Box<dyn Fn(&HttpRequest) -> DirectResult<HttpResponse> + Send + Sync>;

/// In-memory transport that records every request and answers with a canned
/// response.
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responder: Responder,
}

impl RecordingTransport {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&HttpRequest) -> DirectResult<HttpResponse> + Send + Sync + 'static,
    {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    /// Always answer 200 with the given JSON body.
    pub fn json_ok(body: &'static str) -> Arc<Self> {
        Self::new(move |_| Ok(HttpResponse::new(200, body)))
    }

    /// Always answer with the given status and body.
    pub fn status(status: u16, body: &'static str) -> Arc<Self> {
        Self::new(move |_| Ok(HttpResponse::new(status, body)))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request sent so far.
    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> DirectResult<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        (self.responder)(&request)
    }
}

/// Transport whose requests never complete.
pub struct PendingTransport;

#[async_trait]
impl HttpTransport for PendingTransport {
    async fn send(&self, _request: HttpRequest) -> DirectResult<HttpResponse> {
        std::future::pending().await
    }
}

/// Build a client with the standard test origin, customer id and token.
pub fn make_client(transport: Arc<dyn HttpTransport>) -> DirectClient {
    DirectClient::new(transport, BASE_URL, CUSTOMER_ID).with_access_token(TOKEN)
}

/// Expected absolute URL for a customer-scoped path.
pub fn customer_url(suffix: &str) -> String {
    format!("https://api.uber.com/v1/customers/{CUSTOMER_ID}{suffix}")
}
