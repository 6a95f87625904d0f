//! Quote endpoints.

use reqwest::Method;

use direct_core::error::DirectResult;
use direct_models::{CreateQuoteRequest, Quote};

use crate::cancel::CancelToken;
use crate::client::DirectClient;

impl DirectClient {
    /// Price a pickup/dropoff pair.
    ///
    /// `POST /v1/customers/{customer_id}/delivery_quotes`. A 400 usually
    /// means an undeliverable or unparseable address.
    pub async fn create_quote(
        &self,
        body: &CreateQuoteRequest,
        cancel: Option<&CancelToken>,
    ) -> DirectResult<Quote> {
        let body = Self::encode_body(body)?;
        self.send_json(
            Method::POST,
            &self.customer_path("/delivery_quotes"),
            Some(body),
            cancel,
        )
        .await
    }
}
