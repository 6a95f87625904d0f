//! Proof-of-delivery endpoint.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Method;

use direct_core::error::{DirectError, DirectResult};

use crate::cancel::CancelToken;
use crate::client::DirectClient;

impl DirectClient {
    /// Fetch the proof-of-delivery image (photo or signature) as base64 text.
    ///
    /// `POST /v1/customers/{customer_id}/deliveries/{delivery_id}/proof-of-delivery`.
    /// The body is returned exactly as received, without JSON parsing, even
    /// when the server labels it `application/json`.
    pub async fn proof_of_delivery(
        &self,
        delivery_id: &str,
        cancel: Option<&CancelToken>,
    ) -> DirectResult<String> {
        self.send_text(
            Method::POST,
            &self.customer_path(&format!("/deliveries/{delivery_id}/proof-of-delivery")),
            None,
            cancel,
        )
        .await
    }
}

/// Decode a proof-of-delivery body into image bytes (PNG).
///
/// Tolerates surrounding whitespace and the quotes of a JSON string literal.
pub fn decode_proof_image(body: &str) -> DirectResult<Vec<u8>> {
    let trimmed = body.trim();
    let encoded = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);

    STANDARD
        .decode(encoded)
        .map_err(|e| DirectError::Decode(format!("proof of delivery is not valid base64: {e}")))
}
