//! Delivery endpoints.

use reqwest::Method;

use direct_core::error::DirectResult;
use direct_models::{CreateDeliveryRequest, Delivery, ListDeliveriesResponse, UpdateDeliveryRequest};

use crate::cancel::CancelToken;
use crate::client::DirectClient;

/// Query parameters for listing deliveries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDeliveriesQuery {
    /// Server-side filter expression, e.g. "status:active".
    pub filter: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Number of deliveries to skip.
    pub offset: Option<u32>,
}

impl ListDeliveriesQuery {
    /// Render as `?filter=..&limit=..&offset=..`, keeping only the supplied
    /// parameters in that order. Returns an empty string when none are set.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(filter) = self.filter.as_deref().filter(|f| !f.trim().is_empty()) {
            params.push(format!("filter={}", urlencoding::encode(filter)));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        if let Some(offset) = self.offset {
            params.push(format!("offset={offset}"));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

impl DirectClient {
    /// Book a delivery, usually against a prior quote.
    ///
    /// `POST /v1/customers/{customer_id}/deliveries`. An unknown or expired
    /// `quote_id` comes back as 404; a reused idempotency key as 409.
    pub async fn create_delivery(
        &self,
        body: &CreateDeliveryRequest,
        cancel: Option<&CancelToken>,
    ) -> DirectResult<Delivery> {
        let body = Self::encode_body(body)?;
        self.send_json(
            Method::POST,
            &self.customer_path("/deliveries"),
            Some(body),
            cancel,
        )
        .await
    }

    /// List deliveries for this customer, one page at a time.
    ///
    /// `GET /v1/customers/{customer_id}/deliveries`.
    pub async fn list_deliveries(
        &self,
        query: &ListDeliveriesQuery,
        cancel: Option<&CancelToken>,
    ) -> DirectResult<ListDeliveriesResponse> {
        let path = format!(
            "{}{}",
            self.customer_path("/deliveries"),
            query.to_query_string()
        );
        self.send_json(Method::GET, &path, None, cancel).await
    }

    /// Change mutable fields of a delivery. Only `pickup_notes` is supported.
    ///
    /// `POST /v1/customers/{customer_id}/deliveries/{delivery_id}`. Updates
    /// are rejected once the lifecycle has moved past the point where the
    /// field can change.
    pub async fn update_delivery(
        &self,
        delivery_id: &str,
        body: &UpdateDeliveryRequest,
        cancel: Option<&CancelToken>,
    ) -> DirectResult<Delivery> {
        let body = Self::encode_body(body)?;
        self.send_json(
            Method::POST,
            &self.customer_path(&format!("/deliveries/{delivery_id}")),
            Some(body),
            cancel,
        )
        .await
    }

    /// Fetch the current snapshot of a delivery.
    ///
    /// `GET /v1/customers/{customer_id}/deliveries/{delivery_id}`.
    pub async fn get_delivery(
        &self,
        delivery_id: &str,
        cancel: Option<&CancelToken>,
    ) -> DirectResult<Delivery> {
        self.send_json(
            Method::GET,
            &self.customer_path(&format!("/deliveries/{delivery_id}")),
            None,
            cancel,
        )
        .await
    }

    /// Request cancellation. Only allowed at certain lifecycle stages.
    ///
    /// `POST /v1/customers/{customer_id}/deliveries/{delivery_id}/cancel`.
    pub async fn cancel_delivery(
        &self,
        delivery_id: &str,
        cancel: Option<&CancelToken>,
    ) -> DirectResult<Delivery> {
        self.send_json(
            Method::POST,
            &self.customer_path(&format!("/deliveries/{delivery_id}/cancel")),
            None,
            cancel,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_all_params() {
        let q = ListDeliveriesQuery {
            filter: Some("status:active".into()),
            limit: Some(25),
            offset: Some(50),
        };
        assert_eq!(
            q.to_query_string(),
            "?filter=status%3Aactive&limit=25&offset=50"
        );
    }

    #[test]
    fn test_query_string_only_supplied_params() {
        let q = ListDeliveriesQuery {
            offset: Some(0),
            ..Default::default()
        };
        assert_eq!(q.to_query_string(), "?offset=0");
        assert_eq!(ListDeliveriesQuery::default().to_query_string(), "");
    }

    #[test]
    fn test_blank_filter_is_dropped() {
        let q = ListDeliveriesQuery {
            filter: Some("   ".into()),
            limit: Some(10),
            offset: None,
        };
        assert_eq!(q.to_query_string(), "?limit=10");
    }

    #[test]
    fn test_filter_encoding() {
        let q = ListDeliveriesQuery {
            filter: Some("status:active & created>2024-01-01".into()),
            ..Default::default()
        };
        assert_eq!(
            q.to_query_string(),
            "?filter=status%3Aactive%20%26%20created%3E2024-01-01"
        );
    }
}
