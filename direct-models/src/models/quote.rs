//! Delivery quote models.
//!
//! A quote prices a pickup/dropoff pair and is referenced by `quote_id`
//! when the delivery is booked. Quotes expire after a server-set TTL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /v1/customers/{customer_id}/delivery_quotes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateQuoteRequest {
    /// Pickup address. Either free text or the JSON-encoded form produced by
    /// [`StructuredAddress::to_wire_string`](crate::models::stop::StructuredAddress::to_wire_string).
    pub pickup_address: String,

    /// Dropoff address, same format as `pickup_address`.
    pub dropoff_address: String,

    /// Required in some regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_longitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_longitude: Option<f64>,

    /// Start of the pickup window (RFC 3339). Less than 30 days out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_ready_dt: Option<String>,

    /// End of the pickup window. At least 10 minutes after `pickup_ready_dt`
    /// and at least 20 minutes from now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_deadline_dt: Option<String>,

    /// Start of the dropoff window. At most `pickup_deadline_dt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_ready_dt: Option<String>,

    /// End of the dropoff window. At least 20 minutes after
    /// `dropoff_ready_dt` and not before `pickup_deadline_dt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_deadline_dt: Option<String>,

    /// Store contact number, `^\+[0-9]+$`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_phone_number: Option<String>,

    /// Recipient contact number, `^\+[0-9]+$`. The vendor documents this as
    /// required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_phone_number: Option<String>,

    /// Value of the items in minor currency units ($10.99 => 1099).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_total_value: Option<i64>,

    /// Partner store reference. Must match the one used at delivery creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_store_id: Option<String>,
}

impl CreateQuoteRequest {
    /// Quote request for a pickup/dropoff pair with every optional field unset.
    pub fn new(pickup_address: impl Into<String>, dropoff_address: impl Into<String>) -> Self {
        Self {
            pickup_address: pickup_address.into(),
            dropoff_address: dropoff_address.into(),
            ..Default::default()
        }
    }
}

/// Response of the create-quote call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    /// Object kind, "delivery_quote".
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub kind: String,

    /// Quote identifier, always prefixed `dqt_`.
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub id: String,

    /// Creation timestamp (RFC 3339).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Timestamp after which the quote is no longer accepted (RFC 3339).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,

    /// Delivery fee in minor currency units.
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub fee: i64,

    /// Lower-case ISO 4217 code.
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub currency: String,

    /// Upper-case currency type; may differ from `currency` in some regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_eta: Option<String>,

    /// Estimated delivery duration in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    /// Estimated minutes until pickup completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_duration: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_deadline: Option<String>,
}

impl Quote {
    /// Parsed `expires` timestamp, if present and well-formed.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether the quote has expired at `now`. A quote without a parseable
    /// expiry is never reported as expired; the server stays authoritative.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires| now >= expires)
    }
}
