//! Delivery models.
//!
//! Request bodies for creating and updating deliveries, and the `Delivery`
//! snapshot returned by every delivery endpoint. Status evolves server-side;
//! each call returns a fresh snapshot.

use serde::{Deserialize, Serialize};

use super::fees::UserFeesSummary;
use super::manifest::{ManifestItem, ManifestSummary};
use super::stop::Stop;
use super::verification::{DropoffVerification, VerificationRequirements};

/// What the courier does on a normal dropoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliverableAction {
    /// Meet at door. The server default when unset.
    #[serde(rename = "deliverable_action_meet_at_door")]
    MeetAtDoor,
    /// Contactless delivery. Incompatible with signature or ID requirements;
    /// a dropoff photo becomes mandatory.
    #[serde(rename = "deliverable_action_leave_at_door")]
    LeaveAtDoor,
}

/// What the courier does when the recipient is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndeliverableAction {
    LeaveAtDoor,
    /// Bring the items back to the pickup. The server default when unset.
    Return,
    Discard,
}

/// Body of `POST /v1/customers/{customer_id}/deliveries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDeliveryRequest {
    /// Pickup designation shown in the courier app.
    pub pickup_name: String,
    pub pickup_address: String,
    pub pickup_phone_number: String,

    pub dropoff_name: String,
    pub dropoff_address: String,
    pub dropoff_phone_number: String,

    pub manifest_items: Vec<ManifestItem>,

    /// Shown to the courier in place of `pickup_name` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_business_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_longitude: Option<f64>,

    /// At most 280 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_verification: Option<VerificationRequirements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_business_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_longitude: Option<f64>,

    /// At most 280 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_notes: Option<String>,

    /// At most 280 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_seller_notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_verification: Option<DropoffVerification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliverable_action: Option<DeliverableAction>,

    /// Caller-side manifest reference. Must be unique together with
    /// `external_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_reference: Option<String>,

    /// Value of the items in minor currency units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_total_value: Option<i64>,

    /// Quote this delivery books. Must not have expired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub undeliverable_action: Option<UndeliverableAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_ready_dt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_deadline_dt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_ready_dt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_deadline_dt: Option<String>,

    /// Courier tip in minor currency units. Included in the returned fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<i64>,

    /// Passed through unchanged; the server deduplicates on it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_store_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_verification: Option<VerificationRequirements>,

    /// End-user information, forwarded as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_user_info: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_fees_summary: Option<Vec<UserFeesSummary>>,
}

/// Body of `POST /v1/customers/{customer_id}/deliveries/{delivery_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDeliveryRequest {
    /// At most 280 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_notes: Option<String>,
}

/// Delivery snapshot returned by create, get, update and cancel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delivery {
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub id: String,

    /// Quote that produced this delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,

    /// Server-defined lifecycle status, e.g. "pending", "pickup", "delivered",
    /// "canceled".
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,

    /// Object kind, "delivery".
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<Stop>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff: Option<Stop>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ManifestSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_items: Option<Vec<ManifestItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_ready: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_ready: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_deadline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_eta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_eta: Option<String>,

    /// Fee in minor currency units, tip included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,

    /// Whether the courier is about to arrive at the next stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier_imminent: Option<bool>,

    /// `false` for sandbox deliveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,

    /// Action taken when the delivery could not be completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undeliverable_action: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub undeliverable_reason: Option<String>,

    /// Alternate identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl Delivery {
    /// Whether the server marked this delivery complete.
    pub fn is_complete(&self) -> bool {
        self.complete.unwrap_or(false)
    }
}

/// Page returned by the list-deliveries call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListDeliveriesResponse {
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub count: i64,
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub data: Vec<Delivery>,
}
