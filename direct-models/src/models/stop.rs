//! Pickup and dropoff waypoints.

use serde::{Deserialize, Serialize};

use direct_core::error::{DirectError, DirectResult};

use super::verification::{VerificationProof, VerificationRequirements};

/// A pickup or dropoff stop as reported on a delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stop {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Free-text address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Structured breakdown of `address`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_address: Option<DetailedAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Evidence the courier must capture at this stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_requirements: Option<VerificationRequirements>,

    /// Evidence captured at this stop, once available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationProof>,
}

/// Structured address as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A geocoordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatLng {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// Address in the vendor's structured input format.
///
/// The `pickup_address` and `dropoff_address` request fields accept either
/// free text or this object serialized into a JSON string, which parses more
/// accurately on the server side:
///
/// ```json
/// "{\"street_address\":[\"100 Maiden Ln\"],\"city\":\"New York\",\"state\":\"NY\",\"zip_code\":\"10023\",\"country\":\"US\"}"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredAddress {
    /// Street lines, first line first.
    pub street_address: Vec<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl StructuredAddress {
    /// Encode as the JSON string expected by the address request fields.
    pub fn to_wire_string(&self) -> DirectResult<String> {
        serde_json::to_string(self)
            .map_err(|e| DirectError::Serialization(format!("failed to encode address: {e}")))
    }
}
