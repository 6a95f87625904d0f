//! Fee breakdown attached to a delivery request.

use serde::{Deserialize, Serialize};

/// A fee line added to or subtracted from the end-user total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFeesSummary {
    /// Kind of fee: delivery fee, promo, loyalty points, etc.
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub fee_type: String,

    /// Amount in minor currency units.
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub amount: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_fee_tax_info: Option<UserFeesSummaryTaxInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFeesSummaryTaxInfo {
    /// Integer tax added to the price to get a total.
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub tax_rate: i64,
}
