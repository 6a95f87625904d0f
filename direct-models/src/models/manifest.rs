//! Manifest models: the items carried by a delivery.

use serde::{Deserialize, Serialize};

/// Approximate size category of an item.
///
/// Values outside the documented set decode into `Other` and serialize back
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemSize {
    #[default]
    Small,
    Medium,
    Large,
    Xlarge,
    Other(String),
}

impl ItemSize {
    /// Wire value of the size category.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Xlarge => "xlarge",
            Self::Other(raw) => raw,
        }
    }

    fn known(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "xlarge" => Some(Self::Xlarge),
            _ => None,
        }
    }
}

/// Strict parse for user input: only the documented sizes are accepted.
impl std::str::FromStr for ItemSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::known(s).ok_or_else(|| format!("unknown item size: {s}"))
    }
}

impl From<String> for ItemSize {
    fn from(raw: String) -> Self {
        Self::known(&raw).unwrap_or(Self::Other(raw))
    }
}

impl From<ItemSize> for String {
    fn from(size: ItemSize) -> Self {
        match size {
            ItemSize::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A single manifest line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestItem {
    /// Name or description of the item.
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "super::de::null_as_default")]
    pub quantity: i32,

    /// Left unset, the server treats the item as small.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ItemSize>,

    /// Weight in grams. Required when `dimensions` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Price in minor currency units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_be_upright: Option<bool>,
}

impl ManifestItem {
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            quantity,
            ..Default::default()
        }
    }
}

/// Physical dimensions in centimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

/// Aggregate manifest description on a delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Total value in minor currency units. Not required to equal the sum of
    /// item prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_item_serialize() {
        let item = ManifestItem::new("Box", 1);
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"name":"Box","quantity":1}"#
        );
    }

    #[test]
    fn test_item_size_wire_values() {
        let item = ManifestItem {
            size: Some(ItemSize::Xlarge),
            weight: Some(1200.0),
            dimensions: Some(Dimensions {
                length: Some(40.0),
                height: Some(30.0),
                depth: None,
            }),
            must_be_upright: Some(true),
            ..ManifestItem::new("Cake", 1)
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["size"], "xlarge");
        assert_eq!(json["dimensions"]["length"], 40.0);
        assert!(json["dimensions"].get("depth").is_none());
        assert_eq!(json["must_be_upright"], true);
    }

    #[test]
    fn test_item_size_parse() {
        assert_eq!("MEDIUM".parse::<ItemSize>().unwrap(), ItemSize::Medium);
        assert_eq!(ItemSize::default().as_str(), "small");
        assert!("huge".parse::<ItemSize>().is_err());
    }

    #[test]
    fn test_unknown_size_decodes_and_round_trips() {
        let item: ManifestItem =
            serde_json::from_str(r#"{"name":"Box","quantity":1,"size":"xxlarge"}"#).unwrap();
        assert_eq!(item.size, Some(ItemSize::Other("xxlarge".into())));
        assert_eq!(serde_json::to_value(&item).unwrap()["size"], "xxlarge");

        let item: ManifestItem = serde_json::from_str(r#"{"name":"Box","size":"Large"}"#).unwrap();
        assert_eq!(item.size, Some(ItemSize::Large));
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let item: ManifestItem = serde_json::from_str(
            r#"{"name":null,"quantity":null,"size":null,"weight":null,"price":null,"dimensions":null,"must_be_upright":null}"#,
        )
        .unwrap();
        assert_eq!(item, ManifestItem::default());
    }
}
