//! Verification requirements and proofs.
//!
//! Requirements describe the evidence a courier must capture at a stop
//! (photo, signature, barcode scan, ID check). Proofs carry what was
//! actually captured once the stop is completed.

use serde::{Deserialize, Serialize};

/// Evidence required at a pickup, dropoff or return stop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<BarcodeSpec>,

    /// Whether a photo must be taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_requirement: Option<SignatureRequirement>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<IdentificationSpec>,
}

/// Dropoff-side requirements; unlike the generic form, accepts several barcodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropoffVerification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_requirement: Option<SignatureRequirement>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<Vec<BarcodeSpec>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<IdentificationSpec>,
}

/// Signature capture settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureRequirement {
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_signer_name: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_signer_relationship: Option<bool>,
}

/// A barcode the courier must scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeSpec {
    /// The encoded value.
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub value: String,

    /// Symbology, e.g. CODE39, CODE39_FULL_ASCII, CODE128, QR.
    #[serde(rename = "type", deserialize_with = "super::de::null_as_default")]
    pub barcode_type: String,
}

/// Identification check (e.g. minimum age).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentificationSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<i32>,
}

/// Evidence captured at a stop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationProof {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<ProofImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<BarcodeProof>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_proof: Option<SignatureProof>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProofImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A scanned barcode and the scan outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeProof {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub barcode_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_result: Option<BarcodeScanResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeScanResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,

    /// RFC 3339.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureProof {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropoff_verification_serialize() {
        let verification = DropoffVerification {
            picture: Some(true),
            signature_requirement: Some(SignatureRequirement {
                enabled: true,
                collect_signer_name: Some(true),
                collect_signer_relationship: None,
            }),
            barcodes: Some(vec![BarcodeSpec {
                value: "W1129082649-1".into(),
                barcode_type: "CODE128".into(),
            }]),
            identification: Some(IdentificationSpec { min_age: Some(21) }),
        };
        let json = serde_json::to_value(&verification).unwrap();
        assert_eq!(json["picture"], true);
        assert_eq!(json["signature_requirement"]["collect_signer_name"], true);
        assert!(json["signature_requirement"]
            .get("collect_signer_relationship")
            .is_none());
        assert_eq!(json["barcodes"][0]["type"], "CODE128");
        assert_eq!(json["identification"]["min_age"], 21);
    }

    #[test]
    fn test_verification_proof_decode() {
        let proof: VerificationProof = serde_json::from_str(
            r#"{
                "picture": { "image_url": "https://img.example.com/p.png" },
                "barcodes": {
                    "value": "W1129082649-1",
                    "type": "CODE128",
                    "scan_result": { "outcome": "SUCCESS", "timestamp": "2024-03-01T18:02:11Z" }
                },
                "signature_proof": { "image_url": "https://img.example.com/s.png", "signer_name": "Ada" }
            }"#,
        )
        .unwrap();
        let barcode = proof.barcodes.unwrap();
        assert_eq!(barcode.barcode_type.as_deref(), Some("CODE128"));
        assert_eq!(
            barcode.scan_result.unwrap().outcome.as_deref(),
            Some("SUCCESS")
        );
        assert_eq!(
            proof.signature_proof.unwrap().signer_name.as_deref(),
            Some("Ada")
        );
    }

    #[test]
    fn test_requirements_with_nulls_decode() {
        let req: DropoffVerification = serde_json::from_str(
            r#"{"picture":null,"signature_requirement":{"enabled":null,"collect_signer_name":null},"barcodes":[{"value":null,"type":null}],"identification":null}"#,
        )
        .unwrap();
        assert!(!req.signature_requirement.unwrap().enabled);
        let barcodes = req.barcodes.unwrap();
        assert_eq!(barcodes[0].value, "");
        assert_eq!(barcodes[0].barcode_type, "");
    }
}
