//! Direct Models - request and response payloads of the Direct delivery API.
//!
//! Every type mirrors the vendor's JSON exactly: field names are the wire
//! keys, unset optional fields are omitted rather than sent as `null`, and
//! response types tolerate missing fields so a sparse body still decodes.

pub mod models;

// Re-export key types
pub use models::delivery::{
    CreateDeliveryRequest, DeliverableAction, Delivery, ListDeliveriesResponse,
    UndeliverableAction, UpdateDeliveryRequest,
};
pub use models::fees::{UserFeesSummary, UserFeesSummaryTaxInfo};
pub use models::manifest::{Dimensions, ItemSize, ManifestItem, ManifestSummary};
pub use models::quote::{CreateQuoteRequest, Quote};
pub use models::stop::{DetailedAddress, LatLng, Stop, StructuredAddress};
pub use models::verification::{
    BarcodeProof, BarcodeScanResult, BarcodeSpec, DropoffVerification, IdentificationSpec,
    ProofImage, SignatureProof, SignatureRequirement, VerificationProof,
    VerificationRequirements,
};
