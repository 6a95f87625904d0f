//! Direct API - typed HTTP client for the Direct delivery REST API.
//!
//! Covers the seven customer-scoped operations: create quote, create, list,
//! update, get and cancel delivery, and proof-of-delivery retrieval. The
//! caller supplies the bearer token; the client performs no retries, token
//! refresh or pagination.
//!
//! ```no_run
//! # async fn run() -> direct_core::DirectResult<()> {
//! use direct_api::DirectClient;
//! use direct_core::config::ApiConfig;
//! use direct_models::CreateQuoteRequest;
//!
//! let config = ApiConfig {
//!     customer_id: "cust_123".into(),
//!     access_token: "token".into(),
//!     ..Default::default()
//! };
//! let client = DirectClient::from_config(&config)?;
//! let quote = client
//!     .create_quote(&CreateQuoteRequest::new("20 W 34th St", "285 Fulton St"), None)
//!     .await?;
//! println!("{} {} {}", quote.id, quote.fee, quote.currency);
//! # Ok(())
//! # }
//! ```

pub mod cancel;
pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export key types
pub use cancel::CancelToken;
pub use client::DirectClient;
pub use endpoints::deliveries::ListDeliveriesQuery;
pub use endpoints::proof::decode_proof_image;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
