//! Direct Core - shared foundation for the Direct API crates.
//!
//! - Configuration (API origin, customer id, bearer token, logging)
//! - The `DirectError` taxonomy
//! - Structured logging with tracing
//! - Constants and platform directories

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::{ConfigHandle, DirectConfig};
pub use error::{ApiErrorBody, ApiErrorKind, DirectError, DirectResult};
pub use logging::init_logging;
