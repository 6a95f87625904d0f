//! API endpoint modules organized by resource.
//!
//! Each module adds typed methods to `DirectClient` for one group of
//! related endpoints.

pub mod deliveries;
pub mod proof;
pub mod quotes;
