//! Crate-wide constants.

/// Application name, used for config and log directories.
pub const APP_NAME: &str = "direct";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Public API origin of the delivery service.
pub const DEFAULT_BASE_URL: &str = "https://api.uber.com";

/// REST API version prefix.
pub const API_VERSION: &str = "v1";

/// Default transport request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default transport connect timeout in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 15_000;

/// Environment variable overriding the configured base URL.
pub const ENV_BASE_URL: &str = "DIRECT_BASE_URL";

/// Environment variable overriding the configured customer id.
pub const ENV_CUSTOMER_ID: &str = "DIRECT_CUSTOMER_ID";

/// Environment variable overriding the configured access token.
pub const ENV_ACCESS_TOKEN: &str = "DIRECT_ACCESS_TOKEN";

/// Maximum length the vendor accepts for pickup/dropoff notes.
pub const MAX_NOTES_LEN: usize = 280;
