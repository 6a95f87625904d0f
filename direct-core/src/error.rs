//! Error types for the Direct API crates.
//!
//! Every failure a client call can produce is folded into a single
//! `DirectError` enum so callers can tell transport problems, cancellation,
//! vendor error responses and contract mismatches apart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience type alias for Results using DirectError.
pub type DirectResult<T> = Result<T, DirectError>;

/// Unified error type for configuration, transport and API failures.
#[derive(Error, Debug)]
pub enum DirectError {
    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Network errors --
    /// Connection, DNS, TLS or body transfer failure.
    #[error("http error: {0}")]
    Http(String),

    /// The transport gave up waiting for the server.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The caller cancelled the call before it completed.
    #[error("request cancelled")]
    Cancelled,

    /// The server answered with a non-success status.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Vendor message when present, otherwise the raw response body.
        message: String,
        /// Structured vendor error document, when the body parsed as one.
        body: Option<ApiErrorBody>,
    },

    // -- Payload errors --
    /// A success response did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A request body could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<toml::de::Error> for DirectError {
    fn from(e: toml::de::Error) -> Self {
        DirectError::Config(e.to_string())
    }
}

/// Error document returned by the vendor alongside non-2xx statuses.
///
/// ```json
/// { "code": "invalid_params", "message": "The parameters of your request were invalid.", "metadata": { ... } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g. "invalid_params", "delivery_not_found").
    #[serde(default)]
    pub code: String,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Additional detail, shape varies by error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Caller-facing interpretation of a vendor status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 400: invalid parameters or undeliverable address.
    BadRequest,
    /// 401: missing or invalid bearer token.
    Unauthorized,
    /// 403: token lacks the required scope.
    Forbidden,
    /// 404: unknown customer, delivery or quote.
    NotFound,
    /// 409: state or idempotency conflict.
    Conflict,
    /// 422: semantic validation failure.
    Unprocessable,
    /// 429: rate limited.
    RateLimited,
    /// 5xx: vendor-side failure.
    Server,
    /// Any other non-success status.
    Other,
}

impl ApiErrorKind {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::Unprocessable,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

impl DirectError {
    /// Build an `Api` error from a status and the raw response body.
    ///
    /// The body is kept as the message unless it parses as a vendor error
    /// document with a non-empty message.
    pub fn from_response(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str::<ApiErrorBody>(raw_body).ok();
        let message = match body {
            Some(ref b) if !b.message.is_empty() => b.message.clone(),
            _ => raw_body.to_string(),
        };
        DirectError::Api {
            status,
            message,
            body,
        }
    }

    /// The HTTP status carried by an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            DirectError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify an `Api` error by its status.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        self.status().map(ApiErrorKind::from_status)
    }

    /// Whether this error came from a caller-requested cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DirectError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_structured_body() {
        let err = DirectError::from_response(
            404,
            r#"{"code":"delivery_not_found","message":"The requested delivery does not exist."}"#,
        );
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.api_kind(), Some(ApiErrorKind::NotFound));
        match err {
            DirectError::Api { message, body, .. } => {
                assert_eq!(message, "The requested delivery does not exist.");
                assert_eq!(body.unwrap().code, "delivery_not_found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_response_plain_body() {
        let err = DirectError::from_response(502, "Bad Gateway");
        assert_eq!(err.api_kind(), Some(ApiErrorKind::Server));
        assert_eq!(err.to_string(), "api error (status 502): Bad Gateway");
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::BadRequest);
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Unauthorized);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Forbidden);
        assert_eq!(ApiErrorKind::from_status(409), ApiErrorKind::Conflict);
        assert_eq!(ApiErrorKind::from_status(422), ApiErrorKind::Unprocessable);
        assert_eq!(ApiErrorKind::from_status(429), ApiErrorKind::RateLimited);
        assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(418), ApiErrorKind::Other);
    }

    #[test]
    fn test_non_api_errors_carry_no_status() {
        assert_eq!(DirectError::Cancelled.status(), None);
        assert!(DirectError::Cancelled.is_cancelled());
        assert!(DirectError::Decode("x".into()).api_kind().is_none());
    }

    #[test]
    fn test_direct_error_display() {
        let err = DirectError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }
}
