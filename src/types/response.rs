//! Server error payload and response snapshot types.

use serde::{Deserialize, Serialize};
use url::Url;

/// Error object the service returns in a non-2xx body.
///
/// cf. [https://pay.jp/docs/api/#error](https://pay.jp/docs/api/#error)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status the service reported inside the payload.
    pub status: u16,
    /// Human-readable message describing the failure.
    pub message: String,
    /// Request parameter the failure refers to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Machine-readable error code, e.g. `"card_declined"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error category reported by the service, e.g. `"card_error"`.
    #[serde(rename = "type")]
    pub error_type: String,
}

/// Envelope the service wraps an [`ErrorResponse`] in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: ErrorResponse,
}

/// Transport-free snapshot of a response that could not be consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDetail {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}
