//! SDK configuration supplied by the integrating application.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use bon::Builder;

/// Initial settings for the SDK.
///
/// Built once at startup and shared read-only with the components that
/// need it.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Public API key issued to the integrating application.
    #[builder(into)]
    pub public_key: String,

    /// Locale preference for service-rendered messages.
    #[builder(into)]
    pub locale: Option<String>,
}

impl SdkConfig {
    /// Configuration holding only a public key.
    pub fn new(public_key: impl Into<String>) -> SdkConfig {
        SdkConfig::builder().public_key(public_key).build()
    }

    /// `Authorization` header value derived from the public key.
    pub fn authorization(&self) -> String {
        let credentials = STANDARD.encode(format!("{}:", self.public_key));
        format!("Basic {credentials}")
    }
}
