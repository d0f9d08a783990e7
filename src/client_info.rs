//! Client metadata attached to SDK requests for diagnostics.

use bon::Builder;
use serde::Serialize;

use crate::SDK_VERSION;

/// Identifies the SDK build and host platform to the service.
///
/// The serialized form uses the service's wire field names and is sent in
/// a client-info request header by the networking layer.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientInfo {
    /// SDK bindings identifier, e.g. `"jp.pay.rust"`.
    #[builder(into)]
    pub bindings_name: String,

    /// SDK bindings version.
    #[builder(into)]
    pub bindings_version: String,

    /// Wrapper plugin identifier, when the SDK is embedded by another
    /// toolkit.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings_plugin: Option<String>,

    /// Host descriptor, e.g. `"rust; linux; x86_64"`.
    #[builder(into)]
    #[serde(rename = "uname")]
    pub uname_string: String,

    /// Platform identifier.
    #[builder(into)]
    pub platform: String,

    /// Publisher of the integrating application.
    #[builder(into)]
    pub publisher: String,

    /// Which card form produced the request, when one did.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_form_type: Option<String>,
}

impl ClientInfo {
    /// Standard metadata for this SDK build, optionally tagged with the
    /// embedding plugin and publisher.
    pub fn make_info(plugin: Option<&str>, publisher: Option<&str>) -> ClientInfo {
        ClientInfo::builder()
            .bindings_name("jp.pay.rust")
            .bindings_version(SDK_VERSION)
            .maybe_bindings_plugin(plugin)
            .uname_string(format!(
                "rust; {}; {}",
                std::env::consts::OS,
                std::env::consts::ARCH
            ))
            .platform("rust")
            .publisher(publisher.unwrap_or("payjp"))
            .build()
    }

    /// `bindings_name/bindings_version`, suffixed with `@plugin` when a
    /// plugin is set.
    pub fn binding_info(&self) -> String {
        let mut info = format!("{}/{}", self.bindings_name, self.bindings_version);
        if let Some(plugin) = &self.bindings_plugin {
            info.push('@');
            info.push_str(plugin);
        }
        info
    }

    /// Value for the `User-Agent` header.
    pub fn user_agent(&self) -> String {
        format!("{}; {}", self.binding_info(), self.uname_string)
    }

    /// JSON rendering for the client-info request header.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for ClientInfo {
    fn default() -> Self {
        ClientInfo::make_info(None, None)
    }
}
