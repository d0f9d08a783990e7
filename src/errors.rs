//! Error taxonomy for PAY.JP SDK operations.
//!
//! Declares the SDK error domain, the closed set of error kinds with
//! stable codes, and the context keys under which kind-specific data is
//! attached to an error's user-info mapping.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Serialize;

use crate::types::{AnyJson, ErrorResponse, ErrorResult, Record, ResponseDetail};

/// Domain namespacing every error kind declared in this crate, keeping
/// them distinct from unrelated subsystems in a combined error-handling
/// path.
pub const ERROR_DOMAIN: &str = "jp.pay.sdk";

/// User-info key holding the human-readable description of an error.
pub const DESCRIPTION_KEY: &str = "description";

/// Underlying failure carried by [`Error::SystemError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Closed set of failure classifications within [`ERROR_DOMAIN`].
///
/// Codes are stable across releases; existing integrations match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorKind {
    /// The Apple Pay token is invalid.
    InvalidApplePayToken = 0,
    /// A local or transport-level failure.
    SystemError = 1,
    /// No body data or no usable response.
    InvalidResponse = 2,
    /// The error came back from the server side.
    ServiceError = 3,
    /// A payload could not be parsed as the expected JSON shape.
    InvalidJson = 4,
    /// Card form validation failed.
    FormInvalid = 5,
}

impl ErrorKind {
    /// Every kind, in code order.
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::InvalidApplePayToken,
        ErrorKind::SystemError,
        ErrorKind::InvalidResponse,
        ErrorKind::ServiceError,
        ErrorKind::InvalidJson,
        ErrorKind::FormInvalid,
    ];

    /// Stable numeric code of this kind within [`ERROR_DOMAIN`].
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Reverse lookup from a stable code.
    pub fn from_code(code: i32) -> Option<ErrorKind> {
        match code {
            0 => Some(ErrorKind::InvalidApplePayToken),
            1 => Some(ErrorKind::SystemError),
            2 => Some(ErrorKind::InvalidResponse),
            3 => Some(ErrorKind::ServiceError),
            4 => Some(ErrorKind::InvalidJson),
            5 => Some(ErrorKind::FormInvalid),
            _ => None,
        }
    }

    /// Stable string name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidApplePayToken => "invalid_apple_pay_token",
            ErrorKind::SystemError => "system_error",
            ErrorKind::InvalidResponse => "invalid_response",
            ErrorKind::ServiceError => "service_error",
            ErrorKind::InvalidJson => "invalid_json",
            ErrorKind::FormInvalid => "form_invalid",
        }
    }

    /// Context keys documented for this kind.
    pub const fn context_keys(self) -> &'static [ContextKey] {
        match self {
            ErrorKind::InvalidApplePayToken => &[ContextKey::InvalidApplePayTokenObject],
            ErrorKind::SystemError => &[ContextKey::SystemErrorObject],
            ErrorKind::InvalidResponse => &[ContextKey::InvalidResponseObject],
            ErrorKind::ServiceError => &[ContextKey::ServiceErrorObject],
            ErrorKind::InvalidJson => &[
                ContextKey::InvalidJsonObject,
                ContextKey::InvalidJsonErrorObject,
            ],
            ErrorKind::FormInvalid => &[],
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keys under which kind-specific context is stored in an error's
/// user-info mapping.
///
/// The value type behind each key is kind-specific; the constructing
/// [`Error`] variant is responsible for putting the right shape there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
    /// The rejected Apple Pay token payload ([`ErrorKind::InvalidApplePayToken`]).
    InvalidApplePayTokenObject,
    /// The underlying system-level failure detail ([`ErrorKind::SystemError`]).
    SystemErrorObject,
    /// Snapshot of the missing or malformed response ([`ErrorKind::InvalidResponse`]).
    InvalidResponseObject,
    /// The server-returned error payload ([`ErrorKind::ServiceError`]).
    ServiceErrorObject,
    /// The unparsable payload, base64-encoded ([`ErrorKind::InvalidJson`]).
    InvalidJsonObject,
    /// The underlying parse failure detail ([`ErrorKind::InvalidJson`]).
    InvalidJsonErrorObject,
}

impl ContextKey {
    /// Stable string identifier of this key.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContextKey::InvalidApplePayTokenObject => "invalid_apple_pay_token_object",
            ContextKey::SystemErrorObject => "system_error_object",
            ContextKey::InvalidResponseObject => "invalid_response_object",
            ContextKey::ServiceErrorObject => "service_error_object",
            ContextKey::InvalidJsonObject => "invalid_json_object",
            ContextKey::InvalidJsonErrorObject => "invalid_json_error_object",
        }
    }
}

impl std::fmt::Display for ContextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flattening contract shared by every error in [`ERROR_DOMAIN`].
///
/// Implementors supply the kind and the kind-specific context entries; the
/// provided methods assemble the generic user-info mapping and the
/// flattened [`ErrorRecord`].
pub trait DomainError: std::error::Error {
    /// Kind discriminant of this error.
    fn kind(&self) -> ErrorKind;

    /// Kind-specific context entries, keyed by [`ContextKey`] identifiers.
    fn additional_user_info(&self) -> Record<AnyJson> {
        Record::new()
    }

    /// Full user-info mapping: a description entry plus the kind-specific
    /// context entries.
    fn user_info(&self) -> Record<AnyJson> {
        let mut info = Record::new();
        info.insert(
            DESCRIPTION_KEY.to_owned(),
            AnyJson::from(self.to_string()),
        );
        info.extend(self.additional_user_info());
        info
    }

    /// Flatten into a (domain, code, user-info) record.
    fn to_record(&self) -> ErrorRecord {
        ErrorRecord {
            domain: ERROR_DOMAIN,
            code: self.kind().code(),
            user_info: self.user_info(),
        }
    }
}

/// An error flattened to its (domain, code, user-info) form, for consumers
/// that cannot match on [`Error`] variants, e.g. logging or bridging
/// layers.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    pub domain: &'static str,
    pub code: i32,
    pub user_info: Record<AnyJson>,
}

impl ErrorRecord {
    /// Context value stored under `key`, or `None` when absent.
    pub fn context_value(&self, key: ContextKey) -> Option<&AnyJson> {
        self.user_info.get(key.as_str())
    }
}

/// Error type for PAY.JP SDK operations.
///
/// One variant per [`ErrorKind`], each carrying exactly the payload
/// documented for its kind, so attaching context invalid for a given kind
/// is unrepresentable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Apple Pay token is invalid.
    #[error("invalid Apple Pay token")]
    InvalidApplePayToken {
        /// The rejected token payload.
        token: AnyJson,
    },

    /// A local or transport-level failure.
    #[error("{source}")]
    SystemError {
        #[source]
        source: BoxError,
    },

    /// No body data or no usable response.
    #[error("the response is missing or could not be read")]
    InvalidResponse {
        /// Snapshot of the offending response, when one was seen at all.
        response: Option<ResponseDetail>,
    },

    /// The error came back from the server side.
    #[error("{}", .response.message)]
    ServiceError { response: ErrorResponse },

    /// A payload could not be parsed as the expected JSON shape.
    #[error("unable to parse the payload into the expected shape")]
    InvalidJson {
        /// The raw body that failed to parse.
        body: Vec<u8>,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Card form validation failed. Field-level detail is reported through
    /// [`crate::form::FormError`].
    #[error("card form validation failed")]
    FormInvalid,
}

impl Error {
    /// Classify a non-2xx response body: a decodable service error payload
    /// becomes [`Error::ServiceError`], anything else [`Error::InvalidJson`].
    pub fn from_error_body(body: &[u8]) -> Error {
        match serde_json::from_slice::<ErrorResult>(body) {
            Ok(result) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "Service error decoded: status={} code={:?}",
                    result.error.status,
                    result.error.code
                );
                Error::ServiceError {
                    response: result.error,
                }
            }
            Err(source) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Undecodable error body ({} bytes): {}", body.len(), source);
                Error::InvalidJson {
                    body: body.to_vec(),
                    source: Some(source),
                }
            }
        }
    }

    /// Stable numeric code of this error within [`ERROR_DOMAIN`].
    pub fn code(&self) -> i32 {
        self.kind().code()
    }

    /// Context value documented for `key`, or `None` when this error does
    /// not carry it. Never panics.
    pub fn context_value(&self, key: ContextKey) -> Option<AnyJson> {
        self.additional_user_info().remove(key.as_str())
    }

    /// Returns the server error payload if the kind is [`ErrorKind::ServiceError`].
    pub fn service_error(&self) -> Option<&ErrorResponse> {
        match self {
            Error::ServiceError { response } => Some(response),
            _ => None,
        }
    }
}

impl DomainError for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidApplePayToken { .. } => ErrorKind::InvalidApplePayToken,
            Error::SystemError { .. } => ErrorKind::SystemError,
            Error::InvalidResponse { .. } => ErrorKind::InvalidResponse,
            Error::ServiceError { .. } => ErrorKind::ServiceError,
            Error::InvalidJson { .. } => ErrorKind::InvalidJson,
            Error::FormInvalid => ErrorKind::FormInvalid,
        }
    }

    fn additional_user_info(&self) -> Record<AnyJson> {
        let mut info = Record::new();
        match self {
            Error::InvalidApplePayToken { token } => {
                info.insert(
                    ContextKey::InvalidApplePayTokenObject.as_str().to_owned(),
                    token.clone(),
                );
            }
            Error::SystemError { source } => {
                info.insert(
                    ContextKey::SystemErrorObject.as_str().to_owned(),
                    AnyJson::from(source.to_string()),
                );
            }
            Error::InvalidResponse { response } => {
                if let Some(detail) = response {
                    if let Ok(value) = serde_json::to_value(detail) {
                        info.insert(
                            ContextKey::InvalidResponseObject.as_str().to_owned(),
                            value,
                        );
                    }
                }
            }
            Error::ServiceError { response } => {
                if let Ok(value) = serde_json::to_value(response) {
                    info.insert(ContextKey::ServiceErrorObject.as_str().to_owned(), value);
                }
            }
            Error::InvalidJson { body, source } => {
                info.insert(
                    ContextKey::InvalidJsonObject.as_str().to_owned(),
                    AnyJson::from(STANDARD.encode(body)),
                );
                if let Some(source) = source {
                    info.insert(
                        ContextKey::InvalidJsonErrorObject.as_str().to_owned(),
                        AnyJson::from(source.to_string()),
                    );
                }
            }
            Error::FormInvalid => {}
        }
        info
    }
}

/// A specialized `Result` type for PAY.JP SDK operations.
pub type Result<T> = std::result::Result<T, Error>;
