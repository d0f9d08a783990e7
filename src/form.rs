//! Card form validation errors.
//!
//! Field-level failures raised while validating card input. Every variant
//! flattens into [`ErrorKind::FormInvalid`](crate::errors::ErrorKind::FormInvalid)
//! within the SDK error domain.

use crate::errors::{DomainError, ErrorKind};

/// A card form field that failed validation.
///
/// `value` holds the rejected input as entered. `instant` is `true` when
/// the failure was detected while the user was still typing rather than on
/// submit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("card number is required")]
    CardNumberEmpty { value: Option<String>, instant: bool },

    #[error("card number is invalid")]
    CardNumberInvalid { value: Option<String>, instant: bool },

    #[error("card brand is not accepted")]
    CardNumberInvalidBrand { value: Option<String>, instant: bool },

    #[error("expiration date is required")]
    ExpirationEmpty { value: Option<String>, instant: bool },

    #[error("expiration date is invalid")]
    ExpirationInvalid { value: Option<String>, instant: bool },

    #[error("security code is required")]
    CvcEmpty { value: Option<String>, instant: bool },

    #[error("security code is invalid")]
    CvcInvalid { value: Option<String>, instant: bool },

    #[error("cardholder name is required")]
    CardHolderEmpty { value: Option<String>, instant: bool },

    #[error("cardholder name is invalid")]
    CardHolderInvalid { value: Option<String>, instant: bool },

    #[error("cardholder name length is invalid")]
    CardHolderInvalidLength { value: Option<String>, instant: bool },

    #[error("email is required")]
    EmailEmpty { value: Option<String>, instant: bool },

    #[error("phone number is required")]
    PhoneNumberEmpty { value: Option<String>, instant: bool },

    #[error("phone number is invalid")]
    PhoneNumberInvalid { value: Option<String>, instant: bool },
}

impl FormError {
    /// The rejected input, when the field had one.
    pub fn value(&self) -> Option<&str> {
        match self {
            FormError::CardNumberEmpty { value, .. }
            | FormError::CardNumberInvalid { value, .. }
            | FormError::CardNumberInvalidBrand { value, .. }
            | FormError::ExpirationEmpty { value, .. }
            | FormError::ExpirationInvalid { value, .. }
            | FormError::CvcEmpty { value, .. }
            | FormError::CvcInvalid { value, .. }
            | FormError::CardHolderEmpty { value, .. }
            | FormError::CardHolderInvalid { value, .. }
            | FormError::CardHolderInvalidLength { value, .. }
            | FormError::EmailEmpty { value, .. }
            | FormError::PhoneNumberEmpty { value, .. }
            | FormError::PhoneNumberInvalid { value, .. } => value.as_deref(),
        }
    }

    /// Whether the failure was detected mid-typing.
    pub fn is_instant(&self) -> bool {
        match self {
            FormError::CardNumberEmpty { instant, .. }
            | FormError::CardNumberInvalid { instant, .. }
            | FormError::CardNumberInvalidBrand { instant, .. }
            | FormError::ExpirationEmpty { instant, .. }
            | FormError::ExpirationInvalid { instant, .. }
            | FormError::CvcEmpty { instant, .. }
            | FormError::CvcInvalid { instant, .. }
            | FormError::CardHolderEmpty { instant, .. }
            | FormError::CardHolderInvalid { instant, .. }
            | FormError::CardHolderInvalidLength { instant, .. }
            | FormError::EmailEmpty { instant, .. }
            | FormError::PhoneNumberEmpty { instant, .. }
            | FormError::PhoneNumberInvalid { instant, .. } => *instant,
        }
    }
}

impl DomainError for FormError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::FormInvalid
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{ERROR_DOMAIN, ErrorKind};

    use super::*;

    #[test]
    fn test_every_form_error_maps_to_form_invalid() {
        let errors = [
            FormError::CardNumberEmpty {
                value: None,
                instant: true,
            },
            FormError::ExpirationInvalid {
                value: Some("13/99".to_string()),
                instant: false,
            },
            FormError::CvcInvalid {
                value: Some("1".to_string()),
                instant: true,
            },
        ];

        for error in errors {
            assert_eq!(error.kind(), ErrorKind::FormInvalid);
        }
    }

    #[test]
    fn test_accessors_expose_value_and_instant() {
        let error = FormError::CardNumberInvalid {
            value: Some("4242".to_string()),
            instant: true,
        };

        assert_eq!(error.value(), Some("4242"));
        assert!(error.is_instant());

        let error = FormError::CardHolderEmpty {
            value: None,
            instant: false,
        };
        assert_eq!(error.value(), None);
        assert!(!error.is_instant());
    }

    #[test]
    fn test_record_has_description_only() {
        let error = FormError::EmailEmpty {
            value: None,
            instant: false,
        };

        let record = error.to_record();
        assert_eq!(record.domain, ERROR_DOMAIN);
        assert_eq!(record.code, ErrorKind::FormInvalid.code());
        assert_eq!(record.user_info.len(), 1);
    }
}
