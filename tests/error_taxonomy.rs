use std::collections::HashSet;

use payjp_core::errors::{
    ContextKey, DESCRIPTION_KEY, DomainError, ERROR_DOMAIN, Error, ErrorKind,
};
use payjp_core::form::FormError;
use payjp_core::types::{ErrorResponse, ResponseDetail};
use serde_json::json;

#[test]
fn test_domain_is_non_empty_and_stable() {
    assert!(!ERROR_DOMAIN.is_empty());
    assert_eq!(ERROR_DOMAIN, ERROR_DOMAIN);
    assert!(!payjp_core::SDK_VERSION.is_empty());
    assert!(payjp_core::SDK_VERSION_NUMBER >= 1.0);
}

#[test]
fn test_kind_codes_do_not_collide() {
    let codes: HashSet<i32> = ErrorKind::ALL.iter().map(|kind| kind.code()).collect();
    assert_eq!(codes.len(), ErrorKind::ALL.len());
}

#[test]
fn test_service_error_round_trips_exact_payload() {
    let response = ErrorResponse {
        status: 402,
        message: "card_declined".to_string(),
        param: None,
        code: Some("card_declined".to_string()),
        error_type: "card_error".to_string(),
    };
    let error = Error::ServiceError {
        response: response.clone(),
    };

    assert_eq!(
        error.context_value(ContextKey::ServiceErrorObject),
        Some(serde_json::to_value(&response).unwrap())
    );
    assert_eq!(error.context_value(ContextKey::InvalidJsonObject), None);
}

#[test]
fn test_invalid_json_carries_both_keys_independently() {
    let body = b"not json at all".to_vec();
    let source = serde_json::from_slice::<serde_json::Value>(&body).unwrap_err();
    let error = Error::InvalidJson {
        body: body.clone(),
        source: Some(source),
    };

    let payload = error
        .context_value(ContextKey::InvalidJsonObject)
        .expect("payload key must be attached");
    let detail = error
        .context_value(ContextKey::InvalidJsonErrorObject)
        .expect("parse failure key must be attached");
    assert!(payload.is_string());
    assert!(detail.is_string());
    assert_ne!(payload, detail);
}

#[test]
fn test_invalid_json_without_source_omits_error_key() {
    let error = Error::InvalidJson {
        body: b"{}".to_vec(),
        source: None,
    };

    assert!(
        error
            .context_value(ContextKey::InvalidJsonObject)
            .is_some()
    );
    assert_eq!(
        error.context_value(ContextKey::InvalidJsonErrorObject),
        None
    );
}

#[test]
fn test_apple_pay_token_round_trips() {
    let token = json!({ "transactionIdentifier": "abc123", "paymentData": "..." });
    let error = Error::InvalidApplePayToken {
        token: token.clone(),
    };

    assert_eq!(error.kind(), ErrorKind::InvalidApplePayToken);
    assert_eq!(
        error.context_value(ContextKey::InvalidApplePayTokenObject),
        Some(token)
    );
}

#[test]
fn test_invalid_response_snapshot_round_trips() {
    let detail = ResponseDetail {
        status_code: 500,
        url: Some("https://api.pay.jp/v1/tokens".parse().unwrap()),
    };
    let error = Error::InvalidResponse {
        response: Some(detail.clone()),
    };

    assert_eq!(
        error.context_value(ContextKey::InvalidResponseObject),
        Some(serde_json::to_value(&detail).unwrap())
    );

    let error = Error::InvalidResponse { response: None };
    assert_eq!(error.context_value(ContextKey::InvalidResponseObject), None);
}

#[test]
fn test_records_share_the_domain_across_error_types() {
    let api_error = Error::FormInvalid;
    let form_error = FormError::CvcEmpty {
        value: None,
        instant: false,
    };

    let api_record = api_error.to_record();
    let form_record = form_error.to_record();
    assert_eq!(api_record.domain, form_record.domain);
    assert_eq!(api_record.code, form_record.code);
    assert!(api_record.user_info.contains_key(DESCRIPTION_KEY));
    assert!(form_record.user_info.contains_key(DESCRIPTION_KEY));
}

#[test]
fn test_record_serializes_for_logging() {
    let error = Error::from_error_body(
        &serde_json::to_vec(&json!({
            "error": {
                "status": 402,
                "message": "Card declined",
                "code": "card_declined",
                "type": "card_error"
            }
        }))
        .unwrap(),
    );

    let value = serde_json::to_value(error.to_record()).unwrap();
    assert_eq!(value["domain"], json!(ERROR_DOMAIN));
    assert_eq!(value["code"], json!(ErrorKind::ServiceError.code()));
    assert_eq!(
        value["user_info"]["service_error_object"]["code"],
        json!("card_declined")
    );
}
