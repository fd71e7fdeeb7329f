use crate::api::models::ApiError;
use crate::core::errors::{FieldError, LedgerError};
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[test]
fn test_error_status_mapping() {
    let cases = [
        (LedgerError::DuplicateMember("A".to_string()), StatusCode::CONFLICT),
        (LedgerError::MemberNotFound("A".to_string()), StatusCode::NOT_FOUND),
        (LedgerError::PaymentNotFound("p1".to_string()), StatusCode::NOT_FOUND),
        (LedgerError::InvalidSplitMember("A".to_string()), StatusCode::BAD_REQUEST),
        (LedgerError::EmptyRoster, StatusCode::BAD_REQUEST),
        (LedgerError::AttributionShortfall(10.0), StatusCode::BAD_REQUEST),
        (LedgerError::AttributionOverage(5.0), StatusCode::BAD_REQUEST),
        (LedgerError::SerializationError("bad".to_string()), StatusCode::UNPROCESSABLE_ENTITY),
        (LedgerError::StorageError("disk".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        (LedgerError::LoggingError("log".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (error, expected) in cases {
        assert_eq!(ApiError(error).into_response().status(), expected);
    }
}

#[test]
fn test_invalid_input_is_bad_request() {
    let error = LedgerError::InvalidInput(
        "amount".to_string(),
        FieldError {
            field: "amount".to_string(),
            title: "Invalid Amount".to_string(),
            description: "Amount must be greater than 0".to_string(),
        },
    );
    assert_eq!(ApiError::from(error).into_response().status(), StatusCode::BAD_REQUEST);
}
