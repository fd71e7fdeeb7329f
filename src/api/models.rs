use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::core::errors::LedgerError;
use crate::core::models::Shares;

#[derive(Deserialize, ToSchema)]
pub struct AddMemberRequest {
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct AddMemberResponse {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct EqualPreviewRequest {
    pub amount: f64,
    #[serde(default)]
    pub targets: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct EqualPreviewResponse {
    pub targets: Vec<String>,
    pub per_person: Option<i64>,
}

#[derive(Deserialize, ToSchema)]
pub struct ExplicitPreviewRequest {
    pub amount: f64,
    #[serde(default)]
    pub entries: BTreeMap<String, f64>,
}

#[derive(Serialize, ToSchema)]
pub struct ExplicitPreviewResponse {
    pub details: Shares,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub struct ApiError(pub LedgerError);

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            LedgerError::InvalidInput(..)
            | LedgerError::InvalidSplitMember(_)
            | LedgerError::EmptyRoster
            | LedgerError::AttributionShortfall(_)
            | LedgerError::AttributionOverage(_) => StatusCode::BAD_REQUEST,
            LedgerError::DuplicateMember(_) => StatusCode::CONFLICT,
            LedgerError::MemberNotFound(_) | LedgerError::PaymentNotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::SerializationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LedgerError::StorageError(_) | LedgerError::LoggingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_message = match &self.0 {
            LedgerError::InvalidInput(_, detail) => format!("{}: {}", detail.title, detail.description),
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
