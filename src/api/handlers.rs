use crate::{
    api::models::*,
    core::{
        models::{AppLog, LedgerSnapshot, ParticipantBalance, PaymentInput, PaymentRecord, SettlementSummary},
        services::LedgerService,
    },
    infrastructure::{logging::in_memory::InMemoryLogging, storage::Storage},
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use std::sync::Arc;

pub type AppService = LedgerService<InMemoryLogging, Box<dyn Storage>>;

pub fn api_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/members", get(list_members).post(add_member))
        .route("/reset", post(reset_ledger))
        .route("/payments", get(list_payments).post(add_payment))
        .route("/payments/history", get(payment_history))
        .route("/payments/{payment_id}", delete(remove_payment))
        .route("/preview/equal", post(preview_equal))
        .route("/preview/explicit", post(preview_explicit))
        .route("/balances", get(get_balances))
        .route("/settlement", get(get_settlement))
        .route("/report", get(get_report))
        .route("/snapshot", get(export_snapshot).put(import_snapshot))
        .route("/logs", get(get_app_logs))
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/api/members",
    responses(
        (status = 200, description = "Registered members in registration order", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_members(State(service): State<Arc<AppService>>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(service.list_members().await?))
}

#[utoipa::path(
    post,
    path = "/api/members",
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Member registered", body = AddMemberResponse),
        (status = 400, description = "Invalid name", body = ErrorResponse),
        (status = 409, description = "Member already registered", body = ErrorResponse)
    )
)]
pub async fn add_member(
    State(service): State<Arc<AppService>>,
    Json(req): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<AddMemberResponse>), ApiError> {
    let name = service.add_member(&req.name).await?;
    Ok((StatusCode::CREATED, Json(AddMemberResponse { name })))
}

#[utoipa::path(
    post,
    path = "/api/reset",
    responses(
        (status = 204, description = "Members and payments cleared"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn reset_ledger(State(service): State<Arc<AppService>>) -> Result<StatusCode, ApiError> {
    service.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/payments",
    responses(
        (status = 200, description = "Recorded payments, oldest first", body = Vec<PaymentRecord>)
    )
)]
pub async fn list_payments(State(service): State<Arc<AppService>>) -> Result<Json<Vec<PaymentRecord>>, ApiError> {
    Ok(Json(service.list_payments().await?))
}

#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = PaymentInput,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentRecord),
        (status = 400, description = "Invalid amount or split", body = ErrorResponse),
        (status = 404, description = "Payer not registered", body = ErrorResponse)
    )
)]
pub async fn add_payment(
    State(service): State<Arc<AppService>>,
    Json(req): Json<PaymentInput>,
) -> Result<(StatusCode, Json<PaymentRecord>), ApiError> {
    let payment = service.add_payment(req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

#[utoipa::path(
    delete,
    path = "/api/payments/{payment_id}",
    params(
        ("payment_id" = String, Path, description = "ID of the payment")
    ),
    responses(
        (status = 200, description = "Payment removed", body = PaymentRecord),
        (status = 404, description = "Payment not found", body = ErrorResponse)
    )
)]
pub async fn remove_payment(
    State(service): State<Arc<AppService>>,
    Path(payment_id): Path<String>,
) -> Result<Json<PaymentRecord>, ApiError> {
    Ok(Json(service.remove_payment(&payment_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/payments/history",
    responses(
        (status = 200, description = "Readable payment history, newest first", body = Vec<String>)
    )
)]
pub async fn payment_history(State(service): State<Arc<AppService>>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(service.history().await?))
}

#[utoipa::path(
    post,
    path = "/api/preview/equal",
    request_body = EqualPreviewRequest,
    responses(
        (status = 200, description = "Targets and per-person share of an equal split", body = EqualPreviewResponse),
        (status = 400, description = "Target not registered", body = ErrorResponse)
    )
)]
pub async fn preview_equal(
    State(service): State<Arc<AppService>>,
    Json(req): Json<EqualPreviewRequest>,
) -> Result<Json<EqualPreviewResponse>, ApiError> {
    let (targets, per_person) = service.preview_equal(req.amount, &req.targets).await?;
    Ok(Json(EqualPreviewResponse { targets, per_person }))
}

#[utoipa::path(
    post,
    path = "/api/preview/explicit",
    request_body = ExplicitPreviewRequest,
    responses(
        (status = 200, description = "Shares the explicit split would store", body = ExplicitPreviewResponse),
        (status = 400, description = "Shares do not reconcile with the amount", body = ErrorResponse)
    )
)]
pub async fn preview_explicit(
    State(service): State<Arc<AppService>>,
    Json(req): Json<ExplicitPreviewRequest>,
) -> Result<Json<ExplicitPreviewResponse>, ApiError> {
    let details = service.preview_explicit(req.amount, &req.entries).await?;
    Ok(Json(ExplicitPreviewResponse { details }))
}

#[utoipa::path(
    get,
    path = "/api/balances",
    responses(
        (status = 200, description = "Net balance per member", body = Vec<ParticipantBalance>)
    )
)]
pub async fn get_balances(State(service): State<Arc<AppService>>) -> Result<Json<Vec<ParticipantBalance>>, ApiError> {
    Ok(Json(service.balances().await?.into_inner()))
}

#[utoipa::path(
    get,
    path = "/api/settlement",
    responses(
        (status = 200, description = "Balances and clearing transfers", body = SettlementSummary)
    )
)]
pub async fn get_settlement(State(service): State<Arc<AppService>>) -> Result<Json<SettlementSummary>, ApiError> {
    Ok(Json(service.settlement().await?))
}

#[utoipa::path(
    get,
    path = "/api/report",
    responses(
        (status = 200, description = "Plain-text settlement report", body = String, content_type = "text/plain")
    )
)]
pub async fn get_report(State(service): State<Arc<AppService>>) -> Result<String, ApiError> {
    Ok(service.report().await?)
}

#[utoipa::path(
    get,
    path = "/api/snapshot",
    responses(
        (status = 200, description = "Full ledger snapshot", body = LedgerSnapshot)
    )
)]
pub async fn export_snapshot(State(service): State<Arc<AppService>>) -> Result<Json<LedgerSnapshot>, ApiError> {
    Ok(Json(service.export_snapshot().await?))
}

#[utoipa::path(
    put,
    path = "/api/snapshot",
    request_body = LedgerSnapshot,
    responses(
        (status = 204, description = "Ledger replaced by the snapshot"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn import_snapshot(
    State(service): State<Arc<AppService>>,
    Json(snapshot): Json<LedgerSnapshot>,
) -> Result<StatusCode, ApiError> {
    service.import_snapshot(snapshot).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Application action log", body = Vec<AppLog>)
    )
)]
pub async fn get_app_logs(State(service): State<Arc<AppService>>) -> Result<Json<Vec<AppLog>>, ApiError> {
    Ok(Json(service.get_app_logs().await?))
}
