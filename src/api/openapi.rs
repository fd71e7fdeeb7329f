use utoipa::OpenApi;

use crate::{
    api::models::{
        AddMemberRequest, AddMemberResponse, EqualPreviewRequest, EqualPreviewResponse, ErrorResponse,
        ExplicitPreviewRequest, ExplicitPreviewResponse,
    },
    core::models::{
        AppLog, Attribution, LedgerSnapshot, ParticipantBalance, PaymentInput, PaymentRecord, SettlementSummary,
        SplitInput, Transfer,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_members,
        super::handlers::add_member,
        super::handlers::reset_ledger,
        super::handlers::list_payments,
        super::handlers::add_payment,
        super::handlers::remove_payment,
        super::handlers::payment_history,
        super::handlers::preview_equal,
        super::handlers::preview_explicit,
        super::handlers::get_balances,
        super::handlers::get_settlement,
        super::handlers::get_report,
        super::handlers::export_snapshot,
        super::handlers::import_snapshot,
        super::handlers::get_app_logs
    ),
    components(schemas(
        AddMemberRequest,
        AddMemberResponse,
        EqualPreviewRequest,
        EqualPreviewResponse,
        ExplicitPreviewRequest,
        ExplicitPreviewResponse,
        ErrorResponse,
        PaymentInput,
        SplitInput,
        PaymentRecord,
        Attribution,
        ParticipantBalance,
        Transfer,
        SettlementSummary,
        LedgerSnapshot,
        AppLog
    )),
    info(
        title = "Warikan API",
        description = "API for splitting shared bills and settling up",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
