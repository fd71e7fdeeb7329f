use super::payment::PaymentRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Complete ledger state as persisted or exchanged with other tools.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
}
