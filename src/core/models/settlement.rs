use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Net position of one participant: paid minus owed. Positive means the
/// participant is owed money.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ParticipantBalance {
    pub name: String,
    pub balance: f64,
}

/// Balances for every roster member, in roster order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Balances {
    entries: Vec<ParticipantBalance>,
}

impl Balances {
    pub fn new(entries: Vec<ParticipantBalance>) -> Self {
        Balances { entries }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.balance)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.balance).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticipantBalance> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_inner(self) -> Vec<ParticipantBalance> {
        self.entries
    }
}

/// `from` pays `to` the given amount.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SettlementSummary {
    pub total: f64,
    /// Present only when every payment is split equally across the whole roster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    pub balances: Vec<ParticipantBalance>,
    pub transfers: Vec<Transfer>,
}
