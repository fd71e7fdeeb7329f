use super::roster::Roster;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

/// Explicit debts per participant, in roster order.
pub type Shares = IndexMap<String, f64>;

/// How the cost of a payment is assigned across participants.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Attribution {
    /// Each target owes `amount / targets.len()`.
    Equal { targets: Vec<String> },
    /// Each named participant owes exactly the listed amount.
    Explicit { details: Shares },
}

impl Attribution {
    pub fn equal<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Attribution::Equal {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn explicit<I, S>(details: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Attribution::Explicit {
            details: details.into_iter().map(|(name, debt)| (name.into(), debt)).collect(),
        }
    }

    /// True for an equal split whose targets are exactly the whole roster.
    pub fn covers_roster(&self, roster: &Roster) -> bool {
        match self {
            Attribution::Equal { targets } => {
                targets.len() == roster.len() && roster.iter().all(|m| targets.contains(m))
            }
            Attribution::Explicit { .. } => false,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PaymentRecord {
    pub id: String,
    pub payer: String,
    pub amount: f64,
    pub attribution: Attribution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub recorded_at: DateTime<Utc>,
}

impl PaymentRecord {
    pub fn new(payer: impl Into<String>, amount: f64, attribution: Attribution) -> Self {
        PaymentRecord {
            id: Uuid::new_v4().to_string(),
            payer: payer.into(),
            amount,
            attribution,
            memo: None,
            recorded_at: Utc::now(),
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}

/// Split as entered on the payment form, before it is resolved into an [`Attribution`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SplitInput {
    /// An empty target list means everyone on the roster.
    Equal {
        #[serde(default)]
        targets: Vec<String>,
    },
    /// Members left out (or entered as zero) share whatever remains of the amount.
    Explicit {
        #[serde(default)]
        entries: BTreeMap<String, f64>,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PaymentInput {
    pub payer: String,
    pub amount: f64,
    #[serde(default)]
    pub memo: Option<String>,
    pub split: SplitInput,
}
