use crate::constants::{
    LEDGER_RESET, MAX_MEMO_LENGTH, MAX_NAME_LENGTH, MAX_PAYMENT_AMOUNT, MEMBER_ADDED, PAYMENT_ADDED,
    PAYMENT_REMOVED, SNAPSHOT_IMPORTED,
};
use crate::core::attribution::{equal_targets, per_person_preview, resolve_explicit, resolve_split};
use crate::core::engine::{self, ReportStyle, SettleOptions};
use crate::core::errors::{FieldError, LedgerError};
use crate::core::models::{
    AppLog, Attribution, Balances, LedgerSnapshot, PaymentInput, PaymentRecord, SettlementSummary, Shares,
};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use serde_json::json;
use std::collections::BTreeMap;
use tracing::{info, warn};

pub const NO_MEMBERS_MESSAGE: &str = "Register members first.";
pub const NO_PAYMENTS_MESSAGE: &str = "No payments recorded yet.";

/// Owns the roster and payment list of one bill-splitting session and runs
/// the settlement engine over them on demand.
pub struct LedgerService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
    settle_options: SettleOptions,
    report_style: ReportStyle,
}

impl<L: LoggingService, S: Storage> LedgerService<L, S> {
    pub fn new(storage: S, logging: L) -> Self {
        LedgerService {
            storage,
            logging,
            settle_options: SettleOptions::default(),
            report_style: ReportStyle::default(),
        }
    }

    pub fn with_settings(mut self, settle_options: SettleOptions, report_style: ReportStyle) -> Self {
        self.settle_options = settle_options;
        self.report_style = report_style;
        self
    }

    async fn log_action(&self, action: &str, details: serde_json::Value) -> Result<(), LedgerError> {
        info!("{} {}", action, details);
        self.logging.log_action(action, details).await
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), LedgerError> {
        if value.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} cannot be empty", field),
                },
            ));
        }
        if value.chars().count() > max_length {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        if value.chars().any(|c| c.is_control() || "<>{}[]".contains(c)) {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} contains invalid characters", field),
                },
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: f64) -> Result<(), LedgerError> {
        if !amount.is_finite() {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Invalid Amount".to_string(),
                    description: "Amount must be a finite number".to_string(),
                },
            ));
        }
        if amount <= 0.0 {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Invalid Amount".to_string(),
                    description: "Amount must be greater than 0".to_string(),
                },
            ));
        }
        if amount > MAX_PAYMENT_AMOUNT {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Amount Too Large".to_string(),
                    description: format!("Amount cannot exceed {}", MAX_PAYMENT_AMOUNT),
                },
            ));
        }
        let cents = amount * 100.0;
        if (cents.round() - cents).abs() > 1e-6 {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Invalid Amount".to_string(),
                    description: "Amount cannot have more than 2 decimal places".to_string(),
                },
            ));
        }
        Ok(())
    }

    // MEMBERS

    pub async fn add_member(&self, name: &str) -> Result<String, LedgerError> {
        let name = name.trim();
        self.validate_string_input("name", name, MAX_NAME_LENGTH)?;
        if !self.storage.add_member(name).await? {
            warn!("Member {} already registered", name);
            return Err(LedgerError::DuplicateMember(name.to_string()));
        }
        self.log_action(MEMBER_ADDED, json!({ "name": name })).await?;
        Ok(name.to_string())
    }

    pub async fn list_members(&self) -> Result<Vec<String>, LedgerError> {
        Ok(self.storage.get_members().await?.into())
    }

    /// Clears members and payments.
    pub async fn reset(&self) -> Result<(), LedgerError> {
        self.storage.clear().await?;
        self.log_action(LEDGER_RESET, json!({})).await
    }

    // PAYMENTS

    pub async fn add_payment(&self, input: PaymentInput) -> Result<PaymentRecord, LedgerError> {
        let roster = self.storage.get_members().await?;
        if roster.is_empty() {
            return Err(LedgerError::EmptyRoster);
        }
        if !roster.contains(&input.payer) {
            warn!("Payer {} is not a registered member", input.payer);
            return Err(LedgerError::MemberNotFound(input.payer));
        }
        self.validate_amount_input("amount", input.amount)?;

        let memo = match input.memo.as_deref().map(str::trim) {
            Some(memo) if !memo.is_empty() => {
                self.validate_string_input("memo", memo, MAX_MEMO_LENGTH)?;
                Some(memo.to_string())
            }
            _ => None,
        };

        let attribution = resolve_split(&roster, input.amount, &input.split)?;
        let mut payment = PaymentRecord::new(input.payer, input.amount, attribution);
        payment.memo = memo;

        self.storage.save_payment(payment.clone()).await?;
        self.log_action(
            PAYMENT_ADDED,
            json!({
                "payment_id": payment.id,
                "payer": payment.payer,
                "amount": payment.amount,
                "memo": payment.memo,
            }),
        )
        .await?;

        Ok(payment)
    }

    pub async fn remove_payment(&self, payment_id: &str) -> Result<PaymentRecord, LedgerError> {
        let removed = self
            .storage
            .remove_payment(payment_id)
            .await?
            .ok_or_else(|| LedgerError::PaymentNotFound(payment_id.to_string()))?;
        self.log_action(
            PAYMENT_REMOVED,
            json!({ "payment_id": removed.id, "payer": removed.payer, "amount": removed.amount }),
        )
        .await?;
        Ok(removed)
    }

    pub async fn list_payments(&self) -> Result<Vec<PaymentRecord>, LedgerError> {
        self.storage.list_payments().await
    }

    /// Resolved targets of an equal split and the whole-unit share each would pay.
    pub async fn preview_equal(&self, amount: f64, selected: &[String]) -> Result<(Vec<String>, Option<i64>), LedgerError> {
        let roster = self.storage.get_members().await?;
        let targets = equal_targets(&roster, selected)?;
        let per_person = per_person_preview(amount, targets.len());
        Ok((targets, per_person))
    }

    /// Explicit shares the form would store for these entries, without storing anything.
    pub async fn preview_explicit(&self, amount: f64, entries: &BTreeMap<String, f64>) -> Result<Shares, LedgerError> {
        let roster = self.storage.get_members().await?;
        resolve_explicit(&roster, amount, entries)
    }

    /// Payment history lines, newest first.
    pub async fn history(&self) -> Result<Vec<String>, LedgerError> {
        let roster = self.storage.get_members().await?;
        let payments = self.storage.list_payments().await?;
        let cur = &self.report_style.currency;

        Ok(payments
            .iter()
            .rev()
            .map(|p| {
                let (label, shares) = match &p.attribution {
                    Attribution::Equal { targets } => {
                        let shares = if p.attribution.covers_roster(&roster) {
                            "everyone".to_string()
                        } else {
                            targets.join(",")
                        };
                        ("", shares)
                    }
                    Attribution::Explicit { details } => {
                        let shares = details
                            .iter()
                            .map(|(name, debt)| format!("{}:{}", name, debt.trunc() as i64))
                            .collect::<Vec<_>>()
                            .join(", ");
                        (" [explicit]", shares)
                    }
                };
                format!(
                    "{}: {} paid {}{}{} (shares: {})",
                    p.memo.as_deref().unwrap_or("(no memo)"),
                    p.payer,
                    p.amount.trunc() as i64,
                    cur,
                    label,
                    shares
                )
            })
            .collect())
    }

    // SETTLEMENT

    pub async fn balances(&self) -> Result<Balances, LedgerError> {
        let roster = self.storage.get_members().await?;
        let payments = self.storage.list_payments().await?;
        Ok(engine::compute_balances(&roster, &payments))
    }

    pub async fn settlement(&self) -> Result<SettlementSummary, LedgerError> {
        let roster = self.storage.get_members().await?;
        let payments = self.storage.list_payments().await?;
        Ok(engine::summarize(&roster, &payments, &self.settle_options))
    }

    /// Shareable settlement text, or a hint when there is nothing to compute.
    pub async fn report(&self) -> Result<String, LedgerError> {
        let roster = self.storage.get_members().await?;
        if roster.is_empty() {
            return Ok(NO_MEMBERS_MESSAGE.to_string());
        }
        let payments = self.storage.list_payments().await?;
        if payments.is_empty() {
            return Ok(NO_PAYMENTS_MESSAGE.to_string());
        }
        let summary = engine::summarize(&roster, &payments, &self.settle_options);
        Ok(engine::format_report(
            summary.total,
            summary.average,
            &summary.transfers,
            &self.report_style,
        ))
    }

    // SNAPSHOTS

    pub async fn export_snapshot(&self) -> Result<LedgerSnapshot, LedgerError> {
        self.storage.load_snapshot().await
    }

    pub async fn import_snapshot(&self, snapshot: LedgerSnapshot) -> Result<(), LedgerError> {
        let details = json!({
            "members": snapshot.members.len(),
            "payments": snapshot.payments.len(),
        });
        self.storage.replace_snapshot(snapshot).await?;
        self.log_action(SNAPSHOT_IMPORTED, details).await
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, LedgerError> {
        self.logging.get_logs().await
    }
}
