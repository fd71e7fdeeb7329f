//! Settlement engine: net balances from payment records, and a greedy
//! transfer list that clears them.
//!
//! Everything here is a pure function over a snapshot of the ledger. Invalid
//! references (payers or attribution targets missing from the roster) are
//! dropped from their side of the ledger rather than reported.

use crate::constants::{BALANCE_TOLERANCE, DEFAULT_CURRENCY_SUFFIX, DEFAULT_TRANSFER_THRESHOLD};
use crate::core::models::{
    Attribution, Balances, ParticipantBalance, PaymentRecord, Roster, SettlementSummary, Transfer,
};
use std::collections::HashMap;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct SettleOptions {
    /// A transfer is emitted only when its amount is strictly greater than this.
    pub threshold: f64,
}

impl Default for SettleOptions {
    fn default() -> Self {
        SettleOptions {
            threshold: DEFAULT_TRANSFER_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportStyle {
    pub currency: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        ReportStyle {
            currency: DEFAULT_CURRENCY_SUFFIX.to_string(),
        }
    }
}

/// Computes `paid - owed` for every roster member, in roster order.
///
/// Equal splits divide by the full target count, even when some targets are
/// not on the roster; only the shares of roster members are recorded.
pub fn compute_balances(roster: &Roster, payments: &[PaymentRecord]) -> Balances {
    debug!(
        "Computing balances for {} members over {} payments",
        roster.len(),
        payments.len()
    );
    let index: HashMap<&str, usize> = roster.iter().enumerate().map(|(i, m)| (m.as_str(), i)).collect();
    let mut paid = vec![0.0_f64; roster.len()];
    let mut owed = vec![0.0_f64; roster.len()];

    for payment in payments {
        match index.get(payment.payer.as_str()) {
            Some(&idx) => paid[idx] += payment.amount,
            None => debug!("Dropping paid amount of unknown payer {}", payment.payer),
        }

        match &payment.attribution {
            Attribution::Equal { targets } => {
                if targets.is_empty() {
                    continue;
                }
                let share = payment.amount / targets.len() as f64;
                for target in targets {
                    if let Some(&idx) = index.get(target.as_str()) {
                        owed[idx] += share;
                    }
                }
            }
            Attribution::Explicit { details } => {
                for (name, debt) in details {
                    if let Some(&idx) = index.get(name.as_str()) {
                        owed[idx] += debt;
                    }
                }
            }
        }
    }

    let balances = Balances::new(
        roster
            .iter()
            .zip(paid.iter().zip(owed.iter()))
            .map(|(name, (paid, owed))| ParticipantBalance {
                name: name.clone(),
                balance: paid - owed,
            })
            .collect(),
    );
    debug!("Balances calculated: {:?}", balances);
    balances
}

/// Matches the largest creditor against the largest debtor until one side
/// runs out.
///
/// Balances are rounded to whole units (half to even) first. The result is a
/// valid clearing sequence of at most `receivers + payers - 1` transfers, but
/// not necessarily the shortest possible one.
pub fn settle(balances: &Balances, options: &SettleOptions) -> Vec<Transfer> {
    let mut receivers: Vec<(&str, f64)> = Vec::new();
    let mut payers: Vec<(&str, f64)> = Vec::new();

    for entry in balances.iter() {
        let rounded = entry.balance.round_ties_even();
        if !rounded.is_finite() {
            debug!("Skipping non-finite balance for {}", entry.name);
            continue;
        }
        if rounded > 0.0 {
            receivers.push((entry.name.as_str(), rounded));
        } else if rounded < 0.0 {
            payers.push((entry.name.as_str(), -rounded));
        }
    }

    // sort_by is stable, so equal magnitudes keep roster order
    receivers.sort_by(|a, b| b.1.total_cmp(&a.1));
    payers.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut transfers = Vec::new();
    let mut r = 0;
    let mut p = 0;

    while r < receivers.len() && p < payers.len() {
        let amount = receivers[r].1.min(payers[p].1);

        if amount > options.threshold {
            transfers.push(Transfer {
                from: payers[p].0.to_string(),
                to: receivers[r].0.to_string(),
                amount,
            });
        }

        receivers[r].1 -= amount;
        payers[p].1 -= amount;

        if receivers[r].1 <= BALANCE_TOLERANCE {
            r += 1;
        }
        if payers[p].1 <= BALANCE_TOLERANCE {
            p += 1;
        }
    }

    debug!("Settlement transfers: {:?}", transfers);
    transfers
}

/// Renders the copy-and-share settlement text.
pub fn format_report(total: f64, average: Option<f64>, transfers: &[Transfer], style: &ReportStyle) -> String {
    let cur = &style.currency;
    let mut lines = vec!["========= Settlement =========".to_string()];
    if transfers.is_empty() {
        lines.push("No settlement needed.".to_string());
    } else {
        lines.extend(
            transfers
                .iter()
                .map(|t| format!("{} ← {}  {}{}", t.to, t.from, whole(t.amount), cur)),
        );
    }
    lines.push(String::new());
    match average {
        Some(avg) => lines.push(format!(
            "Total: {}{} (per person: {}{})",
            whole(total),
            cur,
            whole(avg),
            cur
        )),
        None => lines.push(format!("Total: {}{}", whole(total), cur)),
    }
    lines.push("==============================".to_string());
    lines.join("\n")
}

/// Runs balances and settlement over one ledger snapshot.
pub fn summarize(roster: &Roster, payments: &[PaymentRecord], options: &SettleOptions) -> SettlementSummary {
    let total: f64 = payments.iter().map(|p| p.amount).sum();
    let average = if !roster.is_empty()
        && !payments.is_empty()
        && payments.iter().all(|p| p.attribution.covers_roster(roster))
    {
        Some(total / roster.len() as f64)
    } else {
        None
    };

    let balances = compute_balances(roster, payments);
    let transfers = settle(&balances, options);

    SettlementSummary {
        total,
        average,
        balances: balances.into_inner(),
        transfers,
    }
}

fn whole(amount: f64) -> i64 {
    amount.trunc() as i64
}
