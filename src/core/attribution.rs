use crate::constants::BALANCE_TOLERANCE;
use crate::core::errors::{FieldError, LedgerError};
use crate::core::models::{Attribution, Roster, Shares, SplitInput};
use std::collections::BTreeMap;
use tracing::debug;

/// Targets of an equal split. An empty selection means the whole roster.
pub fn equal_targets(roster: &Roster, selected: &[String]) -> Result<Vec<String>, LedgerError> {
    if selected.is_empty() {
        return Ok(roster.names().to_vec());
    }
    let mut targets: Vec<String> = Vec::with_capacity(selected.len());
    for name in selected {
        if !roster.contains(name) {
            return Err(LedgerError::InvalidSplitMember(name.clone()));
        }
        if !targets.contains(name) {
            targets.push(name.clone());
        }
    }
    Ok(targets)
}

/// Whole-unit share each target would pay, as shown next to the split form.
pub fn per_person_preview(amount: f64, target_count: usize) -> Option<i64> {
    if target_count == 0 {
        return None;
    }
    Some((amount / target_count as f64).trunc() as i64)
}

/// Turns per-member entries into explicit debts, in roster order.
///
/// Positive entries are kept as given. Members with no entry, or a zero
/// entry, split whatever is left of `amount` evenly; the fractional shares
/// are kept and only rounded at settlement.
pub fn resolve_explicit(roster: &Roster, amount: f64, entries: &BTreeMap<String, f64>) -> Result<Shares, LedgerError> {
    for (name, &value) in entries {
        if !roster.contains(name) {
            return Err(LedgerError::InvalidSplitMember(name.clone()));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(LedgerError::InvalidInput(
                "entries".to_string(),
                FieldError {
                    field: "entries".to_string(),
                    title: "Invalid Share".to_string(),
                    description: format!("Share for {} must be a non-negative number", name),
                },
            ));
        }
    }

    let entered = |name: &str| entries.get(name).copied().filter(|v| *v > 0.0);
    let blanks = roster.iter().filter(|m| entered(m.as_str()).is_none()).count();
    let remainder = amount - roster.iter().filter_map(|m| entered(m.as_str())).sum::<f64>();
    debug!(
        "Resolving explicit split: {} entered, {} blank, remainder {}",
        roster.len() - blanks,
        blanks,
        remainder
    );

    let share = if remainder.abs() <= BALANCE_TOLERANCE {
        None
    } else if remainder < 0.0 {
        return Err(LedgerError::AttributionOverage(-remainder));
    } else if blanks == 0 {
        return Err(LedgerError::AttributionShortfall(remainder));
    } else {
        Some(remainder / blanks as f64)
    };

    Ok(roster
        .iter()
        .filter_map(|m| entered(m.as_str()).or(share).map(|debt| (m.clone(), debt)))
        .collect())
}

/// Resolves a form split against the roster.
pub fn resolve_split(roster: &Roster, amount: f64, split: &SplitInput) -> Result<Attribution, LedgerError> {
    match split {
        SplitInput::Equal { targets } => Ok(Attribution::Equal {
            targets: equal_targets(roster, targets)?,
        }),
        SplitInput::Explicit { entries } => Ok(Attribution::Explicit {
            details: resolve_explicit(roster, amount, entries)?,
        }),
    }
}
