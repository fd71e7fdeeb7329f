use crate::core::attribution::{equal_targets, per_person_preview, resolve_explicit, resolve_split};
use crate::core::errors::LedgerError;
use crate::core::models::{Attribution, Shares, SplitInput};
use crate::tests::{assert_close, roster};
use std::collections::BTreeMap;

fn entries(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(name, v)| (name.to_string(), *v)).collect()
}

fn shares(pairs: &[(&str, f64)]) -> Shares {
    pairs.iter().map(|(name, v)| (name.to_string(), *v)).collect()
}

#[test]
fn test_empty_selection_means_everyone() {
    let members = roster(&["A", "B", "C"]);
    let targets = equal_targets(&members, &[]).unwrap();
    assert_eq!(targets, vec!["A", "B", "C"]);
}

#[test]
fn test_selection_is_deduplicated_in_given_order() {
    let members = roster(&["A", "B", "C"]);
    let selected = vec!["C".to_string(), "A".to_string(), "C".to_string()];
    assert_eq!(equal_targets(&members, &selected).unwrap(), vec!["C", "A"]);
}

#[test]
fn test_selection_rejects_unknown_member() {
    let members = roster(&["A", "B"]);
    let result = equal_targets(&members, &["Ghost".to_string()]);
    assert!(matches!(result, Err(LedgerError::InvalidSplitMember(name)) if name == "Ghost"));
}

#[test]
fn test_per_person_preview() {
    assert_eq!(per_person_preview(1000.0, 3), Some(333));
    assert_eq!(per_person_preview(1000.0, 0), None);
}

#[test]
fn test_exact_explicit_split_is_kept() {
    let members = roster(&["A", "B"]);
    let details = resolve_explicit(&members, 100.0, &entries(&[("A", 40.0), ("B", 60.0)])).unwrap();
    assert_eq!(details, shares(&[("A", 40.0), ("B", 60.0)]));
}

#[test]
fn test_blank_members_share_the_remainder() {
    let members = roster(&["A", "B", "C"]);
    let details = resolve_explicit(&members, 100.0, &entries(&[("A", 40.0)])).unwrap();
    assert_eq!(details, shares(&[("A", 40.0), ("B", 30.0), ("C", 30.0)]));

    let with_zero = resolve_explicit(&members, 100.0, &entries(&[("A", 40.0), ("B", 0.0)])).unwrap();
    assert_eq!(with_zero, details);
}

#[test]
fn test_fractional_remainder_is_kept_unrounded() {
    let members = roster(&["A", "B", "C"]);
    let details = resolve_explicit(&members, 100.0, &BTreeMap::new()).unwrap();
    assert_eq!(details.len(), 3);
    assert_close(details["A"], 100.0 / 3.0);
    assert!((details.values().sum::<f64>() - 100.0).abs() < 1e-9);
}

#[test]
fn test_small_remainder_still_goes_to_blank_members() {
    let members = roster(&["A", "B"]);
    let details = resolve_explicit(&members, 100.0, &entries(&[("A", 99.995)])).unwrap();
    assert_eq!(details.len(), 2);
    assert_close(details["B"], 0.005);
    assert_close(details.values().sum::<f64>(), 100.0);
}

#[test]
fn test_small_gap_without_blank_members_is_a_shortfall() {
    let members = roster(&["A", "B"]);
    let result = resolve_explicit(&members, 100.0, &entries(&[("A", 49.995), ("B", 50.0)]));
    match result {
        Err(LedgerError::AttributionShortfall(missing)) => assert_close(missing, 0.005),
        other => panic!("expected shortfall, got {:?}", other),
    }
}

#[test]
fn test_shares_follow_roster_order() {
    let members = roster(&["Zoe", "Amy", "Ken"]);
    let details = resolve_explicit(&members, 90.0, &entries(&[("Amy", 30.0), ("Ken", 20.0)])).unwrap();
    let names: Vec<&str> = details.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Zoe", "Amy", "Ken"]);
    assert_close(details["Zoe"], 40.0);
}

#[test]
fn test_shortfall_without_blank_members() {
    let members = roster(&["A", "B"]);
    let result = resolve_explicit(&members, 100.0, &entries(&[("A", 40.0), ("B", 50.0)]));
    match result {
        Err(LedgerError::AttributionShortfall(missing)) => assert_close(missing, 10.0),
        other => panic!("expected shortfall, got {:?}", other),
    }
}

#[test]
fn test_overage_is_rejected() {
    let members = roster(&["A", "B", "C"]);
    let result = resolve_explicit(&members, 100.0, &entries(&[("A", 80.0), ("B", 40.0)]));
    match result {
        Err(LedgerError::AttributionOverage(extra)) => assert_close(extra, 20.0),
        other => panic!("expected overage, got {:?}", other),
    }
}

#[test]
fn test_explicit_rejects_unknown_and_negative_entries() {
    let members = roster(&["A", "B"]);
    assert!(matches!(
        resolve_explicit(&members, 100.0, &entries(&[("Ghost", 100.0)])),
        Err(LedgerError::InvalidSplitMember(_))
    ));
    assert!(matches!(
        resolve_explicit(&members, 100.0, &entries(&[("A", -5.0)])),
        Err(LedgerError::InvalidInput(field, _)) if field == "entries"
    ));
}

#[test]
fn test_resolve_split_builds_attribution() {
    let members = roster(&["A", "B"]);
    let equal = resolve_split(&members, 50.0, &SplitInput::Equal { targets: vec![] }).unwrap();
    assert_eq!(equal, Attribution::equal(["A", "B"]));
    assert!(equal.covers_roster(&members));

    let explicit = resolve_split(
        &members,
        50.0,
        &SplitInput::Explicit {
            entries: entries(&[("B", 50.0)]),
        },
    )
    .unwrap();
    assert_eq!(explicit, Attribution::explicit([("B", 50.0)]));
    assert!(!explicit.covers_roster(&members));
}
