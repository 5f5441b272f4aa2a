// src/tests/compare_tests.rs

use crate::domain::compare::{CompareState, SortDirection, SortField, MAX_SELECTED};
use crate::domain::property::ReviewStatus;
use crate::tests::utils::record;

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn default_state_sorts_by_review_status_ascending() {
    let state = CompareState::default();
    assert_eq!(state.sort_field, SortField::ReviewStatus);
    assert_eq!(state.sort_direction, SortDirection::Asc);
    assert!(state.selected.is_empty());
    assert!(state.expanded.is_empty());
}

#[test]
fn unknown_sort_values_fall_back_to_defaults() {
    let state = CompareState::from_query(&pairs(&[("sort", "zip_code"), ("dir", "sideways")]));
    assert_eq!(state.sort_field, SortField::ReviewStatus);
    assert_eq!(state.sort_direction, SortDirection::Asc);
}

#[test]
fn repeated_sort_keys_take_the_last_value() {
    let state = CompareState::from_query(&pairs(&[("sort", "price"), ("sort", "noi")]));
    assert_eq!(state.sort_field, SortField::Noi);
}

#[test]
fn selection_from_query_dedupes_and_caps_at_two() {
    let state = CompareState::from_query(&pairs(&[
        ("sel", "a"),
        ("sel", "a"),
        ("sel", "b"),
        ("sel", "c"),
    ]));
    assert_eq!(state.selected, vec!["a", "b"]);
    assert_eq!(state.selected.len(), MAX_SELECTED);
}

#[test]
fn expanded_from_query_dedupes_without_a_cap() {
    let state = CompareState::from_query(&pairs(&[
        ("open", "a"),
        ("open", "b"),
        ("open", "a"),
        ("open", "c"),
    ]));
    assert_eq!(state.expanded, vec!["a", "b", "c"]);
}

#[test]
fn query_round_trips_through_encode_and_decode() {
    let mut state = CompareState::default();
    state.sort_field = SortField::Price;
    state.sort_direction = SortDirection::Desc;
    state.selected = vec!["page one".to_string(), "b".to_string()];
    state.expanded = vec!["c&d".to_string()];

    let query = state.to_query();
    let decoded: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    assert_eq!(CompareState::from_query(&decoded), state);
}

#[test]
fn query_without_drops_exactly_one_key() {
    let state = CompareState::from_query(&pairs(&[("sort", "noi"), ("sel", "a")]));

    let without_sort = state.query_without("sort");
    assert!(!without_sort.contains("sort="));
    assert!(without_sort.contains("dir=asc"));
    assert!(without_sort.contains("sel=a"));

    let without_dir = state.query_without("dir");
    assert!(without_dir.contains("sort=noi"));
    assert!(!without_dir.contains("dir="));
}

#[test]
fn toggling_adds_then_removes_a_selection() {
    let state = CompareState::default();

    let one = state.with_selection_toggled("a");
    assert_eq!(one.selected, vec!["a"]);

    let back = one.with_selection_toggled("a");
    assert!(back.selected.is_empty());
}

#[test]
fn third_selection_evicts_the_oldest() {
    let state = CompareState::default()
        .with_selection_toggled("a")
        .with_selection_toggled("b")
        .with_selection_toggled("c");

    // Oldest pick drops, newer pick shifts left.
    assert_eq!(state.selected, vec!["b", "c"]);
}

#[test]
fn deselecting_the_first_keeps_the_second() {
    let state = CompareState::default()
        .with_selection_toggled("a")
        .with_selection_toggled("b")
        .with_selection_toggled("a");

    assert_eq!(state.selected, vec!["b"]);
}

#[test]
fn expanding_is_independent_of_selection() {
    let state = CompareState::default()
        .with_expanded_toggled("a")
        .with_selection_toggled("a");

    assert!(state.is_expanded("a"));
    assert!(state.is_selected("a"));

    // Dropping the selection leaves the panel open.
    let deselected = state.with_selection_toggled("a");
    assert!(deselected.is_expanded("a"));
    assert!(!deselected.is_selected("a"));
}

#[test]
fn clearing_empties_selection_and_panels_but_keeps_sort() {
    let mut state = CompareState::from_query(&pairs(&[
        ("sort", "price"),
        ("dir", "desc"),
        ("sel", "a"),
        ("sel", "b"),
    ]));
    state = state.with_expanded_toggled("c");

    let cleared = state.cleared();
    assert!(cleared.selected.is_empty());
    assert!(cleared.expanded.is_empty());
    assert_eq!(cleared.sort_field, SortField::Price);
    assert_eq!(cleared.sort_direction, SortDirection::Desc);
}

#[test]
fn price_sort_orders_cheapest_first() {
    let mut a = record("a");
    a.price = Some(500_000.0);
    let mut b = record("b");
    b.price = Some(300_000.0);
    let records = vec![a, b];

    let state = CompareState::from_query(&pairs(&[("sort", "price")]));
    let sorted = state.sorted(&records);
    let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn descending_reverses_the_order() {
    let mut a = record("a");
    a.price = Some(500_000.0);
    let mut b = record("b");
    b.price = Some(300_000.0);
    let records = vec![a, b];

    let state = CompareState::from_query(&pairs(&[("sort", "price"), ("dir", "desc")]));
    let ids: Vec<&str> = state.sorted(&records).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn missing_numbers_sort_as_zero() {
    let mut a = record("a");
    a.noi = Some(80_000.0);
    let b = record("b"); // no NOI at all
    let records = vec![a, b];

    let state = CompareState::from_query(&pairs(&[("sort", "noi")]));
    let ids: Vec<&str> = state.sorted(&records).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn review_status_sorts_by_lifecycle_rank() {
    let mut bought = record("bought");
    bought.review_status = ReviewStatus::Bought;
    let mut reviewed = record("reviewed");
    reviewed.review_status = ReviewStatus::Reviewed;
    let reviewing = record("reviewing");
    let records = vec![reviewed, bought, reviewing];

    let asc = CompareState::default();
    let ids: Vec<&str> = asc.sorted(&records).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["reviewing", "bought", "reviewed"]);

    let desc = CompareState::from_query(&pairs(&[("dir", "desc")]));
    let ids: Vec<&str> = desc.sorted(&records).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["reviewed", "bought", "reviewing"]);
}

#[test]
fn ties_keep_their_input_order() {
    let mut a = record("a");
    a.price = Some(400_000.0);
    let mut b = record("b");
    b.price = Some(400_000.0);
    let records = vec![a, b];

    let state = CompareState::from_query(&pairs(&[("sort", "price")]));
    let ids: Vec<&str> = state.sorted(&records).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn selected_records_resolve_in_selection_order() {
    let records = vec![record("a"), record("b"), record("c")];

    let state = CompareState::from_query(&pairs(&[("sel", "c"), ("sel", "a")]));
    let ids: Vec<&str> = state
        .selected_records(&records)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["c", "a"]);
}

#[test]
fn stale_selection_ids_are_skipped() {
    let records = vec![record("a")];

    let state = CompareState::from_query(&pairs(&[("sel", "gone"), ("sel", "a")]));
    let resolved = state.selected_records(&records);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, "a");
}
