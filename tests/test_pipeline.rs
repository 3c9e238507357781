//! Filter pipeline tests: category filter, search, stable pinned-first sort,
//! and the composition rules.

mod common;

use fame_directory::pipeline::{by_category, by_search, sort_pinned_first, visible, ViewMode};
use fame_directory::Category;

// ---------------------------------------------------------------------------
// by_category
// ---------------------------------------------------------------------------

#[test]
fn by_category_keeps_only_matching_cards() {
    let cards = common::sample_cards();
    let result = by_category(&cards, &Category::from("coders"));

    let ids: Vec<u64> = result.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 5]);
}

#[test]
fn by_category_unknown_tag_matches_nothing() {
    let cards = common::sample_cards();
    assert!(by_category(&cards, &Category::from("no-such-tab")).is_empty());
}

// ---------------------------------------------------------------------------
// by_search
// ---------------------------------------------------------------------------

#[test]
fn by_search_empty_query_is_identity() {
    let cards = common::sample_cards();
    let result = by_search(&cards, "");

    let ids: Vec<u64> = result.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn by_search_whitespace_query_is_identity() {
    let cards = common::sample_cards();
    assert_eq!(by_search(&cards, "   ").len(), cards.len());
}

#[test]
fn by_search_is_case_insensitive_on_name() {
    let cards = common::sample_cards();
    let result = by_search(&cards, "lemon");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Lemon");
}

#[test]
fn by_search_matches_username() {
    let cards = common::sample_cards();
    let result = by_search(&cards, "MERCHSHOP");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 4);
}

#[test]
fn by_search_matches_description() {
    let cards = common::sample_cards();
    let result = by_search(&cards, "комьюнити");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 1);
}

#[test]
fn by_search_no_match_is_empty() {
    let cards = common::sample_cards();
    assert!(by_search(&cards, "zzzzzz").is_empty());
}

// ---------------------------------------------------------------------------
// sort_pinned_first
// ---------------------------------------------------------------------------

#[test]
fn sort_places_pinned_ahead() {
    let cards = common::sample_cards();
    let sorted = sort_pinned_first(cards.iter().collect());

    let ids: Vec<u64> = sorted.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 4, 1, 3, 5]);
}

#[test]
fn sort_is_stable_within_each_group() {
    // Interleave pinned and unpinned; relative order inside each group must
    // survive the sort.
    let cards = vec![
        common::card(10, "a", "a", "fame", false),
        common::card(11, "b", "b", "fame", true),
        common::card(12, "c", "c", "fame", false),
        common::card(13, "d", "d", "fame", true),
        common::card(14, "e", "e", "fame", false),
    ];
    let sorted = sort_pinned_first(cards.iter().collect());

    let ids: Vec<u64> = sorted.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![11, 13, 10, 12, 14]);
}

// ---------------------------------------------------------------------------
// visible (composition)
// ---------------------------------------------------------------------------

#[test]
fn visible_category_mode_filters_then_sorts() {
    let cards = common::sample_cards();
    let result = visible(&cards, &ViewMode::Category(Category::from("medijki")));

    let ids: Vec<u64> = result.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 1]); // Lemon is pinned
}

#[test]
fn visible_search_mode_bypasses_category() {
    // "Quiet" is in coders; a search must find it regardless of any tab.
    let cards = common::sample_cards();
    let result = visible(&cards, &ViewMode::Search("quiet".to_string()));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 5);
}

#[test]
fn visible_search_results_are_pinned_sorted_too() {
    let cards = common::sample_cards();
    // Empty query: the whole store, pinned first.
    let result = visible(&cards, &ViewMode::Search(String::new()));

    let ids: Vec<u64> = result.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 4, 1, 3, 5]);
}
