//! The view filter pipeline: pure, deterministic derivations over the store.
//!
//! Each stage borrows cards and returns a new ordering; nothing here mutates.
//! Composition for a full render is `visible`, which applies the active view
//! mode and then the pinned-first sort.

use crate::models::{Card, Category};

// ---------------------------------------------------------------------------
// ViewMode
// ---------------------------------------------------------------------------

/// The active view: one category tab, or a whole-store search.
///
/// Category filtering and search are mutually exclusive. An active search
/// bypasses the category tab entirely and matches against the whole store;
/// results are not intersected with the tab. Deliberate, per the observed
/// product behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Category(Category),
    Search(String),
}

// ---------------------------------------------------------------------------
// Filter stages
// ---------------------------------------------------------------------------

/// Keep cards whose category equals `category`.
pub fn by_category<'a>(cards: &'a [Card], category: &Category) -> Vec<&'a Card> {
    cards.iter().filter(|c| &c.category == category).collect()
}

/// Keep cards matching `query` (case-insensitive substring over name,
/// description, or username). An empty or whitespace-only query is the
/// identity: every card passes, in input order.
pub fn by_search<'a>(cards: &'a [Card], query: &str) -> Vec<&'a Card> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return cards.iter().collect();
    }
    cards
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query)
                || c.description.to_lowercase().contains(&query)
                || c.username.to_lowercase().contains(&query)
        })
        .collect()
}

/// Move pinned cards ahead of unpinned ones.
///
/// Must be stable: within each group the input order is preserved.
/// `sort_by_key` is a stable sort, which is exactly what we rely on.
pub fn sort_pinned_first<'a>(mut cards: Vec<&'a Card>) -> Vec<&'a Card> {
    cards.sort_by_key(|c| !c.pinned);
    cards
}

/// Full derivation for one render pass: apply the view mode, then sort.
pub fn visible<'a>(cards: &'a [Card], mode: &ViewMode) -> Vec<&'a Card> {
    let filtered = match mode {
        ViewMode::Category(category) => by_category(cards, category),
        ViewMode::Search(query) => by_search(cards, query),
    };
    sort_pinned_first(filtered)
}
