//! Display-ready projections handed to the presentation sink.
//!
//! Everything here is produced by the projector from borrowed [`Card`]s;
//! nothing in this module can reach back and mutate the store.

use serde::Serialize;

use crate::models::CardId;

// ---------------------------------------------------------------------------
// BadgeView / LinkView
// ---------------------------------------------------------------------------

/// A resolved badge: CSS class plus the label the sink renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub css_class: &'static str,
    pub label: &'static str,
}

/// Which icon the sink should render next to a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkIcon {
    Telegram,
    Generic,
}

/// A resolved link: target URL plus icon kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub href: String,
    pub icon: LinkIcon,
}

// ---------------------------------------------------------------------------
// CardViewModel
// ---------------------------------------------------------------------------

/// The display-ready projection of one card.
#[derive(Debug, Clone, Serialize)]
pub struct CardViewModel {
    pub id: CardId,
    pub name: String,
    pub username: String,
    pub category_label: String,
    /// Truncated to the configured limit, with an ellipsis marker appended
    /// only when truncation actually occurred.
    pub description: String,
    pub avatar: String,
    pub likes: u64,
    pub dislikes: u64,
    pub badges: Vec<BadgeView>,
    pub links: Vec<LinkView>,
    pub pinned: bool,
}

// ---------------------------------------------------------------------------
// RenderPlan
// ---------------------------------------------------------------------------

/// Why a plan has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The initial load has not completed (or the last load failed).
    NotLoaded,
    /// Load completed but the current view matched no cards.
    NoMatches,
}

/// The ordered view-model sequence from one filter/search/sort pass.
///
/// Carries the loaded flag so the sink can tell an empty catalog apart from
/// a view that genuinely matched nothing.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub cards: Vec<CardViewModel>,
    pub loaded: bool,
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// `None` when there is something to render.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.cards.is_empty() {
            None
        } else if self.loaded {
            Some(EmptyState::NoMatches)
        } else {
            Some(EmptyState::NotLoaded)
        }
    }
}
