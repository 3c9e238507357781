//! Card directory engine.
//!
//! The state-and-render core behind a single-page catalog of profile cards
//! (channels, people, goods listings): an in-memory card store, pure derived
//! views (category tabs, whole-store search, pinned-first ordering), and the
//! like/dislike mutations that must stay consistent with whatever view is
//! currently displayed. The HTML presentation layer is a pure sink consuming
//! the [`RenderPlan`]s this crate produces.
//!
//! # Quick start
//!
//! ```
//! use fame_directory::Directory;
//!
//! let mut dir = Directory::builder()
//!     .cards(fame_directory::source::demo_cards())
//!     .build()
//!     .unwrap();
//!
//! // Switch tabs, rate a card, search the whole catalog
//! let plan = dir.select_category("medijki".into());
//! assert!(!plan.is_empty());
//!
//! let plan = dir.like_card(1).unwrap();
//! assert_eq!(plan.cards.iter().find(|c| c.id == 1).unwrap().likes, 31);
//!
//! let plan = dir.set_search_query("lemon");
//! assert_eq!(plan.cards.len(), 1);
//! ```

pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod projector;
pub mod source;
pub mod store;

pub use config::DisplayConfig;
pub use controller::Controller;
pub use debounce::SearchDebouncer;
pub use error::{DirectoryError, Result};
pub use models::{
    Badge, BadgeView, Card, CardId, CardViewModel, Category, EmptyState, LinkIcon, LinkView,
    Rating, RenderPlan,
};
pub use pipeline::ViewMode;
pub use store::CardStore;

use std::fmt;
use std::time::{Duration, Instant};

use source::{CardSource, StaticSource};

// ---------------------------------------------------------------------------
// DirectoryBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Directory`].
///
/// Use [`Directory::builder()`] to obtain one, chain configuration methods,
/// and call [`build()`](DirectoryBuilder::build).
pub struct DirectoryBuilder {
    config: DisplayConfig,
    initial_category: Category,
    source: Option<Box<dyn CardSource>>,
}

impl Default for DirectoryBuilder {
    fn default() -> Self {
        Self {
            config: DisplayConfig::default(),
            initial_category: Category::from(controller::DEFAULT_CATEGORY),
            source: None,
        }
    }
}

impl DirectoryBuilder {
    /// Set the description truncation limit, in characters. Defaults to 100.
    pub fn truncate_limit(mut self, limit: usize) -> Self {
        self.config.truncate_limit = limit;
        self
    }

    /// Set the search quiet period. Defaults to 300 ms.
    pub fn quiet_period(mut self, quiet_period: Duration) -> Self {
        self.config.quiet_period = quiet_period;
        self
    }

    /// Set the tab shown before any selection. Defaults to `medijki`.
    pub fn initial_category(mut self, category: Category) -> Self {
        self.initial_category = category;
        self
    }

    /// Load the catalog from a data source at build time.
    pub fn source(mut self, source: Box<dyn CardSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Convenience for a fixed in-memory catalog.
    pub fn cards(self, cards: Vec<Card>) -> Self {
        self.source(Box::new(StaticSource::new(cards)))
    }

    /// Build the directory, fetching the startup catalog if a source was
    /// configured.
    ///
    /// A source *fetch* failure is tolerated: the directory starts empty and
    /// unloaded (the sink sees [`EmptyState::NotLoaded`]) and can be retried
    /// with [`Directory::reload`]. Malformed data (duplicate card ids) is a
    /// hard [`DirectoryError::DuplicateId`] error.
    pub fn build(self) -> Result<Directory> {
        let mut ctl = Controller::with_category(self.config, self.initial_category);
        if let Some(source) = &self.source {
            match ctl.load_from(source.as_ref()) {
                Ok(_) => {}
                Err(e @ DirectoryError::DuplicateId(_)) => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, "startup load failed; directory starts empty");
                }
            }
        }
        Ok(Directory { ctl })
    }
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

/// The main entry point: owns the [`Controller`] (and through it the card
/// store and UI state) and exposes the interaction surface the presentation
/// glue drives.
///
/// Created via [`Directory::builder()`].
#[derive(Debug)]
pub struct Directory {
    ctl: Controller,
}

impl Directory {
    /// Create a new builder for configuring the directory.
    pub fn builder() -> DirectoryBuilder {
        DirectoryBuilder::default()
    }

    // -- Events ------------------------------------------------------------

    /// Switch to a category tab; clears any active or pending search.
    pub fn select_category(&mut self, category: Category) -> RenderPlan {
        self.ctl.select_category(category)
    }

    /// Feed one raw search keystroke at `now`; renders nothing yet.
    pub fn search_input(&mut self, query: impl Into<String>, now: Instant) {
        self.ctl.search_input(query, now);
    }

    /// Fire the pending search query if its quiet period elapsed by `now`.
    pub fn poll_search(&mut self, now: Instant) -> Option<RenderPlan> {
        self.ctl.poll_search(now)
    }

    /// Apply an already-settled search query immediately.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> RenderPlan {
        self.ctl.set_search_query(query)
    }

    /// Like a card and re-render the currently active view.
    pub fn like_card(&mut self, id: CardId) -> Result<RenderPlan> {
        self.ctl.like_card(id)
    }

    /// Dislike a card and re-render the currently active view.
    pub fn dislike_card(&mut self, id: CardId) -> Result<RenderPlan> {
        self.ctl.dislike_card(id)
    }

    // -- Loading -----------------------------------------------------------

    /// Replace the catalog from a data source; retryable after failure.
    pub fn reload(&mut self, source: &dyn CardSource) -> Result<RenderPlan> {
        self.ctl.load_from(source)
    }

    /// Replace the catalog with an in-memory list.
    pub fn load(&mut self, cards: Vec<Card>) -> Result<RenderPlan> {
        self.ctl.load(cards)
    }

    // -- Views and accessors -----------------------------------------------

    /// Derive the plan for the currently active view without any event.
    pub fn current_view(&self) -> RenderPlan {
        self.ctl.current_view()
    }

    /// The category tabs the catalog ships with, `(tag, label)` pairs.
    pub fn categories(&self) -> Vec<(&'static str, &'static str)> {
        config::default_categories()
    }

    pub fn store(&self) -> &CardStore {
        self.ctl.store()
    }

    pub fn controller(&self) -> &Controller {
        &self.ctl
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.ctl
    }

    pub fn is_loaded(&self) -> bool {
        self.ctl.is_loaded()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.ctl.mode() {
            ViewMode::Category(c) => format!("category:{c}"),
            ViewMode::Search(q) => format!("search:{q:?}"),
        };
        write!(
            f,
            "Directory(cards={}, mode={}, loaded={})",
            self.ctl.store().len(),
            mode,
            self.ctl.is_loaded()
        )
    }
}
