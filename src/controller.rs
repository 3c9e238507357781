//! The interaction controller: orchestrates store, pipeline, and projector
//! in response to external events (tab selected, search typed, like/dislike
//! clicked) and hands the resulting [`RenderPlan`] to the presentation sink.

use std::time::Instant;

use crate::config::DisplayConfig;
use crate::debounce::SearchDebouncer;
use crate::error::Result;
use crate::models::{Card, CardId, Category, RenderPlan};
use crate::pipeline::{self, ViewMode};
use crate::projector;
use crate::source::CardSource;
use crate::store::CardStore;

/// Default tab shown before any selection is made.
pub const DEFAULT_CATEGORY: &str = "medijki";

/// Holds the process-wide UI state (current category, active search query)
/// and drives one store -> filter -> project pass per external event.
///
/// State is session-scoped: it resets when the controller is rebuilt, the
/// same way the page resets on reload.
#[derive(Debug)]
pub struct Controller {
    store: CardStore,
    config: DisplayConfig,
    category: Category,
    search: Option<String>,
    debouncer: SearchDebouncer,
    loaded: bool,
}

impl Controller {
    pub fn new(config: DisplayConfig) -> Self {
        Self::with_category(config, Category::from(DEFAULT_CATEGORY))
    }

    pub fn with_category(config: DisplayConfig, category: Category) -> Self {
        let debouncer = SearchDebouncer::new(config.quiet_period);
        Self {
            store: CardStore::new(),
            config,
            category,
            search: None,
            debouncer,
            loaded: false,
        }
    }

    // -- Loading -----------------------------------------------------------

    /// Load the catalog, replacing any previous contents.
    ///
    /// Duplicate ids abort the load and leave the store (and the loaded
    /// flag) as they were.
    pub fn load(&mut self, cards: Vec<Card>) -> Result<RenderPlan> {
        self.store.load(cards)?;
        self.loaded = true;
        Ok(self.current_view())
    }

    /// Fetch from a data source and load the result.
    ///
    /// A fetch failure is recoverable: the store keeps its last-known-good
    /// contents and the caller may retry with another `load_from` call.
    pub fn load_from(&mut self, source: &dyn CardSource) -> Result<RenderPlan> {
        let cards = source.fetch().inspect_err(|e| {
            tracing::warn!(error = %e, "card source fetch failed");
        })?;
        self.load(cards)
    }

    // -- View events -------------------------------------------------------

    /// Switch to a category tab. Clears any active or pending search.
    pub fn select_category(&mut self, category: Category) -> RenderPlan {
        self.debouncer.cancel();
        self.search = None;
        self.category = category;
        self.current_view()
    }

    /// Raw search keystroke. Nothing renders until the quiet period passes;
    /// each keystroke supersedes the previous pending query.
    pub fn search_input(&mut self, query: impl Into<String>, now: Instant) {
        self.debouncer.submit(query, now);
    }

    /// Fire the pending search query if its quiet period has elapsed.
    pub fn poll_search(&mut self, now: Instant) -> Option<RenderPlan> {
        let query = self.debouncer.take_due(now)?;
        Some(self.set_search_query(query))
    }

    /// Apply a settled search query immediately.
    ///
    /// A non-empty query searches the whole store, bypassing the category
    /// tab. An empty or whitespace-only query drops back to the current
    /// category view.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> RenderPlan {
        let query = query.into();
        if query.trim().is_empty() {
            self.search = None;
        } else {
            self.search = Some(query);
        }
        self.current_view()
    }

    // -- Rating events -----------------------------------------------------

    /// Like a card, then re-render whatever view is currently active.
    ///
    /// An unknown id returns [`NotFound`](crate::DirectoryError::NotFound)
    /// with every rating untouched; the caller can keep showing the view it
    /// already has (or re-fetch it via [`current_view`](Self::current_view)).
    pub fn like_card(&mut self, id: CardId) -> Result<RenderPlan> {
        self.store.like(id)?;
        Ok(self.current_view())
    }

    /// Symmetric to [`like_card`](Self::like_card).
    pub fn dislike_card(&mut self, id: CardId) -> Result<RenderPlan> {
        self.store.dislike(id)?;
        Ok(self.current_view())
    }

    // -- Rendering ---------------------------------------------------------

    /// Derive the plan for the currently active view mode.
    pub fn current_view(&self) -> RenderPlan {
        let visible = pipeline::visible(self.store.get_all(), &self.mode());
        RenderPlan {
            cards: projector::project_all(&visible, self.config.truncate_limit),
            loaded: self.loaded,
        }
    }

    /// The active view mode: search overlays the category tab while a query
    /// is live; the tab itself is retained underneath.
    pub fn mode(&self) -> ViewMode {
        match &self.search {
            Some(query) => ViewMode::Search(query.clone()),
            None => ViewMode::Category(self.category.clone()),
        }
    }

    // -- Accessors ---------------------------------------------------------

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn active_search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }
}
