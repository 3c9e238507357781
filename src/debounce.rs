//! Cancellable scheduling for search input.
//!
//! Raw keystrokes arrive at unbounded rate; a query only executes after a
//! quiet period with no newer input. Each submission supersedes the pending
//! one, so at most the last query of a burst ever fires. The debouncer is
//! driven by caller-supplied instants rather than owning a timer: the
//! embedding event loop decides when time passes, which also makes the quiet
//! period trivially testable.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending {
    query: String,
    due: Instant,
}

/// Cancel-by-superseding scheduler for search queries.
#[derive(Debug)]
pub struct SearchDebouncer {
    quiet_period: Duration,
    pending: Option<Pending>,
}

impl SearchDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Record a raw input event at `now`, superseding any pending query and
    /// re-arming the quiet period.
    pub fn submit(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            query: query.into(),
            due: now + self.quiet_period,
        });
    }

    /// Take the pending query if its quiet period has elapsed by `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.due) {
            self.pending.take().map(|p| p.query)
        } else {
            None
        }
    }

    /// Drop the pending query, if any, returning it.
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.query)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
