//! Display configuration and static lookup tables.

use std::time::Duration;

use crate::models::{Badge, BadgeView};

/// Marker appended to truncated descriptions.
pub const ELLIPSIS: &str = "...";

/// Default description truncation limit, in characters.
pub const DEFAULT_TRUNCATE_LIMIT: usize = 100;

/// Default quiet period before a search query settles.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

// ---------------------------------------------------------------------------
// DisplayConfig
// ---------------------------------------------------------------------------

/// Tunables for projection and search debouncing.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Description truncation limit, in characters (not bytes).
    pub truncate_limit: usize,
    /// Quiet period with no new input before a search query executes.
    pub quiet_period: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            truncate_limit: DEFAULT_TRUNCATE_LIMIT,
            quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }
}

// ---------------------------------------------------------------------------
// Category registry
// ---------------------------------------------------------------------------

/// The category tags the catalog ships with, paired with their human labels.
///
/// This is the seed registry, not a closed set: cards may carry tags outside
/// this list and the pipeline filters on the raw tag string either way.
pub fn default_categories() -> Vec<(&'static str, &'static str)> {
    vec![
        ("medijki", "Медийка"),
        ("fame", "Фейм"),
        ("middle", "Мидл"),
        ("small", "Смолл"),
        ("coders", "Кодеры"),
        ("goods", "Товары"),
        ("channels", "Каналы"),
        ("scam", "Скам"),
        ("designers", "Дизайнеры"),
        ("editors", "Эдиторы"),
    ]
}

/// Per-tab hint line shown under the category header. Empty for most tabs.
pub fn subcategory_hint(category: &str) -> &'static str {
    match category {
        "medijki" => "Кодеры, Товары, Дизайнеры, Эдиторы",
        _ => "",
    }
}

// ---------------------------------------------------------------------------
// Badge display table
// ---------------------------------------------------------------------------

/// Resolve a badge tag to its display config.
///
/// Unrecognized tags resolve to `None` and are dropped by the projector;
/// an unknown tag must never break rendering.
pub fn badge_display(badge: Badge) -> Option<BadgeView> {
    match badge {
        Badge::Verified => Some(BadgeView {
            css_class: "verified",
            label: "Verified",
        }),
        Badge::Scam => Some(BadgeView {
            css_class: "scam",
            label: "SCAM",
        }),
        Badge::Pinned => Some(BadgeView {
            css_class: "pinned",
            label: "Закреплён",
        }),
        Badge::ScamDb => Some(BadgeView {
            css_class: "scam-db",
            label: "В скам базе",
        }),
        Badge::Unknown => None,
    }
}
