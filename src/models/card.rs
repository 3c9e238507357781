use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique card identifier. Assigned at creation, never reused.
pub type CardId = u64;

// ---------------------------------------------------------------------------
// Category — open set of catalog tabs
// ---------------------------------------------------------------------------

/// A catalog category tag (`medijki`, `fame`, `goods`, ...).
///
/// The set of categories is data, not a closed enum: deployments extend it by
/// configuration, so this is a transparent string newtype. The known tags and
/// their human labels live in [`crate::config::default_categories`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

// ---------------------------------------------------------------------------
// Badge — status tags rendered on a card
// ---------------------------------------------------------------------------

/// A status badge tag. Unrecognized tags deserialize to [`Badge::Unknown`]
/// and are dropped at render time rather than failing the whole card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Verified,
    Scam,
    Pinned,
    #[serde(rename = "scamdb")]
    ScamDb,
    #[serde(other)]
    Unknown,
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// Like/dislike counters. Monotonically non-decreasing for the lifetime of a
/// session; mutated only through the store's `like`/`dislike` operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub likes: u64,
    pub dislikes: u64,
}

// ---------------------------------------------------------------------------
// Card — the primary directory entity
// ---------------------------------------------------------------------------

/// One profile/channel/listing entry in the directory.
///
/// Field names follow the catalog's JSON wire shape (`categoryName`,
/// `rating: {likes, dislikes}`). The `pinned` field drives sort priority and
/// is independent of the `pinned` badge tag; the two are never synchronized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub username: String,
    pub category: Category,
    /// Human-readable label for `category`.
    pub category_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub rating: Rating,
    /// Badge order is display order; duplicates are tolerated in storage.
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// Link order is display order; not deduplicated.
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
}
