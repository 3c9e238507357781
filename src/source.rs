//! Startup data sources.
//!
//! The catalog is loaded once at startup from a substitutable collaborator:
//! an in-memory list in development, a JSON file (the same array shape the
//! site's `/api/cards` endpoint would serve) in a real deployment. A network
//! fetch source would implement the same trait.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Badge, Card, Category, Rating};

/// A supplier of the full card catalog.
pub trait CardSource {
    fn fetch(&self) -> Result<Vec<Card>>;
}

// ---------------------------------------------------------------------------
// StaticSource
// ---------------------------------------------------------------------------

/// Serves a fixed in-memory catalog.
#[derive(Debug, Clone)]
pub struct StaticSource {
    cards: Vec<Card>,
}

impl StaticSource {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl CardSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Card>> {
        Ok(self.cards.clone())
    }
}

// ---------------------------------------------------------------------------
// JsonFileSource
// ---------------------------------------------------------------------------

/// Reads a JSON array of cards from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CardSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Card>> {
        let raw = fs::read_to_string(&self.path)?;
        let cards = serde_json::from_str(&raw)?;
        Ok(cards)
    }
}

// ---------------------------------------------------------------------------
// Demo catalog
// ---------------------------------------------------------------------------

/// The development seed catalog.
pub fn demo_cards() -> Vec<Card> {
    vec![
        Card {
            id: 1,
            name: "Semerk!n".to_string(),
            username: "semerkin".to_string(),
            category: Category::from("medijki"),
            category_name: "Медийка".to_string(),
            description: "Также известен как \"Семеркин\". Появился в комьюнити в 2020 году, \
                          создал несколько успешных проектов."
                .to_string(),
            avatar: "https://via.placeholder.com/150".to_string(),
            rating: Rating {
                likes: 30,
                dislikes: 16,
            },
            badges: vec![Badge::Verified],
            links: vec!["https://t.me/semerkin".to_string()],
            pinned: false,
        },
        Card {
            id: 2,
            name: "Lemon".to_string(),
            username: "lemon".to_string(),
            category: Category::from("medijki"),
            category_name: "Медийка".to_string(),
            description: "Владелец сайта, по вопросам писать мне".to_string(),
            avatar: "https://via.placeholder.com/150".to_string(),
            rating: Rating {
                likes: 24,
                dislikes: 13,
            },
            badges: vec![],
            links: vec!["https://t.me/lemon".to_string()],
            pinned: false,
        },
    ]
}
