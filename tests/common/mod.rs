//! Shared fixtures for the directory engine integration tests.
//!
//! Provides `sample_cards()`, a small catalog spanning two categories with a
//! pinned card, badges, and both telegram and generic links, plus a `card()`
//! shorthand for building one-off cards in tests.

use fame_directory::{Badge, Card, CardId, Category, Rating};

/// Build a minimal card with the given identity; everything else defaulted.
pub fn card(id: CardId, name: &str, username: &str, category: &str, pinned: bool) -> Card {
    Card {
        id,
        name: name.to_string(),
        username: username.to_string(),
        category: Category::from(category),
        category_name: category.to_string(),
        description: String::new(),
        avatar: String::new(),
        rating: Rating::default(),
        badges: vec![],
        links: vec![],
        pinned,
    }
}

/// A five-card catalog:
///
/// - id 1 `Semerk!n` (medijki, verified, likes 30/16, t.me link)
/// - id 2 `Lemon` (medijki, pinned)
/// - id 3 `DarkCoder` (coders, scam + scamdb badges, generic link)
/// - id 4 `Merch Shop` (goods, pinned)
/// - id 5 `Quiet` (coders)
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card {
            rating: Rating {
                likes: 30,
                dislikes: 16,
            },
            badges: vec![Badge::Verified],
            links: vec!["https://t.me/semerkin".to_string()],
            description: "Появился в комьюнити в 2020 году".to_string(),
            ..card(1, "Semerk!n", "semerkin", "medijki", false)
        },
        Card {
            rating: Rating {
                likes: 24,
                dislikes: 13,
            },
            links: vec!["https://t.me/lemon".to_string()],
            description: "Владелец сайта".to_string(),
            ..card(2, "Lemon", "lemon", "medijki", true)
        },
        Card {
            badges: vec![Badge::Scam, Badge::ScamDb],
            links: vec!["https://example.com/darkcoder".to_string()],
            description: "Пишет ботов на заказ".to_string(),
            ..card(3, "DarkCoder", "darkcoder", "coders", false)
        },
        Card {
            description: "Продажа мерча".to_string(),
            ..card(4, "Merch Shop", "merchshop", "goods", true)
        },
        Card {
            description: "Ничем не примечателен".to_string(),
            ..card(5, "Quiet", "quiet", "coders", false)
        },
    ]
}
