//! The render projector: `Card -> CardViewModel`, no mutation, no side
//! effects beyond producing data for the presentation sink.

use crate::config::{self, ELLIPSIS};
use crate::models::{BadgeView, Card, CardViewModel, LinkIcon, LinkView};

/// Project one card into its display-ready view model.
///
/// The description is truncated to `truncate_limit` characters with the
/// ellipsis marker appended only when truncation actually occurred.
/// Recognized badges resolve through the display table in declaration order;
/// a badge that appears twice renders once, and unknown tags are dropped.
pub fn project(card: &Card, truncate_limit: usize) -> CardViewModel {
    let mut badges: Vec<BadgeView> = Vec::new();
    for &badge in &card.badges {
        if let Some(view) = config::badge_display(badge) {
            if !badges.contains(&view) {
                badges.push(view);
            }
        }
    }

    let links = card
        .links
        .iter()
        .map(|href| LinkView {
            href: href.clone(),
            icon: link_icon(href),
        })
        .collect();

    CardViewModel {
        id: card.id,
        name: card.name.clone(),
        username: card.username.clone(),
        category_label: card.category_name.clone(),
        description: truncate(&card.description, truncate_limit),
        avatar: card.avatar.clone(),
        likes: card.rating.likes,
        dislikes: card.rating.dislikes,
        badges,
        links,
        pinned: card.pinned,
    }
}

/// Project an ordered slice of borrowed cards, preserving order.
pub fn project_all(cards: &[&Card], truncate_limit: usize) -> Vec<CardViewModel> {
    cards.iter().map(|c| project(c, truncate_limit)).collect()
}

/// Telegram links get the telegram icon, everything else the generic one.
fn link_icon(href: &str) -> LinkIcon {
    if href.contains("t.me") {
        LinkIcon::Telegram
    } else {
        LinkIcon::Generic
    }
}

/// Truncate to `limit` characters (not bytes; descriptions are routinely
/// Cyrillic) and append the ellipsis marker only if anything was cut.
fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}
