//! The authoritative card store.
//!
//! Owns the card list loaded at startup and the only two mutation paths in
//! the whole engine: `like` and `dislike`. Everything downstream (pipeline,
//! projector) borrows from here and never writes back.

use std::collections::HashSet;

use crate::error::{DirectoryError, Result};
use crate::models::{Card, CardId};

/// In-memory card store. Insertion order is preserved and is the baseline
/// order every derived view starts from.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store contents with `cards`.
    ///
    /// Fails with [`DirectoryError::DuplicateId`] if two cards share an id,
    /// in which case the store keeps its previous contents.
    pub fn load(&mut self, cards: Vec<Card>) -> Result<()> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(DirectoryError::DuplicateId(card.id));
            }
        }
        tracing::info!(count = cards.len(), "card store loaded");
        self.cards = cards;
        Ok(())
    }

    /// All cards, in insertion order.
    pub fn get_all(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    pub fn find_by_id(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Increment the like counter of the card with `id` by exactly one.
    ///
    /// Returns the updated card, or [`DirectoryError::NotFound`] if no card
    /// has that id. No other field is touched.
    pub fn like(&mut self, id: CardId) -> Result<&Card> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DirectoryError::NotFound(id))?;
        card.rating.likes += 1;
        tracing::debug!(id, likes = card.rating.likes, "card liked");
        Ok(card)
    }

    /// Increment the dislike counter, symmetric to [`like`](Self::like).
    pub fn dislike(&mut self, id: CardId) -> Result<&Card> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DirectoryError::NotFound(id))?;
        card.rating.dislikes += 1;
        tracing::debug!(id, dislikes = card.rating.dislikes, "card disliked");
        Ok(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
