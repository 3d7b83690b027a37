//! Draw and discard piles.
//!
//! Both piles are stacks backed by a `Vec` whose last element is the top.
//! The draw pile only shrinks during a game; the discard pile only grows.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Undealt cards. The top is the next card drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: Vec<Card>,
}

impl DrawPile {
    /// Create an empty draw pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `cards`; the last element becomes the top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Take up to `count` cards from the top, fewer if the pile runs out.
    pub fn draw_up_to(&mut self, count: usize) -> SmallVec<[Card; 2]> {
        std::iter::from_fn(|| self.cards.pop()).take(count).collect()
    }

    /// The card `draw` would return.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from the top down.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}

/// Played cards. The top is the most recent play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Create an empty discard pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `cards`; the last element becomes the top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The card to match against.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in play order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
