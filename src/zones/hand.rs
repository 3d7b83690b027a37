//! A player's hand.
//!
//! Hands keep insertion order: the dealt cards first, then every drawn card
//! appended at the end. Play selection scans front to back and takes the
//! first match, so this order decides ties.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Inline capacity; hands rarely grow beyond this.
const INLINE_CARDS: usize = 16;

/// Ordered cards held by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; INLINE_CARDS]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card at the end.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the first card, front to back, satisfying `predicate`.
    ///
    /// ```
    /// use uno_engine::cards::{Card, Color};
    /// use uno_engine::zones::Hand;
    ///
    /// let mut hand: Hand = [Card::number(Color::Red, 1), Card::number(Color::Blue, 1)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert_eq!(hand.find_and_remove(|c| c.color == Color::Blue), Some(Card::number(Color::Blue, 1)));
    /// assert_eq!(hand.find_and_remove(|c| c.color == Color::Blue), None);
    /// assert_eq!(hand.len(), 1);
    /// ```
    pub fn find_and_remove(&mut self, predicate: impl Fn(&Card) -> bool) -> Option<Card> {
        let pos = self.cards.iter().position(predicate)?;
        Some(self.cards.remove(pos))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Cards in hand order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
