//! Deck construction and shuffling.
//!
//! `Deck::standard()` lays out the 100-card deck in a fixed order:
//! for each color (Red, Green, Blue, Yellow) one `0`, two each of `1`-`9`,
//! then two each of Skip, Reverse and Draw Two.
//!
//! `Deck::shuffle(seed)` permutes it with a Fisher–Yates pass driven by the
//! `"deck"` stream of `GameRng::new(seed)`. The same seed always yields the
//! same order.

use rustc_hash::FxHashMap;

use super::card::{Card, Color, Label};
use crate::core::GameRng;
use crate::zones::DrawPile;

/// Number of cards in the standard deck.
pub const STANDARD_DECK_SIZE: usize = 100;

/// Copies of each non-zero card per color.
const COPIES: usize = 2;

/// An ordered multiset of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard 100-card deck in enumeration order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);

        for color in Color::ALL {
            cards.push(Card::number(color, 0));
            for value in 1..=9 {
                cards.extend(std::iter::repeat(Card::number(color, value)).take(COPIES));
            }
            for action in Label::ACTIONS {
                cards.extend(std::iter::repeat(Card::new(color, action)).take(COPIES));
            }
        }

        debug_assert_eq!(cards.len(), STANDARD_DECK_SIZE);
        Self { cards }
    }

    /// Deterministically permute the deck.
    #[must_use]
    pub fn shuffle(mut self, seed: u64) -> Self {
        let mut rng = GameRng::new(seed).for_context("deck");
        rng.shuffle(&mut self.cards);
        self
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards as a slice.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Count of each distinct card.
    #[must_use]
    pub fn counts(&self) -> FxHashMap<Card, usize> {
        count_cards(self.cards.iter())
    }

    /// Turn the deck into a draw pile. The last card of the deck is drawn first.
    #[must_use]
    pub fn into_draw_pile(self) -> DrawPile {
        DrawPile::from_cards(self.cards)
    }
}

/// Tally cards into a multiset.
pub fn count_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> FxHashMap<Card, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_size_and_composition() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), STANDARD_DECK_SIZE);

        let counts = deck.counts();
        // 4 zeros + 4 * 9 * 2 numbers + 4 * 3 * 2 actions
        assert_eq!(counts.len(), 4 * (1 + 9 + 3));

        for color in Color::ALL {
            assert_eq!(counts[&Card::number(color, 0)], 1);
            for value in 1..=9 {
                assert_eq!(counts[&Card::number(color, value)], 2);
            }
            for action in Label::ACTIONS {
                assert_eq!(counts[&Card::new(color, action)], 2);
            }
        }
    }

    #[test]
    fn test_standard_order() {
        let deck = Deck::standard();
        let cards = deck.cards();

        assert_eq!(cards[0], Card::number(Color::Red, 0));
        assert_eq!(cards[1], Card::number(Color::Red, 1));
        assert_eq!(cards[2], Card::number(Color::Red, 1));
        assert_eq!(cards[19], Card::new(Color::Red, Label::Skip));
        assert_eq!(cards[24], Card::new(Color::Red, Label::DrawTwo));
        assert_eq!(cards[25], Card::number(Color::Green, 0));
        assert_eq!(cards[99], Card::new(Color::Yellow, Label::DrawTwo));
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let a = Deck::standard().shuffle(1234);
        let b = Deck::standard().shuffle(1234);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let shuffled = Deck::standard().shuffle(99);
        assert_eq!(shuffled.counts(), Deck::standard().counts());
        assert_ne!(shuffled, Deck::standard());
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(Deck::standard().shuffle(1), Deck::standard().shuffle(2));
    }

    #[test]
    fn test_into_draw_pile_draws_from_end() {
        let deck = Deck::standard();
        let last = deck.cards()[deck.len() - 1];
        let mut pile = deck.into_draw_pile();

        assert_eq!(pile.len(), STANDARD_DECK_SIZE);
        assert_eq!(pile.draw(), Some(last));
    }
}
