//! Play selection.
//!
//! Given the top of the discard pile, a hand gives up the first card found by
//! the first rule that matches:
//!
//! 1. same color as the top card
//! 2. same label as the top card
//! 3. an action card (Skip, then Reverse, then Draw Two) that matches the top
//!    card by color or label
//!
//! Each rule scans the hand front to back. With no top card (the deal used up
//! the whole deck) every card is playable.

use log::trace;

use crate::cards::{Card, Label};
use crate::zones::Hand;

/// Can `card` go on `top`?
#[must_use]
pub fn is_playable(card: &Card, top: Option<&Card>) -> bool {
    top.map_or(true, |top| card.matches(top))
}

/// Remove and return the card to play from `hand`, or `None` if nothing fits.
pub fn select_play(hand: &mut Hand, top: Option<&Card>) -> Option<Card> {
    let Some(top) = top else {
        return hand.find_and_remove(|_| true);
    };

    if let Some(card) = hand.find_and_remove(|c| c.color == top.color) {
        trace!("{} matches {} by color", card, top);
        return Some(card);
    }

    if let Some(card) = hand.find_and_remove(|c| c.label == top.label) {
        trace!("{} matches {} by label", card, top);
        return Some(card);
    }

    // Action priority: Skip, Reverse, Draw Two.
    for action in Label::ACTIONS {
        if let Some(card) = hand.find_and_remove(|c| c.label == action && c.matches(top)) {
            trace!("{} matches {} as action", card, top);
            return Some(card);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn hand(cards: &[Card]) -> Hand {
        cards.iter().copied().collect()
    }

    #[test]
    fn test_color_beats_label() {
        let top = Card::number(Color::Red, 5);
        let mut h = hand(&[Card::number(Color::Blue, 5), Card::number(Color::Red, 2)]);

        assert_eq!(select_play(&mut h, Some(&top)), Some(Card::number(Color::Red, 2)));
        assert_eq!(h.cards(), &[Card::number(Color::Blue, 5)]);
    }

    #[test]
    fn test_first_color_match_wins() {
        let top = Card::number(Color::Green, 0);
        let mut h = hand(&[
            Card::number(Color::Yellow, 1),
            Card::new(Color::Green, Label::Reverse),
            Card::number(Color::Green, 7),
        ]);

        assert_eq!(select_play(&mut h, Some(&top)), Some(Card::new(Color::Green, Label::Reverse)));
    }

    #[test]
    fn test_label_match() {
        let top = Card::new(Color::Red, Label::Skip);
        let mut h = hand(&[Card::number(Color::Blue, 1), Card::new(Color::Yellow, Label::Skip)]);

        assert_eq!(select_play(&mut h, Some(&top)), Some(Card::new(Color::Yellow, Label::Skip)));
    }

    #[test]
    fn test_no_match_leaves_hand_untouched() {
        let top = Card::number(Color::Red, 5);
        let cards = [Card::new(Color::Blue, Label::Skip), Card::number(Color::Green, 3)];
        let mut h = hand(&cards);

        assert_eq!(select_play(&mut h, Some(&top)), None);
        assert_eq!(h.cards(), &cards);
    }

    #[test]
    fn test_no_top_plays_first_card() {
        let mut h = hand(&[Card::number(Color::Blue, 4), Card::number(Color::Red, 1)]);
        assert_eq!(select_play(&mut h, None), Some(Card::number(Color::Blue, 4)));
    }

    #[test]
    fn test_is_playable() {
        let top = Card::number(Color::Red, 5);
        assert!(is_playable(&Card::number(Color::Red, 3), Some(&top)));
        assert!(!is_playable(&Card::number(Color::Blue, 3), Some(&top)));
        assert!(is_playable(&Card::number(Color::Blue, 3), None));
    }
}
