//! Card values.
//!
//! A `Card` is a plain `Copy` value: a `Color` and a `Label`. A deck holds
//! many equal cards, so cards carry no identity beyond their fields.

use serde::{Deserialize, Serialize};

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// All colors in deck-building order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// Face value of a card: a digit or an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    /// Number card, 0 through 9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl Label {
    /// Action labels in play-selection priority order.
    pub const ACTIONS: [Label; 3] = [Label::Skip, Label::Reverse, Label::DrawTwo];

    /// Is this an action label (Skip, Reverse, DrawTwo)?
    #[must_use]
    pub const fn is_action(self) -> bool {
        !matches!(self, Label::Number(_))
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Number(n) => write!(f, "{}", n),
            Label::Skip => f.write_str("Skip"),
            Label::Reverse => f.write_str("Reverse"),
            Label::DrawTwo => f.write_str("Draw Two"),
        }
    }
}

/// A playing card.
///
/// ```
/// use uno_engine::cards::{Card, Color, Label};
///
/// let card = Card::new(Color::Red, Label::Number(5));
/// assert_eq!(card.to_string(), "Red 5");
/// assert!(card.matches(&Card::new(Color::Blue, Label::Number(5))));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub label: Label,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(color: Color, label: Label) -> Self {
        Self { color, label }
    }

    /// Number card shorthand.
    #[must_use]
    pub const fn number(color: Color, value: u8) -> Self {
        Self::new(color, Label::Number(value))
    }

    /// Is this an action card?
    #[must_use]
    pub const fn is_action(&self) -> bool {
        self.label.is_action()
    }

    /// Can this card be played on `top`? True on a color or label match.
    #[must_use]
    pub fn matches(&self, top: &Card) -> bool {
        self.color == top.color || self.label == top.label
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.label)
    }
}
