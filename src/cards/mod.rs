//! Card system: card values and the deck builder.
//!
//! ## Key Types
//!
//! - `Color`, `Label`: the two fields of a card
//! - `Card`: immutable card value with multiset semantics
//! - `Deck`: the standard 100-card deck and its seeded shuffle

pub mod card;
pub mod deck;

pub use card::{Card, Color, Label};
pub use deck::{count_cards, Deck, STANDARD_DECK_SIZE};
