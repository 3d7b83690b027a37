//! # uno-engine
//!
//! A deterministic turn engine for a simplified UNO-style card game:
//! number cards plus Skip, Reverse and Draw Two, for any number of players.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the deck is shuffled from a seed, and play
//!    selection follows a fixed priority, so a seed replays the same game.
//!
//! 2. **N-Player First**: turn order is computed modulo the player count.
//!    Nothing assumes two players.
//!
//! 3. **Configuration Over Convention**: the two contested rules (what to do
//!    with a drawn card, and Reverse at a two-player table) are chosen via
//!    `UnoConfig`.
//!
//! ## Modules
//!
//! - `core`: Players, direction, RNG, configuration, errors
//! - `cards`: Card values and the deck builder
//! - `zones`: Hands and piles
//! - `rules`: Play selection, action effects, game results
//! - `game`: The turn engine and state reporter

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Direction, PlayerId, PlayerMap,
    GameRng,
    DrawPolicy, ReverseRule, UnoConfig,
    UnoError,
};

pub use crate::cards::{Card, Color, Deck, Label, STANDARD_DECK_SIZE};

pub use crate::zones::{DiscardPile, DrawPile, Hand};

pub use crate::rules::{Effect, GameResult};

pub use crate::game::{Layout, Phase, StateReport, TurnRecord, TurnState, UnoGame, UnoGameBuilder};
