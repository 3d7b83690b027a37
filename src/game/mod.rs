//! The UNO-style turn engine.
//!
//! - Each player starts with seven cards from a seeded 100-card deck
//! - On your turn: play a card matching the top discard by color or label,
//!   otherwise draw one card and, depending on `DrawPolicy`, maybe play it
//! - Skip, Reverse and Draw Two change turn order
//! - First player to empty their hand wins
//!
//! Supports 1-255 seats; beyond 14 players the deal runs the deck dry.

mod engine;
mod report;
mod state;

pub use engine::{Layout, UnoGame, UnoGameBuilder};
pub use report::StateReport;
pub use state::{Phase, TurnRecord, TurnState};
