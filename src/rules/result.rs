//! How a game ends.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of driving a game with `UnoGame::run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player emptied their hand.
    Winner(PlayerId),
    /// Nobody can play and the draw pile is empty.
    Stalled,
    /// The turn limit passed to `run` was reached first.
    TurnLimit,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Stalled | GameResult::TurnLimit => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::Stalled => write!(f, "stalled"),
            GameResult::TurnLimit => write!(f, "turn limit reached"),
        }
    }
}
