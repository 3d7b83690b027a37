//! Turn bookkeeping: phase, seat/direction/winner, and per-turn records.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Direction, PlayerId};
use crate::rules::Effect;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, not yet dealt. Turns are ignored.
    #[default]
    Created,
    /// Inside `initialize()`.
    Dealing,
    /// Waiting for the next `play_turn()`.
    AwaitingTurn,
    /// A winner is recorded. Terminal.
    Finished,
}

/// Whose turn it is, which way play goes, and who won.
///
/// `winner` moves from `None` to `Some` at most once per game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub current_player: PlayerId,
    pub direction: Direction,
    pub winner: Option<PlayerId>,
}

impl TurnState {
    /// Player 0 to act, clockwise, no winner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary seat and direction.
    #[must_use]
    pub fn starting_at(current_player: PlayerId, direction: Direction) -> Self {
        Self {
            current_player,
            direction,
            winner: None,
        }
    }

    /// Seat `steps` away from the current one in the current direction.
    #[must_use]
    pub fn peek(&self, steps: usize, player_count: usize) -> PlayerId {
        self.current_player.step(self.direction, steps, player_count)
    }

    /// Move the turn `steps` seats on.
    pub fn advance(&mut self, steps: usize, player_count: usize) {
        self.current_player = self.peek(steps, player_count);
    }

    pub fn flip_direction(&mut self) {
        self.direction = self.direction.reversed();
    }

    /// Record the winner. Later calls keep the first winner.
    pub fn set_winner(&mut self, player: PlayerId) {
        self.winner.get_or_insert(player);
    }
}

/// What happened on one resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn counter within the game.
    pub turn: u32,

    /// The acting player.
    pub player: PlayerId,

    /// Card moved to the discard pile, if any.
    pub played: Option<Card>,

    /// Card taken from the draw pile, if any. It may also be `played`.
    pub drawn: Option<Card>,

    /// Effect of the played card.
    pub effect: Effect,

    /// Cards the next player drew because of a Draw Two.
    pub penalty_cards: usize,
}

impl TurnRecord {
    /// No card played and none drawn.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.played.is_none() && self.drawn.is_none()
    }
}
