//! Read-only snapshots of a game for logs and diagnostics.

use serde::Serialize;

use super::engine::UnoGame;
use super::state::Phase;
use crate::cards::Card;
use crate::core::{Direction, PlayerId};

/// A point-in-time view of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StateReport {
    pub phase: Phase,
    pub current_player: PlayerId,
    pub direction: Direction,
    pub top: Option<Card>,
    pub hand_sizes: Vec<usize>,
    pub draw_pile: usize,
    pub discard_pile: usize,
    pub winner: Option<PlayerId>,
}

impl std::fmt::Display for StateReport {
    /// `Player 0's turn, Direction: Clockwise, Top: Red 5, Players cards: P0:7, P1:7`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player {}'s turn, Direction: {}, Top: ",
            self.current_player.index(),
            self.direction
        )?;
        match &self.top {
            Some(card) => write!(f, "{}", card)?,
            None => f.write_str("None")?,
        }
        f.write_str(", Players cards: ")?;
        for (i, size) in self.hand_sizes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "P{}:{}", i, size)?;
        }
        if let Some(winner) = self.winner {
            write!(f, ", Winner: P{}", winner.index())?;
        }
        Ok(())
    }
}

impl UnoGame {
    /// Snapshot the observable state.
    #[must_use]
    pub fn report(&self) -> StateReport {
        StateReport {
            phase: self.phase(),
            current_player: self.current_player(),
            direction: self.direction(),
            top: self.top_card().copied(),
            hand_sizes: self.hand_sizes(),
            draw_pile: self.draw_pile().len(),
            discard_pile: self.discard_pile().len(),
            winner: self.winner(),
        }
    }

    /// One-line human-readable state.
    #[must_use]
    pub fn describe(&self) -> String {
        self.report().to_string()
    }
}
