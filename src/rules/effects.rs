//! Action card effects.
//!
//! Every played card resolves to an `Effect`, and every effect to a
//! `Resolution`: how far the turn advances, whether direction flips, and how
//! many cards the next player must draw.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Label};
use crate::core::ReverseRule;

/// Cards the next player draws from a Draw Two.
pub const DRAW_TWO_PENALTY: usize = 2;

/// Effect of a played card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Number card, or no card played.
    #[default]
    None,
    Skip,
    Reverse,
    DrawTwo,
}

impl Effect {
    /// The effect a card carries.
    #[must_use]
    pub const fn of(card: &Card) -> Self {
        match card.label {
            Label::Number(_) => Effect::None,
            Label::Skip => Effect::Skip,
            Label::Reverse => Effect::Reverse,
            Label::DrawTwo => Effect::DrawTwo,
        }
    }

    /// Work out the turn-order consequences at a table of `player_count`.
    #[must_use]
    pub fn resolve(self, reverse_rule: ReverseRule, player_count: usize) -> Resolution {
        match self {
            Effect::None => Resolution::NEXT,
            Effect::Skip => Resolution::SKIP,
            Effect::Reverse => {
                let skips = reverse_rule == ReverseRule::SkipWithTwoPlayers && player_count == 2;
                Resolution {
                    steps: if skips { 2 } else { 1 },
                    flip_direction: true,
                    next_player_draws: 0,
                }
            }
            Effect::DrawTwo => Resolution {
                next_player_draws: DRAW_TWO_PENALTY,
                ..Resolution::SKIP
            },
        }
    }
}

/// Turn-order outcome of an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Seats to advance, counted in the direction after any flip.
    pub steps: usize,

    /// Flip direction before advancing.
    pub flip_direction: bool,

    /// Cards the next seat (in the direction before any flip) draws.
    pub next_player_draws: usize,
}

impl Resolution {
    const NEXT: Self = Self {
        steps: 1,
        flip_direction: false,
        next_player_draws: 0,
    };

    const SKIP: Self = Self {
        steps: 2,
        flip_direction: false,
        next_player_draws: 0,
    };

    /// A turn with no card played.
    #[must_use]
    pub const fn pass() -> Self {
        Self::NEXT
    }
}
