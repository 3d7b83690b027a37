//! Game rules, separate from engine bookkeeping.
//!
//! - `matching`: which card a hand plays on a given top card
//! - `effects`: what Skip, Reverse and Draw Two do to turn order
//! - `result`: how a driven game ends

pub mod matching;
pub mod effects;
pub mod result;

pub use matching::{is_playable, select_play};
pub use effects::{Effect, Resolution, DRAW_TWO_PENALTY};
pub use result::GameResult;
